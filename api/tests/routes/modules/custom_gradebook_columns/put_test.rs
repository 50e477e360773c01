#[cfg(test)]
mod tests {
    use super::super::fixtures::setup;
    use crate::helpers::body_json;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use db::repositories::column_datum_repository::ColumnDatumRepository;
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn set_then_clear_a_value() {
        let course = setup().await;
        let uri = course.datum_uri(course.student_id);

        let req = course.write(
            "PUT",
            &uri,
            course.lecturer_id,
            json!({ "column_data": { "content": "Nut allergy" } }),
        );
        let response = course.app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "content": "Nut allergy", "user_id": course.student_id })
        );

        let list = course.get(&course.data_uri(), course.lecturer_id);
        let json = body_json(course.app.clone().oneshot(list).await.unwrap()).await;
        assert_eq!(json, json!([{ "content": "Nut allergy", "user_id": course.student_id }]));

        let req = course.write(
            "PUT",
            &uri,
            course.lecturer_id,
            json!({ "column_data": { "content": "" } }),
        );
        let response = course.app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "content": "", "user_id": course.student_id })
        );

        let list = course.get(&course.data_uri(), course.lecturer_id);
        let json = body_json(course.app.clone().oneshot(list).await.unwrap()).await;
        assert_eq!(json, json!([]));
    }

    #[tokio::test]
    async fn patch_replaces_existing_value() {
        let course = setup().await;
        course.seed_datum(course.student_id, "Nut allergy").await;

        let req = course.write(
            "PATCH",
            &course.datum_uri(course.student_id),
            course.tutor_id,
            json!({ "column_data": { "content": "Shellfish allergy" } }),
        );
        let response = course.app.clone().oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["content"], "Shellfish allergy");

        let count = ColumnDatumRepository::count_for_column(course.state.db(), course.column_id)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn missing_content_keeps_existing_value() {
        let course = setup().await;
        course.seed_datum(course.student_id, "Nut allergy").await;

        let req = course.write(
            "PUT",
            &course.datum_uri(course.student_id),
            course.lecturer_id,
            json!({}),
        );
        let response = course.app.clone().oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["content"], "Nut allergy");
    }

    #[tokio::test]
    async fn too_long_content_returns_field_errors() {
        let course = setup().await;

        let req = course.write(
            "PUT",
            &course.datum_uri(course.student_id),
            course.lecturer_id,
            json!({ "column_data": { "content": "x".repeat(256) } }),
        );
        let response = course.app.clone().oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "content": ["is too long (maximum is 255 characters)"] })
        );

        let stored = ColumnDatumRepository::find_by_column_and_user(
            course.state.db(),
            course.column_id,
            course.student_id,
        )
        .await
        .unwrap();
        assert!(stored.is_none());
    }

    #[tokio::test]
    async fn student_cannot_update_own_value() {
        let course = setup().await;

        let req = course.write(
            "PUT",
            &course.datum_uri(course.student_id),
            course.student_id,
            json!({ "column_data": { "content": "Nut allergy" } }),
        );
        let response = course.app.clone().oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            body_json(response).await["message"],
            "You do not have permission to update this column"
        );
    }

    #[tokio::test]
    async fn student_cannot_see_classmates() {
        let course = setup().await;

        let req = course.write(
            "PUT",
            &course.datum_uri(course.other_student_id),
            course.student_id,
            json!({ "column_data": { "content": "Nut allergy" } }),
        );
        let response = course.app.clone().oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["message"], "User not found");
    }

    #[tokio::test]
    async fn non_student_target_is_not_found() {
        let course = setup().await;

        for target in [course.tutor_id, course.outsider_id, 9999] {
            let req = course.write(
                "PUT",
                &course.datum_uri(target),
                course.lecturer_id,
                json!({ "column_data": { "content": "Nut allergy" } }),
            );
            let response = course.app.clone().oneshot(req).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }
    }

    #[tokio::test]
    async fn unknown_column_is_not_found() {
        let course = setup().await;

        let uri = format!(
            "/api/modules/{}/custom_gradebook_columns/9999/data/{}",
            course.module_id, course.student_id
        );
        let req = course.write(
            "PUT",
            &uri,
            course.lecturer_id,
            json!({ "column_data": { "content": "Nut allergy" } }),
        );
        let response = course.app.clone().oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["message"], "Column not found");
    }

    #[tokio::test]
    async fn missing_token_is_unauthorized() {
        let course = setup().await;

        let req = Request::builder()
            .method("PUT")
            .uri(course.datum_uri(course.student_id))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"column_data":{"content":"x"}}"#))
            .unwrap();
        let response = course.app.clone().oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn malformed_body_uses_error_envelope() {
        let course = setup().await;

        let req = Request::builder()
            .method("PUT")
            .uri(course.datum_uri(course.student_id))
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", course.token(course.lecturer_id)),
            )
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"column_data": "#))
            .unwrap();
        let response = course.app.clone().oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["data"], json!({}));
        assert!(json["message"].is_string());
    }
}
