#[cfg(test)]
mod tests {
    use super::super::fixtures::setup;
    use crate::helpers::body_json;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use db::models::{custom_gradebook_column, module};
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn lecturer_lists_data_ordered_by_user() {
        let course = setup().await;
        course.seed_datum(course.other_student_id, "Left-handed").await;
        course.seed_datum(course.student_id, "Nut allergy").await;

        let req = course.get(&course.data_uri(), course.lecturer_id);
        let response = course.app.clone().oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(
            json,
            json!([
                { "content": "Nut allergy", "user_id": course.student_id },
                { "content": "Left-handed", "user_id": course.other_student_id },
            ])
        );
    }

    #[tokio::test]
    async fn tutor_and_admin_can_list() {
        let course = setup().await;
        course.seed_datum(course.student_id, "Nut allergy").await;

        for user_id in [course.tutor_id, course.admin_id] {
            let req = course.get(&course.data_uri(), user_id);
            let response = course.app.clone().oneshot(req).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let json = body_json(response).await;
            assert_eq!(json.as_array().unwrap().len(), 1);
        }
    }

    #[tokio::test]
    async fn empty_column_lists_nothing() {
        let course = setup().await;

        let req = course.get(&course.data_uri(), course.lecturer_id);
        let response = course.app.clone().oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn students_and_outsiders_are_forbidden() {
        let course = setup().await;

        for user_id in [course.student_id, course.outsider_id] {
            let req = course.get(&course.data_uri(), user_id);
            let response = course.app.clone().oneshot(req).await.unwrap();
            assert_eq!(response.status(), StatusCode::FORBIDDEN);

            let json = body_json(response).await;
            assert_eq!(json["success"], false);
            assert_eq!(json["message"], "You do not have permission to view this column");
        }
    }

    #[tokio::test]
    async fn missing_token_is_unauthorized() {
        let course = setup().await;

        let req = Request::builder()
            .method("GET")
            .uri(course.data_uri())
            .body(Body::empty())
            .unwrap();
        let response = course.app.clone().oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["data"], json!({}));
    }

    #[tokio::test]
    async fn unknown_module_is_not_found() {
        let course = setup().await;

        let uri = format!(
            "/api/modules/9999/custom_gradebook_columns/{}/data",
            course.column_id
        );
        let response = course
            .app
            .clone()
            .oneshot(course.get(&uri, course.admin_id))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["message"], "Module not found");
    }

    #[tokio::test]
    async fn deleted_column_is_not_found() {
        let course = setup().await;
        custom_gradebook_column::Model::soft_delete(course.state.db(), course.column_id)
            .await
            .unwrap();

        let req = course.get(&course.data_uri(), course.lecturer_id);
        let response = course.app.clone().oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["message"], "Column not found");
    }

    #[tokio::test]
    async fn column_of_another_module_is_not_found() {
        let course = setup().await;
        let other = module::Model::create(course.state.db(), "COS332", 2025, None)
            .await
            .unwrap();

        let uri = format!(
            "/api/modules/{}/custom_gradebook_columns/{}/data",
            other.id, course.column_id
        );
        let response = course
            .app
            .clone()
            .oneshot(course.get(&uri, course.admin_id))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn pagination_sets_link_header() {
        let course = setup().await;
        course.seed_datum(course.student_id, "a").await;
        course.seed_datum(course.other_student_id, "b").await;

        let uri = format!("{}?page=1&per_page=1", course.data_uri());
        let response = course
            .app
            .clone()
            .oneshot(course.get(&uri, course.lecturer_id))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let link = response
            .headers()
            .get(header::LINK)
            .unwrap()
            .to_str()
            .unwrap()
            .to_owned();
        let base = course.data_uri();
        assert!(link.contains(&format!("<{base}?page=1&per_page=1>; rel=\"current\"")));
        assert!(link.contains(&format!("<{base}?page=2&per_page=1>; rel=\"next\"")));
        assert!(link.contains(&format!("<{base}?page=2&per_page=1>; rel=\"last\"")));
        assert!(!link.contains("rel=\"prev\""));

        let json = body_json(response).await;
        assert_eq!(json, json!([{ "content": "a", "user_id": course.student_id }]));
    }

    #[tokio::test]
    async fn per_page_is_clamped() {
        let course = setup().await;
        course.seed_datum(course.student_id, "a").await;

        let uri = format!("{}?per_page=500", course.data_uri());
        let response = course
            .app
            .clone()
            .oneshot(course.get(&uri, course.lecturer_id))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let link = response.headers()[header::LINK].to_str().unwrap().to_owned();
        assert!(link.contains("per_page=50>"));
    }

    #[tokio::test]
    async fn huge_page_number_returns_empty_page() {
        let course = setup().await;
        course.seed_datum(course.student_id, "a").await;

        for page in ["18446744073709551615", "9223372036854775807"] {
            let uri = format!("{}?page={page}", course.data_uri());
            let response = course
                .app
                .clone()
                .oneshot(course.get(&uri, course.lecturer_id))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(body_json(response).await, json!([]));
        }
    }
}
