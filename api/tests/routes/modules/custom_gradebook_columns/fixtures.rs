use api::auth::generate_jwt;
use axum::{
    Router,
    body::Body,
    http::{Request, header},
};
use db::models::{
    custom_gradebook_column, module, user,
    user_module_role::{self, Role},
};
use db::repositories::column_datum_repository::ColumnDatumRepository;
use serde_json::Value;
use util::state::AppState;

use crate::helpers::make_test_app;

/// A module with one column and a user for every role.
pub struct Course {
    pub app: Router,
    pub state: AppState,
    pub module_id: i64,
    pub column_id: i64,
    pub admin_id: i64,
    pub lecturer_id: i64,
    pub tutor_id: i64,
    pub student_id: i64,
    pub other_student_id: i64,
    pub outsider_id: i64,
}

pub async fn setup() -> Course {
    let (app, state) = make_test_app().await;
    let db = state.db();

    let m = module::Model::create(db, "COS301", 2025, Some("Software Engineering"))
        .await
        .unwrap();
    let column = custom_gradebook_column::Model::create(db, m.id, "Notes", 1)
        .await
        .unwrap();

    let admin = user::Model::create(db, "admin", "admin@test.com", true).await.unwrap();
    let outsider = user::Model::create(db, "outsider", "outsider@test.com", false)
        .await
        .unwrap();

    let mut ids = Vec::new();
    for (name, role) in [
        ("lecturer", Role::Lecturer),
        ("tutor", Role::Tutor),
        ("student", Role::Student),
        ("student2", Role::Student),
    ] {
        let u = user::Model::create(db, name, &format!("{name}@test.com"), false)
            .await
            .unwrap();
        user_module_role::Model::assign_user_to_module(db, u.id, m.id, role)
            .await
            .unwrap();
        ids.push(u.id);
    }

    Course {
        app,
        module_id: m.id,
        column_id: column.id,
        admin_id: admin.id,
        lecturer_id: ids[0],
        tutor_id: ids[1],
        student_id: ids[2],
        other_student_id: ids[3],
        outsider_id: outsider.id,
        state,
    }
}

impl Course {
    pub fn token(&self, user_id: i64) -> String {
        generate_jwt(user_id, user_id == self.admin_id).0
    }

    pub fn data_uri(&self) -> String {
        format!(
            "/api/modules/{}/custom_gradebook_columns/{}/data",
            self.module_id, self.column_id
        )
    }

    pub fn datum_uri(&self, user_id: i64) -> String {
        format!("{}/{}", self.data_uri(), user_id)
    }

    pub async fn seed_datum(&self, user_id: i64, content: &str) {
        ColumnDatumRepository::upsert(self.state.db(), None, self.column_id, user_id, content)
            .await
            .unwrap();
    }

    pub fn get(&self, uri: &str, as_user: i64) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token(as_user)))
            .body(Body::empty())
            .unwrap()
    }

    pub fn write(&self, method: &str, uri: &str, as_user: i64, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token(as_user)))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }
}
