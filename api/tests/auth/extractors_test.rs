#[cfg(test)]
mod tests {
    use crate::helpers::{TEST_JWT_SECRET, init_test_env};
    use api::auth::{AuthUser, Claims, generate_jwt};
    use axum::{
        extract::FromRequestParts,
        http::{Request, StatusCode},
    };
    use jsonwebtoken::{EncodingKey, Header, encode};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn token_with(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
        .unwrap()
    }

    fn now() -> usize {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs() as usize
    }

    async fn extract(auth_header: Option<String>) -> Result<AuthUser, StatusCode> {
        let mut builder = Request::builder();
        if let Some(value) = auth_header {
            builder = builder.header("Authorization", value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();

        AuthUser::from_request_parts(&mut parts, &())
            .await
            .map_err(|(status, _)| status)
    }

    #[tokio::test]
    async fn test_valid_token() {
        init_test_env();
        let (token, _) = generate_jwt(7, true);

        let user = extract(Some(format!("Bearer {token}"))).await.unwrap();
        assert_eq!(user.0.sub, 7);
        assert!(user.0.admin);
        assert_eq!(user.actor().id, 7);
    }

    #[tokio::test]
    async fn test_invalid_token_wrong_secret() {
        init_test_env();
        let claims = Claims {
            sub: 1,
            exp: now() + 3600,
            admin: false,
        };
        let token = token_with(&claims, "not_the_secret");

        let result = extract(Some(format!("Bearer {token}"))).await;
        assert_eq!(result.unwrap_err(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_expired_token() {
        init_test_env();
        let claims = Claims {
            sub: 1,
            exp: now() - 3600,
            admin: false,
        };
        let token = token_with(&claims, TEST_JWT_SECRET);

        let result = extract(Some(format!("Bearer {token}"))).await;
        assert_eq!(result.unwrap_err(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_missing_header() {
        init_test_env();
        assert_eq!(extract(None).await.unwrap_err(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_wrong_scheme() {
        init_test_env();
        let result = extract(Some("Basic dXNlcjpwYXNz".into())).await;
        assert_eq!(result.unwrap_err(), StatusCode::UNAUTHORIZED);
    }
}
