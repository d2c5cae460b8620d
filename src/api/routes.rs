//! API Routes
//!
//! Configures the Axum router for the cafe directory.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{cafe_handler, AppState};

/// Creates the main router.
///
/// # Endpoints
/// - `GET /cafe` - List cafes in a city
///
/// # Middleware
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/cafe", get(cafe_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CafeDataset;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        create_router(AppState::new(CafeDataset::builtin()))
    }

    async fn send(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_cafe_endpoint() {
        let (status, body) = send(create_test_app(), "/cafe?city=tula&count=2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Дом чая,Пряничный двор");
    }

    #[tokio::test]
    async fn test_missing_city() {
        let (status, body) = send(create_test_app(), "/cafe").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "unknown city");
    }

    #[tokio::test]
    async fn test_percent_encoded_search() {
        // search=кофе
        let uri = "/cafe?city=moscow&search=%D0%BA%D0%BE%D1%84%D0%B5";
        let (status, body) = send(create_test_app(), uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Мир кофе,Кофе и завтраки");
    }

    #[tokio::test]
    async fn test_repeated_keys_take_first_value() {
        let (status, body) = send(create_test_app(), "/cafe?city=tula&city=moscow").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Дом чая,Пряничный двор,Самоварная");

        let (status, body) = send(create_test_app(), "/cafe?city=tula&count=1&count=2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Дом чая");
    }

    #[tokio::test]
    async fn test_wrong_method() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/cafe?city=tula")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
