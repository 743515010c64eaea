use axum::{routing::get, Router};

use crate::features::home::handlers;

pub fn routes() -> Router {
    Router::new()
        .route("/", get(handlers::get_hello))
        .route("/health", get(handlers::health_check))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_hello() {
        let server = TestServer::new(routes()).unwrap();
        let response = server.get("/").await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "status": "success",
            "message": "successfully get message",
            "data": "Hello, World"
        }));
    }

    #[tokio::test]
    async fn test_health_check() {
        let server = TestServer::new(routes()).unwrap();
        server.get("/health").await.assert_status_ok();
    }
}
