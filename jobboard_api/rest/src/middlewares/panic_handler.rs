use std::panic::AssertUnwindSafe;

use anyhow::anyhow;
use axum::{
    extract::Request,
    middleware::{from_fn, Next},
    response::Response,
    Router,
};
use futures::FutureExt;

use crate::errors::internal_server_error;

pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router.layer(from_fn(middleware))
}

async fn middleware(request: Request, next: Next) -> Response {
    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(_) => internal_server_error(anyhow!("Request handler panicked")),
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, routing};
    use tokio::net::TcpListener;

    use super::*;

    async fn boom() -> &'static str {
        panic!("boom")
    }

    #[tokio::test]
    async fn panic_becomes_internal_server_error() {
        // Arrange
        let router = add(Router::new().route("/", routing::get(boom)));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await });

        // Act
        let response = reqwest::get(format!("http://{address}/")).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.json::<serde_json::Value>().await.unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Request handler panicked");
    }
}
