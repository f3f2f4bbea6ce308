pub mod db;
pub mod error;
pub mod routes;
pub mod state;

use axum::routing::get;
use axum::Router;
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(root: PathBuf) -> anyhow::Result<Router> {
    let app_state = state::AppState::new(root)?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Ok(Router::new()
        // Sessions
        .route(
            "/api/sessions/{user_id}",
            get(routes::sessions::get_session)
                .put(routes::sessions::put_session)
                .delete(routes::sessions::delete_session),
        )
        // Shared snapshots
        .route("/api/shared/{token}", get(routes::shared::get_shared))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state))
}

/// Start the session sync server.
pub async fn serve(root: PathBuf, port: u16) -> anyhow::Result<()> {
    let app = build_router(root)?;

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("hero frequency sync server listening on http://localhost:{port}");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Start the session sync server on a pre-bound listener.
///
/// Unlike `serve`, this accepts a `TcpListener` that was already bound so the
/// caller can read the actual port before starting (useful when `port = 0` and
/// the OS picks a free port).
pub async fn serve_on(root: PathBuf, listener: tokio::net::TcpListener) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let app = build_router(root)?;

    tracing::info!("hero frequency sync server listening on http://localhost:{actual_port}");

    axum::serve(listener, app).await?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Router-level tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::util::ServiceExt;

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn put_get_delete_session_lifecycle() {
        let dir = tempfile::TempDir::new().unwrap();
        let router = build_router(dir.path().to_path_buf()).unwrap();

        let record = serde_json::json!({
            "activeStep": "reveal",
            "heroData": { "personalitySun": 1, "designSun": 8 },
            "updatedAt": "2025-06-01T12:00:00Z",
        });

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/sessions/traveler")
                    .header("content-type", "application/json")
                    .body(Body::from(record.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let saved = body_json(response).await;
        assert_eq!(saved["userId"], "traveler");
        assert_eq!(saved["activeStep"], "reveal");
        assert!(saved["id"].is_string());

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/sessions/traveler")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let fetched = body_json(response).await;
        assert_eq!(fetched["id"], saved["id"]);
        assert_eq!(fetched["heroData"]["personalitySun"], 1);

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/sessions/traveler")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/sessions/traveler")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_share_token_is_404() {
        let dir = tempfile::TempDir::new().unwrap();
        let router = build_router(dir.path().to_path_buf()).unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/shared/definitely-not-base64!!")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn malformed_session_body_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let router = build_router(dir.path().to_path_buf()).unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/sessions/traveler")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"activeStep": "not-a-stage"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
