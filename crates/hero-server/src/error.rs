use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hero_core::error::HeroError;

// ---------------------------------------------------------------------------
// AppError — unified error type for HTTP responses
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if let Some(e) = self.0.downcast_ref::<HeroError>() {
            match e {
                HeroError::SessionNotFound(_) | HeroError::SnapshotDecode => StatusCode::NOT_FOUND,
                HeroError::NotInitialized
                | HeroError::InvalidGate(_)
                | HeroError::InvalidProfile(_)
                | HeroError::InvalidStage(_)
                | HeroError::InvalidHeroType(_)
                | HeroError::InvalidAuthority(_)
                | HeroError::InvalidFlow(_)
                | HeroError::InvalidUserId(_) => StatusCode::BAD_REQUEST,
                HeroError::InvalidTransition { .. } | HeroError::JourneyIncomplete => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                HeroError::CorruptSession { .. }
                | HeroError::RemoteStore(_)
                | HeroError::Database(_)
                | HeroError::Io(_)
                | HeroError::Yaml(_)
                | HeroError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn session_not_found_maps_to_404() {
        let err = AppError(HeroError::SessionNotFound("traveler".into()).into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn snapshot_decode_maps_to_404() {
        let err = AppError(HeroError::SnapshotDecode.into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_user_id_maps_to_400() {
        let err = AppError(HeroError::InvalidUserId("Not Valid!".into()).into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_gate_maps_to_400() {
        let err = AppError(HeroError::InvalidGate("65".into()).into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_transition_maps_to_422() {
        let err = AppError(
            HeroError::InvalidTransition {
                from: "welcome".into(),
                to: "mythos".into(),
                reason: "not an edge in the express flow".into(),
            }
            .into(),
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn journey_incomplete_maps_to_422() {
        let err = AppError(HeroError::JourneyIncomplete.into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn database_error_maps_to_500() {
        let err = AppError(HeroError::Database("table corrupted".into()).into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn non_hero_error_maps_to_500() {
        let err = AppError(anyhow::anyhow!("something unexpected"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn response_body_is_json_with_error_field() {
        let err = AppError(HeroError::SessionNotFound("traveler".into()).into());
        let response = err.into_response();
        let ct = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .expect("should have content-type");
        assert!(
            ct.to_str().unwrap().contains("application/json"),
            "expected JSON content type, got {:?}",
            ct
        );
    }
}
