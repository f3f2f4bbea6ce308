use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use hero_core::error::HeroError;
use hero_core::session::SessionRecord;

use crate::db::StoredSession;
use crate::error::AppError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

/// GET /api/sessions/:user_id — fetch one user's journey session.
pub async fn get_session(
    State(app): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<StoredSession>, AppError> {
    let db = app.db.clone();
    let row = tokio::task::spawn_blocking(move || {
        db.get(&user_id)?
            .ok_or(HeroError::SessionNotFound(user_id))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(row))
}

// ---------------------------------------------------------------------------
// Put
// ---------------------------------------------------------------------------

/// PUT /api/sessions/:user_id — create or replace the journey session.
pub async fn put_session(
    State(app): State<AppState>,
    Path(user_id): Path<String>,
    Json(record): Json<SessionRecord>,
) -> Result<Json<StoredSession>, AppError> {
    let db = app.db.clone();
    let row = tokio::task::spawn_blocking(move || db.upsert(&user_id, record))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(row))
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// DELETE /api/sessions/:user_id — remove the journey session.
///
/// Idempotent: deleting an absent session still answers 204.
pub async fn delete_session(
    State(app): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let db = app.db.clone();
    tokio::task::spawn_blocking(move || db.delete(&user_id))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
