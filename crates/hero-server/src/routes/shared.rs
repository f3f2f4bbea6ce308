use axum::extract::Path;
use axum::Json;

use hero_core::hero::HeroData;
use hero_core::share;

use crate::error::AppError;

/// GET /api/shared/:token — resolve a share token to its hero data.
///
/// Pure decode, no storage: the token carries the whole snapshot. An
/// unreadable token answers 404, indistinguishable from a never-issued one.
pub async fn get_shared(Path(token): Path<String>) -> Result<Json<HeroData>, AppError> {
    let snapshot = share::decode(&token)?;
    Ok(Json(snapshot.hero().clone()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
