//! Handler for the fixed page catalog.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::state::AppState;
use tones_db::repositories::PageSectionRepo;

/// GET /api/v1/pages
///
/// Every page the site knows about, with its label, path and the number
/// of sections currently stored for it. Pages with no content still
/// appear with a zero count.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let pages = PageSectionRepo::list_pages(&state.pool).await?;
    Ok(Json(pages))
}
