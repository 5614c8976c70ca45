//! Route definitions for the render plan endpoint.

use axum::routing::get;
use axum::Router;

use crate::handlers::render;
use crate::state::AppState;

/// Routes mounted at the API root.
///
/// ```text
/// GET /render-plan?path=/ja/about.html -> DOM patch plan (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/render-plan", get(render::plan))
}
