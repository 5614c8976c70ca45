//! Route definitions for the `/pages` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Routes mounted at the API root.
///
/// ```text
/// GET /pages -> fixed page catalog with section counts (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/pages", get(pages::list))
}
