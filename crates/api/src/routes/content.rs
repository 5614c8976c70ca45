//! Route definitions for the `/content` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

/// Routes mounted at the API root.
///
/// ```text
/// GET    /content/{page}                -> list visible sections (public)
/// GET    /content/{page}/{section_key}  -> get one section by key (public)
/// POST   /content                       -> create (requires auth)
/// PUT    /content/{id}                  -> update (requires auth)
/// DELETE /content/{id}                  -> delete (requires auth)
/// GET    /content-by-id/{id}            -> raw record (requires auth)
/// PUT    /content-reorder               -> atomic reorder (requires auth)
/// ```
///
/// `GET /content/{page}` and `PUT /content/{id}` share one path shape, so
/// they are registered on a single route with per-method extractors.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/content", post(content::create))
        .route(
            "/content/{key}",
            get(content::list_for_page)
                .put(content::update)
                .delete(content::remove),
        )
        .route("/content/{page}/{section_key}", get(content::get_by_key))
        .route("/content-by-id/{id}", get(content::get_by_id))
        .route("/content-reorder", put(content::reorder))
}
