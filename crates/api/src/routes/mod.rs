pub mod auth;
pub mod content;
pub mod health;
pub mod pages;
pub mod render;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                       login (public)
///
/// /content/{page}                   list visible sections (public)
/// /content/{page}/{section_key}     get one section by key (public)
/// /content/{id}                     update, delete (requires auth)
/// /content                          create (requires auth)
/// /content-by-id/{id}               raw record for the edit form (requires auth)
/// /content-reorder                  atomic reorder batch (requires auth)
///
/// /pages                            fixed page catalog with section counts (public)
/// /render-plan                      DOM patch plan for a request path (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (login).
        .nest("/auth", auth::router())
        // Page content CRUD and reorder.
        .merge(content::router())
        // Fixed page catalog.
        .merge(pages::router())
        // Server-computed render plans.
        .merge(render::router())
}
