//! Handler for the server-computed render plan.
//!
//! Resolves a request path to a page and language, loads the page's
//! visible sections, and returns the DOM patch plan a client applies to
//! its static document.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use tones_core::locale::{Language, RenderContext};
use tones_core::render::{render_page, template_for, DomPatch, RenderSection};
use tones_core::section::SectionType;

use crate::error::AppResult;
use crate::state::AppState;
use tones_db::repositories::PageSectionRepo;

#[derive(Debug, Deserialize)]
pub struct RenderPlanParams {
    /// Request path of the static page, e.g. `/ja/about.html`.
    pub path: String,
    /// Optional explicit language override for the path-derived one.
    pub lang: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RenderPlanResponse {
    pub page: Option<&'static str>,
    pub lang: &'static str,
    pub patches: Vec<DomPatch>,
}

/// GET /api/v1/render-plan?path=/ja/about.html
///
/// Unresolvable paths are not an error: the response carries a null page
/// and no patches, and the caller leaves its document untouched.
pub async fn plan(
    State(state): State<AppState>,
    Query(params): Query<RenderPlanParams>,
) -> AppResult<impl IntoResponse> {
    let mut ctx = RenderContext::from_path(&params.path);
    if let Some(lang) = params.lang.as_deref() {
        ctx.lang = Language::parse(lang);
    }

    let Some(page) = ctx.page else {
        return Ok(Json(RenderPlanResponse {
            page: None,
            lang: ctx.lang.code(),
            patches: Vec::new(),
        }));
    };

    let sections =
        PageSectionRepo::list_for_page(&state.pool, page.as_str(), ctx.lang).await?;

    // Rows with a type the renderer does not know contribute nothing.
    let render_sections: Vec<RenderSection<'_>> = sections
        .iter()
        .filter_map(|s| {
            let section_type = SectionType::parse(&s.section_type)?;
            Some(RenderSection {
                section_type,
                is_visible: s.is_visible,
                content: s.content.as_ref(),
            })
        })
        .collect();

    let template = template_for(page);
    let patches = render_page(&template, &render_sections);

    Ok(Json(RenderPlanResponse {
        page: Some(page.as_str()),
        lang: ctx.lang.code(),
        patches,
    }))
}
