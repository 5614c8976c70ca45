//! Handlers for the `/content` resource: the page-content CMS API.
//!
//! Reads are public and language-resolved; writes require an
//! authenticated admin. Content payloads are validated against the
//! per-type field tables on write, and decoded leniently on read.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tones_core::error::CoreError;
use tones_core::locale::PageSlug;
use tones_core::section::{validate_content, SectionType};
use tones_core::types::DbId;
use tones_db::models::section::{
    CreatePageSection, PageSection, ReorderItem, ResolvedSection, UpdatePageSection,
};
use tones_db::repositories::PageSectionRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::LangParams;
use crate::state::AppState;

/// Request body for `PUT /content-reorder`.
#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub items: Vec<ReorderItem>,
}

/// A single section as returned to the public by key: the resolved
/// content plus the raw language slots (the admin edit form needs both).
#[derive(Debug, Serialize)]
pub struct SectionDetail {
    #[serde(flatten)]
    pub section: ResolvedSection,
    pub content_ko: Option<String>,
    pub content_ja: Option<String>,
    pub content_zh_cn: Option<String>,
    pub content_zh_tw: Option<String>,
}

// ---------------------------------------------------------------------------
// Public read handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/content/{page}?lang=ko
///
/// Ordered, visible sections for a page with content resolved for the
/// requested language. Unknown pages yield an empty array, not an error:
/// callers treat "no content" as "keep the static fallback".
pub async fn list_for_page(
    State(state): State<AppState>,
    Path(page): Path<String>,
    Query(params): Query<LangParams>,
) -> AppResult<impl IntoResponse> {
    let sections =
        PageSectionRepo::list_for_page(&state.pool, &page, params.language()).await?;
    Ok(Json(sections))
}

/// GET /api/v1/content/{page}/{section_key}?lang=ko
///
/// A single section by its per-page key.
pub async fn get_by_key(
    State(state): State<AppState>,
    Path((page, section_key)): Path<(String, String)>,
    Query(params): Query<LangParams>,
) -> AppResult<impl IntoResponse> {
    let Some(section) =
        PageSectionRepo::find_by_key(&state.pool, &page, &section_key).await?
    else {
        return Err(AppError::Core(CoreError::NotFoundByKey {
            entity: "PageSection",
            key: format!("{page}/{section_key}"),
        }));
    };

    let detail = SectionDetail {
        section: section.resolved(params.language()),
        content_ko: section.content_ko.clone(),
        content_ja: section.content_ja.clone(),
        content_zh_cn: section.content_zh_cn.clone(),
        content_zh_tw: section.content_zh_tw.clone(),
    };
    Ok(Json(detail))
}

// ---------------------------------------------------------------------------
// Authenticated write handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/content-by-id/{id}
///
/// The full raw record for the admin edit form.
pub async fn get_by_id(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PageSection>> {
    let section = PageSectionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PageSection",
            id,
        }))?;
    Ok(Json(section))
}

/// POST /api/v1/content
///
/// Create a section. Fails with 409 when the `(page_slug, section_key)`
/// pair already exists and 400 when required fields are missing or a
/// content payload does not match its type's field table.
pub async fn create(
    _user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreatePageSection>,
) -> AppResult<impl IntoResponse> {
    if input.page_slug.is_empty() || input.section_type.is_empty() || input.section_key.is_empty()
    {
        return Err(AppError::Core(CoreError::Validation(
            "page_slug, section_type and section_key are required".into(),
        )));
    }
    if PageSlug::parse(&input.page_slug).is_none() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "unknown page '{}'",
            input.page_slug
        ))));
    }
    let ty = parse_section_type(&input.section_type)?;
    for slot in [
        &input.content_ko,
        &input.content_ja,
        &input.content_zh_cn,
        &input.content_zh_tw,
    ] {
        validate_slot(ty, slot)?;
    }

    let section = PageSectionRepo::create(&state.pool, &input)
        .await
        .map_err(classify_create_error)?;
    Ok((StatusCode::CREATED, Json(section)))
}

/// PUT /api/v1/content/{id}
///
/// Partial update: unspecified fields keep their prior values;
/// `updated_at` is always refreshed.
pub async fn update(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePageSection>,
) -> AppResult<Json<PageSection>> {
    let existing = PageSectionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PageSection",
            id,
        }))?;

    // Validate supplied slots against the (possibly updated) type.
    let type_name = input.section_type.as_deref().unwrap_or(&existing.section_type);
    let ty = parse_section_type(type_name)?;
    for slot in [
        &input.content_ko,
        &input.content_ja,
        &input.content_zh_cn,
        &input.content_zh_tw,
    ] {
        validate_slot(ty, slot)?;
    }

    let updated = PageSectionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PageSection",
            id,
        }))?;
    Ok(Json(updated))
}

/// DELETE /api/v1/content/{id}
///
/// Permanent removal; no soft delete or history.
pub async fn remove(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PageSectionRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "PageSection",
            id,
        }))
    }
}

/// PUT /api/v1/content-reorder
///
/// Apply a reorder batch atomically: any unknown id rejects the whole
/// batch with 404 and leaves every ordering untouched.
pub async fn reorder(
    _user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<ReorderRequest>,
) -> AppResult<StatusCode> {
    PageSectionRepo::reorder(&state.pool, &input.items).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_section_type(name: &str) -> Result<SectionType, AppError> {
    SectionType::parse(name).ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "unknown section_type '{name}'"
        )))
    })
}

/// Validate one language slot against the type's field table. Slots
/// posted as pre-serialized JSON strings are parsed first.
fn validate_slot(ty: SectionType, slot: &Option<Value>) -> Result<(), AppError> {
    let Some(value) = slot else {
        return Ok(());
    };
    match value {
        Value::String(raw) => {
            let parsed: Value = serde_json::from_str(raw).map_err(|_| {
                AppError::Core(CoreError::Validation(
                    "language slots passed as strings must contain valid JSON".into(),
                ))
            })?;
            validate_content(ty, &parsed).map_err(AppError::Core)
        }
        other => validate_content(ty, other).map_err(AppError::Core),
    }
}

/// Give duplicate-key inserts a message that names the actual conflict.
fn classify_create_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => AppError::Core(
            CoreError::Conflict("a section with this key already exists on this page".into()),
        ),
        _ => AppError::Database(err),
    }
}
