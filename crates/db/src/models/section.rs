//! Page section entity model and DTOs.
//!
//! A section is one content block of a static page, identified by a
//! per-page key and typed by the closed section catalog. Content lives in
//! up to four language slots stored as JSON text; slots are decoded
//! leniently so one corrupt slot never breaks a page's content list.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use tones_core::locale::Language;
use tones_core::types::{DbId, Timestamp};

/// A row from the `page_content` table, all language slots raw.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PageSection {
    pub id: DbId,
    pub page_slug: String,
    pub section_type: String,
    pub section_key: String,
    pub content_ko: Option<String>,
    pub content_ja: Option<String>,
    pub content_zh_cn: Option<String>,
    pub content_zh_tw: Option<String>,
    pub display_order: i64,
    pub is_visible: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl PageSection {
    /// The raw slot for a language, without fallback.
    pub fn slot(&self, lang: Language) -> Option<&str> {
        let slot = match lang {
            Language::Ko => &self.content_ko,
            Language::Ja => &self.content_ja,
            Language::ZhCn => &self.content_zh_cn,
            Language::ZhTw => &self.content_zh_tw,
        };
        slot.as_deref()
    }

    /// Decode the content for a language: an absent or empty slot falls
    /// back to the default language, and unparseable JSON yields `None`.
    pub fn resolve_content(&self, lang: Language) -> Option<Value> {
        let filled = |l: Language| self.slot(l).filter(|s| !s.is_empty());
        let raw = filled(lang).or_else(|| filled(Language::DEFAULT))?;
        serde_json::from_str(raw).ok()
    }

    /// Project into the public read shape for a language.
    pub fn resolved(&self, lang: Language) -> ResolvedSection {
        ResolvedSection {
            id: self.id,
            page_slug: self.page_slug.clone(),
            section_type: self.section_type.clone(),
            section_key: self.section_key.clone(),
            content: self.resolve_content(lang),
            display_order: self.display_order,
            is_visible: self.is_visible,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A section with its content resolved to a single decoded object for
/// one language. This is the public read shape.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedSection {
    pub id: DbId,
    pub page_slug: String,
    pub section_type: String,
    pub section_key: String,
    pub content: Option<Value>,
    pub display_order: i64,
    pub is_visible: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a section. Language slots accept either a JSON
/// object or a pre-serialized JSON string; omitted slots are stored NULL.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePageSection {
    pub page_slug: String,
    pub section_type: String,
    pub section_key: String,
    pub content_ko: Option<Value>,
    pub content_ja: Option<Value>,
    pub content_zh_cn: Option<Value>,
    pub content_zh_tw: Option<Value>,
    pub display_order: Option<i64>,
    pub is_visible: Option<bool>,
}

/// DTO for a partial update. Absent fields keep their prior values; a
/// language slot set to JSON `null` clears that slot.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePageSection {
    pub section_type: Option<String>,
    pub content_ko: Option<Value>,
    pub content_ja: Option<Value>,
    pub content_zh_cn: Option<Value>,
    pub content_zh_tw: Option<Value>,
    pub display_order: Option<i64>,
    pub is_visible: Option<bool>,
}

/// One entry of a reorder batch.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ReorderItem {
    pub id: DbId,
    pub display_order: i64,
}

/// A page as listed for the admin surface.
#[derive(Debug, Clone, Serialize)]
pub struct PageSummary {
    pub slug: String,
    pub label: String,
    pub path: String,
    pub section_count: i64,
}

/// Serialize a content value for storage. Strings are stored verbatim
/// (the admin surface may post pre-serialized JSON); `null` and absent
/// both store NULL.
pub fn slot_to_storage(value: &Option<Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    }
}
