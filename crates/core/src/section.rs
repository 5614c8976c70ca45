//! Section type catalog and content payload validation.
//!
//! Content payloads are free-form JSON objects whose shape is defined per
//! section type. The shape is enforced here at the write boundary only;
//! stored rows are always decoded leniently on read so one corrupt slot
//! can never break a whole page's content list.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;

/// The closed catalog of section kinds. The type determines which
/// renderer routine and DOM target apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Hero,
    About,
    Treatments,
    Trust,
    Results,
    Column,
    Promo,
    Location,
    Cta,
    Custom,
}

impl SectionType {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionType::Hero => "hero",
            SectionType::About => "about",
            SectionType::Treatments => "treatments",
            SectionType::Trust => "trust",
            SectionType::Results => "results",
            SectionType::Column => "column",
            SectionType::Promo => "promo",
            SectionType::Location => "location",
            SectionType::Cta => "cta",
            SectionType::Custom => "custom",
        }
    }

    pub fn parse(s: &str) -> Option<SectionType> {
        match s {
            "hero" => Some(SectionType::Hero),
            "about" => Some(SectionType::About),
            "treatments" => Some(SectionType::Treatments),
            "trust" => Some(SectionType::Trust),
            "results" => Some(SectionType::Results),
            "column" => Some(SectionType::Column),
            "promo" => Some(SectionType::Promo),
            "location" => Some(SectionType::Location),
            "cta" => Some(SectionType::Cta),
            "custom" => Some(SectionType::Custom),
            _ => None,
        }
    }
}

/// Shape of a list-valued content field.
enum ListShape {
    /// Array of plain strings (e.g. `about.description`).
    Strings,
    /// Array of objects restricted to the given keys.
    Objects(&'static [&'static str]),
}

/// Allowed fields per section type: scalar field names plus list fields
/// with their element shapes. `custom` is unconstrained and handled
/// before this table is consulted.
fn field_table(ty: SectionType) -> (&'static [&'static str], &'static [(&'static str, ListShape)]) {
    match ty {
        SectionType::Hero => (&["label", "title_en", "title_kr", "description"], &[]),
        SectionType::About => (
            &["label", "title", "button_text", "button_link"],
            &[
                ("description", ListShape::Strings),
                ("points", ListShape::Objects(&["num", "title", "desc"])),
            ],
        ),
        SectionType::Treatments => (
            &["label", "title", "subtitle"],
            &[("items", ListShape::Objects(&["num", "title", "en", "desc", "link"]))],
        ),
        SectionType::Trust => (
            &["label", "title"],
            &[("items", ListShape::Objects(&["number", "unit", "label", "desc"]))],
        ),
        SectionType::Results => (&["label", "title", "note", "button_text"], &[]),
        SectionType::Column => (&["label", "title", "button_text"], &[]),
        SectionType::Promo => (
            &["label", "title"],
            &[("items", ListShape::Objects(&["badge", "category", "title", "desc", "cta", "link"]))],
        ),
        SectionType::Location => (
            &["label", "title", "address", "subway", "phone", "notice", "button_text"],
            &[("hours", ListShape::Objects(&["day", "time", "badge"]))],
        ),
        SectionType::Cta => (&["title", "description", "button_text", "button_link"], &[]),
        SectionType::Custom => (&[], &[]),
    }
}

/// Validate a content payload against the field table for its type.
///
/// `Null` is accepted everywhere (an absent slot). Scalar fields must be
/// strings, numbers, or booleans; list fields must be arrays of the
/// declared element shape; unknown top-level fields are rejected.
pub fn validate_content(ty: SectionType, content: &Value) -> Result<(), CoreError> {
    if content.is_null() {
        return Ok(());
    }

    let obj = content.as_object().ok_or_else(|| {
        CoreError::Validation(format!(
            "content for a '{}' section must be a JSON object",
            ty.as_str()
        ))
    })?;

    if ty == SectionType::Custom {
        return Ok(());
    }

    let (scalars, lists) = field_table(ty);

    for (key, value) in obj {
        if scalars.contains(&key.as_str()) {
            if !is_scalar(value) {
                return Err(CoreError::Validation(format!(
                    "field '{key}' of a '{}' section must be a scalar value",
                    ty.as_str()
                )));
            }
            continue;
        }

        match lists.iter().find(|(name, _)| name == key) {
            Some((_, shape)) => validate_list(ty, key, value, shape)?,
            None => {
                return Err(CoreError::Validation(format!(
                    "unknown field '{key}' for a '{}' section",
                    ty.as_str()
                )))
            }
        }
    }

    Ok(())
}

fn validate_list(ty: SectionType, key: &str, value: &Value, shape: &ListShape) -> Result<(), CoreError> {
    let entries = value.as_array().ok_or_else(|| {
        CoreError::Validation(format!(
            "field '{key}' of a '{}' section must be an array",
            ty.as_str()
        ))
    })?;

    for entry in entries {
        match shape {
            ListShape::Strings => {
                if !entry.is_string() {
                    return Err(CoreError::Validation(format!(
                        "entries of '{key}' must be strings"
                    )));
                }
            }
            ListShape::Objects(keys) => {
                let obj = entry.as_object().ok_or_else(|| {
                    CoreError::Validation(format!("entries of '{key}' must be objects"))
                })?;
                for (entry_key, entry_value) in obj {
                    if !keys.contains(&entry_key.as_str()) {
                        return Err(CoreError::Validation(format!(
                            "unknown field '{entry_key}' in an entry of '{key}'"
                        )));
                    }
                    if !is_scalar(entry_value) {
                        return Err(CoreError::Validation(format!(
                            "field '{entry_key}' in an entry of '{key}' must be a scalar value"
                        )));
                    }
                }
            }
        }
    }

    Ok(())
}

/// Null counts as scalar so an entry can explicitly blank a field.
fn is_scalar(value: &Value) -> bool {
    value.is_string() || value.is_number() || value.is_boolean() || value.is_null()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_known_types() {
        assert_eq!(SectionType::parse("hero"), Some(SectionType::Hero));
        assert_eq!(SectionType::parse("cta"), Some(SectionType::Cta));
        assert_eq!(SectionType::parse("banner"), None);
    }

    #[test]
    fn valid_hero_content() {
        let content = json!({
            "label": "TONE'S CLINIC MYEONGDONG",
            "title_en": "Lifting Life",
            "title_kr": "프리미엄 신뢰의 경험",
            "description": "명동의 프리미엄 피부 전문<br>1:1 맞춤 안티에이징"
        });
        assert!(validate_content(SectionType::Hero, &content).is_ok());
    }

    #[test]
    fn null_content_is_accepted() {
        assert!(validate_content(SectionType::Hero, &Value::Null).is_ok());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let content = json!({ "label": "X", "headline": "nope" });
        let err = validate_content(SectionType::Hero, &content).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn non_object_content_is_rejected() {
        let err = validate_content(SectionType::Cta, &json!("just a string")).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn about_description_must_be_string_array() {
        let ok = json!({ "description": ["first paragraph", "second paragraph"] });
        assert!(validate_content(SectionType::About, &ok).is_ok());

        let bad = json!({ "description": [{ "text": "nested" }] });
        assert!(validate_content(SectionType::About, &bad).is_err());
    }

    #[test]
    fn list_entries_checked_against_allowed_keys() {
        let ok = json!({
            "items": [{ "num": "01", "title": "리프팅", "en": "Lifting", "desc": "...", "link": "/x" }]
        });
        assert!(validate_content(SectionType::Treatments, &ok).is_ok());

        let bad = json!({ "items": [{ "num": "01", "price": 10000 }] });
        assert!(validate_content(SectionType::Treatments, &bad).is_err());
    }

    #[test]
    fn location_hours_with_optional_badge() {
        let content = json!({
            "hours": [
                { "day": "금요일", "time": "10:00 ~ 21:00", "badge": "야간진료" },
                { "day": "일요일·공휴일", "time": "휴진" }
            ]
        });
        assert!(validate_content(SectionType::Location, &content).is_ok());
    }

    #[test]
    fn custom_accepts_any_object() {
        let content = json!({ "whatever": { "nested": [1, 2, 3] } });
        assert!(validate_content(SectionType::Custom, &content).is_ok());
    }
}
