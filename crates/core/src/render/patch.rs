//! DOM patch operations.
//!
//! The renderer never touches a live document; it emits an ordered plan
//! of selector-addressed operations which a thin generic client applies
//! with `querySelector`. A selector that matches nothing is skipped by
//! the client, preserving the progressive-enhancement guarantee.

use serde::Serialize;

/// One DOM mutation, addressed by CSS selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DomPatch {
    /// Replace the element's text content.
    SetText { selector: String, value: String },
    /// Replace the element's inner markup (fields that may carry inline
    /// emphasis or line breaks).
    SetHtml { selector: String, value: String },
    /// Set an attribute value (link targets and the like).
    SetAttr {
        selector: String,
        attr: String,
        value: String,
    },
    /// Hide the element (`display: none`).
    Hide { selector: String },
    /// Restore the element's default display.
    Show { selector: String },
}

impl DomPatch {
    pub fn set_text(selector: String, value: impl Into<String>) -> DomPatch {
        DomPatch::SetText {
            selector,
            value: value.into(),
        }
    }

    pub fn set_html(selector: String, value: impl Into<String>) -> DomPatch {
        DomPatch::SetHtml {
            selector,
            value: value.into(),
        }
    }

    pub fn set_attr(selector: String, attr: impl Into<String>, value: impl Into<String>) -> DomPatch {
        DomPatch::SetAttr {
            selector,
            attr: attr.into(),
            value: value.into(),
        }
    }
}
