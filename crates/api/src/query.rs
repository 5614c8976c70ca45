//! Shared query parameter types for API handlers.

use serde::Deserialize;
use tones_core::locale::Language;

/// Query parameters for language-resolved content reads (`?lang=ja`).
///
/// Unknown or missing codes resolve to the site default language.
#[derive(Debug, Default, Deserialize)]
pub struct LangParams {
    pub lang: Option<String>,
}

impl LangParams {
    pub fn language(&self) -> Language {
        self.lang
            .as_deref()
            .map(Language::parse)
            .unwrap_or(Language::DEFAULT)
    }
}
