//! Language and page resolution.
//!
//! The public site serves one static document per page and language; the
//! language is a URL path prefix (`/ja/...`, `/zh-cn/...`, `/zh-tw/...`)
//! and the page identity is derived from the remaining path. Both are
//! resolved once per page load into a [`RenderContext`] which is then
//! passed explicitly through the fetch/render pipeline.

use serde::{Deserialize, Serialize};

/// Supported content languages. Korean is the site default and the
/// fallback for any section whose requested slot is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "ko")]
    Ko,
    #[serde(rename = "ja")]
    Ja,
    #[serde(rename = "zh-cn")]
    ZhCn,
    #[serde(rename = "zh-tw")]
    ZhTw,
}

impl Language {
    pub const DEFAULT: Language = Language::Ko;

    /// The language code as it appears in URLs and the `lang` query param.
    pub fn code(self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::Ja => "ja",
            Language::ZhCn => "zh-cn",
            Language::ZhTw => "zh-tw",
        }
    }

    /// Parse a language code. Unknown codes resolve to the default so a
    /// bad `lang` query parameter never fails a public read.
    pub fn parse(code: &str) -> Language {
        match code {
            "ja" => Language::Ja,
            "zh-cn" => Language::ZhCn,
            "zh-tw" => Language::ZhTw,
            _ => Language::DEFAULT,
        }
    }

    /// Detect the language from a URL path prefix.
    pub fn from_path(path: &str) -> Language {
        if path.starts_with("/ja/") {
            Language::Ja
        } else if path.starts_with("/zh-cn/") {
            Language::ZhCn
        } else if path.starts_with("/zh-tw/") {
            Language::ZhTw
        } else {
            Language::DEFAULT
        }
    }

    /// Strip a leading language prefix, leaving a root-relative page path.
    ///
    /// Only a prefix followed by `/` counts: a bare `/ja` is not a page
    /// path, matching [`Language::from_path`].
    pub fn strip_prefix(path: &str) -> &str {
        for prefix in ["/ja", "/zh-cn", "/zh-tw"] {
            if let Some(rest) = path.strip_prefix(prefix) {
                if rest.starts_with('/') {
                    return rest;
                }
            }
        }
        path
    }
}

/// The fixed catalog of logical pages the CMS can attach content to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSlug {
    Home,
    About,
    Results,
    Location,
    Reservation,
}

impl PageSlug {
    pub const ALL: [PageSlug; 5] = [
        PageSlug::Home,
        PageSlug::About,
        PageSlug::Results,
        PageSlug::Location,
        PageSlug::Reservation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PageSlug::Home => "home",
            PageSlug::About => "about",
            PageSlug::Results => "results",
            PageSlug::Location => "location",
            PageSlug::Reservation => "reservation",
        }
    }

    /// Admin-facing label for the page.
    pub fn label(self) -> &'static str {
        match self {
            PageSlug::Home => "홈",
            PageSlug::About => "소개",
            PageSlug::Results => "전후사진",
            PageSlug::Location => "오시는 길",
            PageSlug::Reservation => "예약",
        }
    }

    /// Canonical static document path for the page (default language).
    pub fn path(self) -> &'static str {
        match self {
            PageSlug::Home => "/",
            PageSlug::About => "/about.html",
            PageSlug::Results => "/results.html",
            PageSlug::Location => "/location.html",
            PageSlug::Reservation => "/reservation.html",
        }
    }

    pub fn parse(slug: &str) -> Option<PageSlug> {
        PageSlug::ALL.into_iter().find(|p| p.as_str() == slug)
    }

    /// Detect the page from a language-stripped URL path.
    ///
    /// `/` and `/index.html` are the home page; everything else matches by
    /// substring against the known page identifiers. An unrecognized path
    /// yields `None`, which means "take no action at all".
    pub fn from_path(path: &str) -> Option<PageSlug> {
        if path == "/" || path == "/index.html" {
            return Some(PageSlug::Home);
        }
        if path.contains("about") {
            return Some(PageSlug::About);
        }
        if path.contains("results") {
            return Some(PageSlug::Results);
        }
        if path.contains("location") {
            return Some(PageSlug::Location);
        }
        if path.contains("reservation") {
            return Some(PageSlug::Reservation);
        }
        None
    }
}

/// Immutable rendering context computed once per page load.
///
/// `page` is `None` for unrecognized paths; callers must then skip the
/// content fetch entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    pub page: Option<PageSlug>,
    pub lang: Language,
}

impl RenderContext {
    /// Resolve both page and language from a raw request path.
    pub fn from_path(path: &str) -> RenderContext {
        let lang = Language::from_path(path);
        let page = PageSlug::from_path(Language::strip_prefix(path));
        RenderContext { page, lang }
    }
}
