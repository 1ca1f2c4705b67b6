//! Client-side routing: the language segment of the URL path.
//!
//! Segment 1 of every path (`/{lang}/...`) carries the language code. The
//! functions here resolve a path to a page and rewrite the language segment
//! without disturbing the rest of the route.

use crate::i18n::LanguageRegistry;
use serde::Serialize;

/// Index of the language segment in a `/`-split path (index 0 is the empty
/// string before the leading slash).
const LANGUAGE_SEGMENT: usize = 1;

/// A client-side URL path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePath(String);

impl RoutePath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Segments split on `/`, including the empty leading segment.
    pub fn segments(&self) -> Vec<&str> {
        self.0.split('/').collect()
    }

    /// Replace the language segment, leaving every other segment untouched.
    ///
    /// A path with no language slot at all (empty, or without any `/`)
    /// becomes the language root `/{code}`.
    pub fn with_language(&self, code: &str) -> RoutePath {
        let mut segments = self.segments();
        if segments.len() <= LANGUAGE_SEGMENT {
            return RoutePath(format!("/{}", code));
        }
        segments[LANGUAGE_SEGMENT] = code;
        RoutePath(segments.join("/"))
    }
}

/// Rewrite the language segment of `current_path` to `new_code`.
pub fn switch_language(current_path: &str, new_code: &str) -> String {
    RoutePath::new(current_path).with_language(new_code).into_string()
}

/// Page selected by a client path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Route {
    Redirect { to: String },
    Home { lang: String },
    About { lang: String },
}

impl Route {
    /// The language segment the page renders in (`None` for redirects).
    pub fn language(&self) -> Option<&str> {
        match self {
            Route::Redirect { .. } => None,
            Route::Home { lang } | Route::About { lang } => Some(lang),
        }
    }
}

/// Path every unmatched route redirects to.
pub fn default_route() -> String {
    format!("/{}", LanguageRegistry::get().default_language().code)
}

/// Match a client path against the routing table.
///
/// `/:lang` and `/:lang/about` render pages. A single trailing slash is
/// ignored and the `about` segment matches case-insensitively. Everything
/// else, including the root and unknown sub-pages under a language, redirects
/// to the default language.
pub fn resolve_route(path: &str) -> Route {
    let trimmed = match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() => rest,
        _ => path,
    };

    let segments: Vec<&str> = trimmed.split('/').collect();
    let route = match segments.as_slice() {
        ["", lang] if !lang.is_empty() => Some(Route::Home {
            lang: lang.to_string(),
        }),
        ["", lang, page] if !lang.is_empty() && page.eq_ignore_ascii_case("about") => {
            Some(Route::About {
                lang: lang.to_string(),
            })
        }
        _ => None,
    };

    route.unwrap_or_else(|| Route::Redirect {
        to: default_route(),
    })
}

/// A rendered navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// Links shown in the page header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderLinks {
    /// Page navigation within the current language
    pub nav: Vec<NavLink>,
    /// One link per switchable language, keeping the current page
    pub locales: Vec<NavLink>,
}

/// Build the header for a page rendered in `lang` at `current_path`.
pub fn header_links(lang: &str, current_path: &str) -> HeaderLinks {
    let nav = vec![
        NavLink {
            label: "Home".to_string(),
            href: format!("/{}", lang),
        },
        NavLink {
            label: "About".to_string(),
            href: format!("/{}/about", lang),
        },
    ];

    let locales = LanguageRegistry::get()
        .list()
        .iter()
        .map(|language| NavLink {
            label: language.code.to_uppercase(),
            href: switch_language(current_path, language.code),
        })
        .collect();

    HeaderLinks { nav, locales }
}
