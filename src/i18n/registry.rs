//! Language registry: the languages offered by the language switcher.
//!
//! The registry is initialized once on first access and is immutable
//! thereafter. It only drives navigation; the server serves whatever bundle
//! files exist on disk.

use std::sync::OnceLock;

/// Metadata for a language offered in the switcher.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Code used in the route segment and the bundle file name (e.g. "en")
    pub code: &'static str,

    /// English name of the language (e.g. "French")
    pub name: &'static str,

    /// Native name of the language (e.g. "Français")
    pub native_name: &'static str,

    /// Whether this is the language unmatched routes redirect to (only one should be true)
    pub is_default: bool,
}

/// Registry of switchable languages.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the registry instance, initializing it on first call.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Look up a language by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All languages in switcher order.
    pub fn list(&self) -> &[LanguageConfig] {
        &self.languages
    }

    /// The default language.
    ///
    /// Falls back to the first entry if none is flagged, so a route can always
    /// be redirected somewhere.
    pub fn default_language(&self) -> &LanguageConfig {
        self.languages
            .iter()
            .find(|lang| lang.is_default)
            .unwrap_or(&self.languages[0])
    }
}

fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: true,
        },
        LanguageConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            is_default: false,
        },
    ]
}
