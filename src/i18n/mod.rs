//! Language codes, the switcher's language registry, and translation bundles.
//!
//! # Architecture
//!
//! - `language`: `LanguageCode`, the normalized and validated form of an untrusted code
//! - `registry`: the languages offered by the language switcher
//! - `bundle`: `TranslationBundle`, the key to localized string mapping
//!
//! # Example
//!
//! ```rust,ignore
//! use i18n_site::i18n::{LanguageCode, LanguageRegistry};
//!
//! let code = LanguageCode::normalize("fr-CA")?; // "fr"
//! let default = LanguageRegistry::get().default_language().code; // "en"
//! ```

mod bundle;
mod language;
mod registry;

pub use bundle::TranslationBundle;
pub use language::{LanguageCode, LanguageCodeError};
pub use registry::{LanguageConfig, LanguageRegistry};
