//! Language codes: normalized, validated identifiers taken from untrusted input.
//!
//! Route parameters and URL segments are attacker-controllable, so every code
//! goes through [`LanguageCode::normalize`] before it is used to build a
//! filesystem path.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

/// Separator between the primary language and a region suffix ("en-US").
const REGION_SEPARATOR: char = '-';

static CODE_REGEX: OnceLock<Regex> = OnceLock::new();

fn code_regex() -> &'static Regex {
    CODE_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z0-9]{1,8}$").expect("Invalid regex"))
}

/// Rejection reasons for a raw language parameter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageCodeError {
    #[error("language code is empty")]
    Empty,

    #[error("language code '{0}' contains characters outside [A-Za-z0-9] or is too long")]
    Invalid(String),
}

/// A validated primary language code (e.g. "en", "fr").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Truncate `raw` at the first `-` and validate the remainder.
    ///
    /// Only the region suffix is dropped: case is preserved and no other
    /// locale fallback is applied, so "fr-CA" becomes "fr" and "EN" stays "EN".
    pub fn normalize(raw: &str) -> Result<Self, LanguageCodeError> {
        let primary = raw.split(REGION_SEPARATOR).next().unwrap_or_default();

        if primary.is_empty() {
            return Err(LanguageCodeError::Empty);
        }
        if !code_regex().is_match(primary) {
            return Err(LanguageCodeError::Invalid(primary.to_string()));
        }

        Ok(Self(primary.to_string()))
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the bundle for this code (`{code}.json`).
    pub fn file_name(&self) -> String {
        format!("{}.json", self.0)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
