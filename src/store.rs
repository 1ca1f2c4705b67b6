use crate::error::TranslationError;
use crate::i18n::LanguageCode;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Read-only access to the `{code}.json` bundle files under one base directory.
#[derive(Debug, Clone)]
pub struct TranslationStore {
    base_dir: PathBuf,
}

impl TranslationStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of the bundle file for an already validated code.
    pub fn path_for(&self, code: &LanguageCode) -> PathBuf {
        self.base_dir.join(code.file_name())
    }

    /// Load the bundle for a raw, untrusted language parameter.
    ///
    /// The parameter is normalized and validated first; a rejected code is
    /// reported as `NotFound` and never reaches the filesystem.
    pub async fn load(&self, raw: &str) -> Result<Value, TranslationError> {
        let code = match LanguageCode::normalize(raw) {
            Ok(code) => code,
            Err(e) => {
                warn!("Rejected language parameter {:?}: {}", raw, e);
                return Err(TranslationError::NotFound);
            }
        };

        let path = self.path_for(&code);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!("Cannot read {}: {}", path.display(), e);
                return Err(TranslationError::NotFound);
            }
        };

        // Invalid UTF-8 becomes U+FFFD; only the JSON structure can fail the load
        let text = String::from_utf8_lossy(&bytes);
        serde_json::from_str(&text).map_err(|e| {
            warn!("Bundle {} is not valid JSON: {}", path.display(), e);
            TranslationError::Malformed(e)
        })
    }
}
