use anyhow::{Context, Result};
use std::path::PathBuf;

/// Translation server settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // Cross-origin policy (exactly one origin)
    pub allowed_origin: String,

    // Bundle storage
    pub translations_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: match std::env::var("PORT") {
                Ok(v) => v.parse().with_context(|| format!("Invalid PORT: {}", v))?,
                Err(_) => 3001,
            },

            allowed_origin: std::env::var("ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),

            translations_dir: std::env::var("TRANSLATIONS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("translations")),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3001,
            allowed_origin: "http://localhost:3000".to_string(),
            translations_dir: PathBuf::from("translations"),
        }
    }
}

/// Settings for the client side (resolver and HTTP translation client).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub server_url: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self {
            server_url: std::env::var("TRANSLATION_SERVER_URL")
                .unwrap_or_else(|_| "http://localhost:3001".to_string()),
        }
    }
}
