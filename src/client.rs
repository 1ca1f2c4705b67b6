use crate::error::{ErrorBody, FetchError};
use crate::i18n::TranslationBundle;
use crate::resolver::TranslationSource;
use crate::retry::{with_retry_if, RetryConfig};
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use tracing::debug;

/// Fetches bundles from the translation server's `GET /translations/:lang`.
#[derive(Debug, Clone)]
pub struct HttpTranslationClient {
    http: reqwest::Client,
    base_url: Url,
    retry: RetryConfig,
}

impl HttpTranslationClient {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let parsed =
            Url::parse(base_url).map_err(|_| FetchError::InvalidUrl(base_url.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(base_url.to_string()));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url: parsed,
            retry: RetryConfig::translation_fetch(),
        })
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// URL of the bundle for `lang`; the code is sent as one encoded path segment.
    pub fn translations_url(&self, lang: &str) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("translations")
            .push(lang);
        Ok(url)
    }

    async fn fetch_once(&self, url: &Url, lang: &str) -> Result<TranslationBundle, FetchError> {
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(lang.to_string()));
        }
        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
            };
            return Err(FetchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<TranslationBundle>()
            .await
            .map_err(FetchError::Decode)
    }
}

#[async_trait]
impl TranslationSource for HttpTranslationClient {
    async fn fetch(&self, lang: &str) -> Result<TranslationBundle, FetchError> {
        let url = self.translations_url(lang)?;
        debug!("Fetching translations from {}", url);

        with_retry_if(
            &self.retry,
            &format!("Translations '{}'", lang),
            || self.fetch_once(&url, lang),
            FetchError::is_retryable,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    // ==================== URL Tests ====================

    #[test]
    fn test_translations_url() {
        let client = HttpTranslationClient::new("http://localhost:3001").unwrap();
        let url = client.translations_url("fr").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3001/translations/fr");
    }

    #[test]
    fn test_translations_url_with_base_path() {
        let client = HttpTranslationClient::new("http://example.com/api/").unwrap();
        let url = client.translations_url("en-US").unwrap();
        assert_eq!(url.as_str(), "http://example.com/api/translations/en-US");
    }

    #[test]
    fn test_translations_url_encodes_separators() {
        let client = HttpTranslationClient::new("http://localhost:3001").unwrap();
        let url = client.translations_url("../secret").unwrap();
        assert_eq!(url.path(), "/translations/..%2Fsecret");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            HttpTranslationClient::new("not a url"),
            Err(FetchError::InvalidUrl(_))
        ));
        assert!(matches!(
            HttpTranslationClient::new("mailto:someone@example.com"),
            Err(FetchError::InvalidUrl(_))
        ));
    }

    // ==================== fetch Tests ====================

    #[tokio::test]
    async fn test_fetch_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/translations/fr"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"welcome": "Bienvenue", "about": "À propos"})),
            )
            .mount(&mock_server)
            .await;

        let client = HttpTranslationClient::new(&mock_server.uri()).unwrap();
        let bundle = client.fetch("fr").await.expect("Should fetch");

        assert_eq!(bundle.get("welcome"), Some("Bienvenue"));
        assert_eq!(bundle.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_sends_region_suffix_unchanged() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/translations/fr-CA"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"hello": "Bonjour"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpTranslationClient::new(&mock_server.uri()).unwrap();
        let bundle = client.fetch("fr-CA").await.expect("Should fetch");
        assert_eq!(bundle.translate("hello"), "Bonjour");
    }

    #[tokio::test]
    async fn test_fetch_not_found_is_not_retried() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/translations/de"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"error": "Translation not found"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpTranslationClient::new(&mock_server.uri()).unwrap();
        let result = client.fetch("de").await;

        assert!(matches!(result, Err(FetchError::NotFound(ref lang)) if lang == "de"));
    }

    #[tokio::test]
    async fn test_fetch_server_error_carries_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/translations/en"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"error": "Failed to parse JSON"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpTranslationClient::new(&mock_server.uri()).unwrap();
        match client.fetch("en").await {
            Err(FetchError::Status { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "Failed to parse JSON");
            }
            other => panic!("Expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_non_json_error_body_uses_reason() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/translations/en"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .mount(&mock_server)
            .await;

        let client = HttpTranslationClient::new(&mock_server.uri()).unwrap();
        match client.fetch("en").await {
            Err(FetchError::Status { status, message }) => {
                assert_eq!(status, 503);
                assert_eq!(message, "Service Unavailable");
            }
            other => panic!("Expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_invalid_payload_is_decode_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/translations/en"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"nested": {"a": 1}})))
            .mount(&mock_server)
            .await;

        let client = HttpTranslationClient::new(&mock_server.uri()).unwrap();
        assert!(matches!(
            client.fetch("en").await,
            Err(FetchError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_transport_error() {
        // Bind and drop to get a port nobody listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpTranslationClient::new(&format!("http://{}", addr))
            .unwrap()
            .with_retry(RetryConfig::new(2, Duration::from_millis(1)));

        assert!(matches!(
            client.fetch("en").await,
            Err(FetchError::Transport(_))
        ));
    }
}
