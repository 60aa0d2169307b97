//! MyMemory translation client

use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, warn};

use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::languages::Language;
use crate::core::models::{ProviderResponse, TranslationRequest};

/// Anything that can turn text in one language into text in another
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate text. Exactly one outbound call per invocation, no retries.
    async fn translate(&self, text: &str, from: Language, to: Language) -> Result<String>;

    /// Provider name for display purposes
    fn name(&self) -> &str;
}

/// Client for the MyMemory `get` endpoint
#[derive(Debug, Clone)]
pub struct MyMemoryClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl MyMemoryClient {
    /// Create a new client
    pub fn new(config: &TranslatorConfig) -> anyhow::Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: Url::parse(&config.api_endpoint)?,
        })
    }

    /// Build `<endpoint>?q=<text>&langpair=<from>|<to>`
    pub fn request_url(&self, request: &TranslationRequest) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", &request.source_text)
            .append_pair("langpair", &request.langpair());
        url
    }

    /// Send one request and extract `responseData.translatedText`
    async fn send_request(&self, request: &TranslationRequest) -> Result<String> {
        let url = self.request_url(request);
        debug!("GET {} ({} chars)", self.endpoint, request.source_text.chars().count());

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TranslationError::new(format!("Network error: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslationError::new(format!("HTTP error: {}", status)));
        }

        let body = response.text().await?;
        let parsed: ProviderResponse = serde_json::from_str(&body)?;
        parsed.into_translation()
    }
}

#[async_trait]
impl TranslationProvider for MyMemoryClient {
    async fn translate(&self, text: &str, from: Language, to: Language) -> Result<String> {
        let request = TranslationRequest::new(text, from, to);

        self.send_request(&request).await.map_err(|e| {
            warn!("Translation error: {}", e.reason());
            e
        })
    }

    fn name(&self) -> &str {
        "MyMemory"
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use axum::{extract::Query, http::StatusCode, routing::get, Router};
    use std::collections::HashMap;

    /// Serve `app` on an ephemeral local port and return its base URL
    pub(crate) async fn spawn_app(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client_for(base: &str) -> MyMemoryClient {
        let config = TranslatorConfig {
            api_endpoint: format!("{}/get", base),
            ..Default::default()
        };
        MyMemoryClient::new(&config).unwrap()
    }

    /// Echo provider: answers with the query it received, so tests can check encoding
    async fn echo(Query(params): Query<HashMap<String, String>>) -> axum::Json<serde_json::Value> {
        let q = params.get("q").cloned().unwrap_or_default();
        let pair = params.get("langpair").cloned().unwrap_or_default();
        axum::Json(serde_json::json!({
            "responseData": { "translatedText": format!("{}:{}", pair, q) },
            "responseStatus": 200
        }))
    }

    #[test]
    fn test_request_url_escapes_text() {
        let client = client_for("http://localhost:1");
        let request = TranslationRequest::new("a&b c|d", Language::English, Language::Spanish);
        let url = client.request_url(&request);

        let pairs: HashMap<_, _> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs["q"], "a&b c|d");
        assert_eq!(pairs["langpair"], "en-us|es");
        assert_eq!(url.path(), "/get");
    }

    #[tokio::test]
    async fn test_translate_success() {
        let base = spawn_app(Router::new().route("/get", get(echo))).await;
        let client = client_for(&base);

        let out = client
            .translate("olá mundo & co", Language::Portuguese, Language::English)
            .await
            .unwrap();
        assert_eq!(out, "pt-br|en-us:olá mundo & co");
    }

    #[tokio::test]
    async fn test_translate_returns_provider_text_verbatim() {
        let app = Router::new().route(
            "/get",
            get(|| async {
                axum::Json(serde_json::json!({
                    "responseData": { "translatedText": " olá \n" },
                    "responseStatus": 200
                }))
            }),
        );
        let client = client_for(&spawn_app(app).await);

        let out = client
            .translate("hello", Language::English, Language::Portuguese)
            .await
            .unwrap();
        assert_eq!(out, " olá \n");
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let app = Router::new().route(
            "/get",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let client = client_for(&spawn_app(app).await);

        let err = client
            .translate("hello", Language::English, Language::French)
            .await
            .unwrap_err();
        assert!(err.reason().contains("500"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_error() {
        let app = Router::new().route("/get", get(|| async { "<html>nope</html>" }));
        let client = client_for(&spawn_app(app).await);

        assert!(client
            .translate("hello", Language::English, Language::French)
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_missing_field_is_error() {
        let app = Router::new().route(
            "/get",
            get(|| async { axum::Json(serde_json::json!({ "responseData": null })) }),
        );
        let client = client_for(&spawn_app(app).await);

        assert!(client
            .translate("hello", Language::English, Language::French)
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_network_failure_is_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(&format!("http://{}", addr));
        let err = client
            .translate("hello", Language::English, Language::French)
            .await
            .unwrap_err();
        assert!(err.reason().starts_with("Network error"));
    }
}
