//! HTTP API server implementation

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, info};

use crate::core::client::TranslationProvider;
use crate::core::languages::{Language, LanguageOption, UnknownLanguage};
use crate::core::messages::{Locale, Messages};

/// Application state
#[derive(Clone)]
pub struct AppState {
    provider: Arc<dyn TranslationProvider>,
    locale: Locale,
}

impl AppState {
    /// Create state serving `provider` with strings of `locale`
    pub fn new(provider: Arc<dyn TranslationProvider>, locale: Locale) -> Self {
        Self { provider, locale }
    }

    fn messages(&self) -> &'static Messages {
        Messages::for_locale(self.locale)
    }
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    provider: String,
    version: String,
}

/// Query of `GET /translate`
#[derive(Deserialize)]
pub struct TranslateQuery {
    /// Text to translate; missing means blank
    #[serde(default)]
    pub q: String,
    /// Source language code
    pub from: Option<String>,
    /// Target language code
    pub to: Option<String>,
}

/// Body of a successful `GET /translate`
#[derive(Serialize)]
pub struct TranslateResponse {
    /// Translation, or the placeholder for blank text
    pub translated_text: String,
}

/// Error response
#[derive(Serialize)]
pub struct ErrorResponse {
    /// User-facing message
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

fn parse_language(code: Option<&str>, name: &str) -> Result<Language, ApiError> {
    let code = code.ok_or_else(|| {
        error(
            StatusCode::BAD_REQUEST,
            format!("Missing query parameter: {}", name),
        )
    })?;

    code.parse()
        .map_err(|e: UnknownLanguage| error(StatusCode::BAD_REQUEST, e.to_string()))
}

/// Health check handler
async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        provider: state.provider.name().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn languages(State(state): State<Arc<AppState>>) -> Json<Vec<LanguageOption>> {
    Json(Language::catalog(state.locale))
}

/// Translation handler
async fn translate(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TranslateQuery>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let from = parse_language(query.from.as_deref(), "from")?;
    let to = parse_language(query.to.as_deref(), "to")?;

    let messages = state.messages();

    if query.q.trim().is_empty() {
        debug!("Blank text, answering with placeholder");
        return Ok(Json(TranslateResponse {
            translated_text: messages.placeholder.to_string(),
        }));
    }

    match state.provider.translate(&query.q, from, to).await {
        Ok(translated_text) => Ok(Json(TranslateResponse { translated_text })),
        Err(_) => Err(error(StatusCode::BAD_GATEWAY, messages.error_banner)),
    }
}

/// Build the router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/languages", get(languages))
        .route("/translate", get(translate))
        .with_state(Arc::new(state))
}

/// Run the HTTP server
pub async fn run_server(state: AppState, host: String, port: u16) -> anyhow::Result<()> {
    let app = router(state);

    // Bind address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
