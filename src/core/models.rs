//! Core data models for translation

use serde::Deserialize;

use crate::core::errors::TranslationError;
use crate::core::languages::Language;

/// Translation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    /// Text exactly as typed
    pub source_text: String,
    /// Source language
    pub from: Language,
    /// Target language
    pub to: Language,
}

impl TranslationRequest {
    /// Create a new request
    pub fn new(source_text: impl Into<String>, from: Language, to: Language) -> Self {
        Self {
            source_text: source_text.into(),
            from,
            to,
        }
    }

    /// Blank requests are never sent to the provider
    pub fn is_blank(&self) -> bool {
        self.source_text.trim().is_empty()
    }

    /// Value of the provider's `langpair` query parameter
    pub fn langpair(&self) -> String {
        format!("{}|{}", self.from.code(), self.to.code())
    }
}

/// Outcome of one translation request
pub type TranslationResult = Result<String, TranslationError>;

/// MyMemory response envelope.
///
/// Only the fields this crate reads are modeled; everything else is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderResponse {
    /// Payload carrying the translation
    pub response_data: Option<ResponseData>,
    /// Sent as a number or a string depending on the endpoint
    #[serde(default)]
    pub response_status: Option<serde_json::Value>,
    /// Provider's explanation of a non-200 status
    #[serde(default)]
    pub response_details: Option<String>,
}

/// `responseData` object of [`ProviderResponse`]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseData {
    /// Translated text, returned verbatim
    pub translated_text: Option<String>,
}

impl ProviderResponse {
    /// Provider-reported status, when present
    pub fn status_code(&self) -> Option<u64> {
        match self.response_status.as_ref()? {
            serde_json::Value::Number(n) => n.as_u64(),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Extract the translated text, failing on provider errors or missing fields
    pub fn into_translation(self) -> Result<String, TranslationError> {
        if let Some(status) = self.status_code() {
            if status != 200 {
                return Err(TranslationError::new(format!(
                    "Provider status {}: {}",
                    status,
                    self.response_details.unwrap_or_default()
                )));
            }
        }

        self.response_data
            .and_then(|data| data.translated_text)
            .ok_or_else(|| TranslationError::new("No translatedText in response"))
    }
}
