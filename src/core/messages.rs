//! User-visible strings

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Language of the interface itself, not of the text being translated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Locale {
    /// English strings and language names
    #[default]
    #[serde(rename = "en")]
    English,
    /// Brazilian Portuguese strings and language names
    #[serde(rename = "pt")]
    Portuguese,
}

impl TryFrom<String> for Locale {
    type Error = anyhow::Error;

    fn try_from(value: String) -> anyhow::Result<Self> {
        value.parse()
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "pt" | "pt-br" | "portuguese" => Ok(Locale::Portuguese),
            other => Err(anyhow::anyhow!("Unsupported locale: {}", other)),
        }
    }
}

/// Hardcoded string table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    /// Shown before any translation and whenever the input is blank
    pub placeholder: &'static str,
    /// Prompt of the text input
    pub input_prompt: &'static str,
    /// Replaces the translated text after a failure
    pub error_text: &'static str,
    /// Banner shown beneath the text after a failure
    pub error_banner: &'static str,
}

const ENGLISH: Messages = Messages {
    placeholder: "fill in translated text here",
    input_prompt: "Type your text...",
    error_text: "Translation error.",
    error_banner: "Translation error. Try again.",
};

const PORTUGUESE: Messages = Messages {
    placeholder: "Colocar aqui o texto traduzido",
    input_prompt: "Digite seu texto...",
    error_text: "Erro na tradução.",
    error_banner: "Erro na tradução. Tente novamente.",
};

impl Messages {
    /// String table of a locale
    pub fn for_locale(locale: Locale) -> &'static Messages {
        match locale {
            Locale::English => &ENGLISH,
            Locale::Portuguese => &PORTUGUESE,
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        ENGLISH
    }
}
