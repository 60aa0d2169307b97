//! Fixed language catalog

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::messages::Locale;

/// One of the six languages the translator offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
    /// `en-us`
    English,
    /// `es`
    Spanish,
    /// `fr`
    French,
    /// `de`
    German,
    /// `it`
    Italian,
    /// `pt-br`
    Portuguese,
}

/// Language as presented in a selection list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    /// Provider code
    pub code: &'static str,
    /// Name in the interface locale
    pub display_name: &'static str,
}

impl Language {
    /// Every language, in display order
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Portuguese,
    ];

    /// Code sent verbatim in the provider's `langpair` parameter
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en-us",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
            Language::Italian => "it",
            Language::Portuguese => "pt-br",
        }
    }

    /// Name shown to users of `locale`
    pub fn display_name(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::English, Language::English) => "English",
            (Locale::English, Language::Spanish) => "Spanish",
            (Locale::English, Language::French) => "French",
            (Locale::English, Language::German) => "German",
            (Locale::English, Language::Italian) => "Italian",
            (Locale::English, Language::Portuguese) => "Portuguese",
            (Locale::Portuguese, Language::English) => "Inglês",
            (Locale::Portuguese, Language::Spanish) => "Espanhol",
            (Locale::Portuguese, Language::French) => "Francês",
            (Locale::Portuguese, Language::German) => "Alemão",
            (Locale::Portuguese, Language::Italian) => "Italiano",
            (Locale::Portuguese, Language::Portuguese) => "Português",
        }
    }

    /// Selection entry for this language
    pub fn option(self, locale: Locale) -> LanguageOption {
        LanguageOption {
            code: self.code(),
            display_name: self.display_name(locale),
        }
    }

    /// The whole catalog as selection options
    pub fn catalog(locale: Locale) -> Vec<LanguageOption> {
        Self::ALL.iter().map(|lang| lang.option(locale)).collect()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Code that is not part of the catalog
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown language code: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

impl TryFrom<String> for Language {
    type Error = UnknownLanguage;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Language> for String {
    fn from(lang: Language) -> Self {
        lang.code().to_string()
    }
}
