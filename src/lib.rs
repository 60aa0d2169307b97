//! Tradutor - interactive translator backed by the MyMemory API
//!
//! This library provides the translation client, a debounced translation
//! session with a render model, a terminal front end and a small HTTP API.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod server;
pub mod session;
pub mod ui;

// Re-export key types for convenience
pub use crate::core::{
    client::{MyMemoryClient, TranslationProvider},
    config::TranslatorConfig,
    errors::{SessionError, TranslationError},
    languages::{Language, LanguageOption},
    messages::{Locale, Messages},
    models::{TranslationRequest, TranslationResult},
};

pub use crate::session::{InputEvent, Session, SessionSettings, SessionState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
