//! Explicit state container of a translation session

use crate::core::languages::Language;
use crate::core::messages::Messages;
use crate::core::models::{TranslationRequest, TranslationResult};

/// Edit coming from the input surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// New source text, exactly as typed
    SetText(String),
    /// New source language
    SetFrom(Language),
    /// New target language
    SetTo(Language),
    /// Exchange source and target in one step
    Swap,
}

/// Everything the input and render surfaces show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Text being translated
    pub source_text: String,
    /// Source language
    pub from: Language,
    /// Target language
    pub to: Language,
    /// The latest request is outstanding
    pub loading: bool,
    /// Last translation, placeholder, or error text
    pub translated_text: String,
    /// Error banner of the last failed request
    pub error_message: Option<String>,
}

impl SessionState {
    /// Idle state showing the placeholder
    pub fn new(from: Language, to: Language, messages: &Messages) -> Self {
        Self {
            source_text: String::new(),
            from,
            to,
            loading: false,
            translated_text: messages.placeholder.to_string(),
            error_message: None,
        }
    }

    /// Apply an edit. Returns `true` when any input actually changed.
    pub fn apply(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::SetText(text) => {
                if self.source_text == text {
                    return false;
                }
                self.source_text = text;
            }
            InputEvent::SetFrom(lang) => {
                if self.from == lang {
                    return false;
                }
                self.from = lang;
            }
            InputEvent::SetTo(lang) => {
                if self.to == lang {
                    return false;
                }
                self.to = lang;
            }
            InputEvent::Swap => {
                if self.from == self.to {
                    return false;
                }
                std::mem::swap(&mut self.from, &mut self.to);
            }
        }
        true
    }

    /// Request for the current inputs, `None` when the text is blank
    pub fn request(&self) -> Option<TranslationRequest> {
        let request = TranslationRequest::new(self.source_text.clone(), self.from, self.to);
        (!request.is_blank()).then_some(request)
    }

    /// Enter the loading state
    pub fn begin(&mut self) {
        self.loading = true;
        self.error_message = None;
    }

    /// Back to the placeholder, as if nothing had been translated
    pub fn reset(&mut self, messages: &Messages) {
        self.loading = false;
        self.translated_text = messages.placeholder.to_string();
        self.error_message = None;
    }

    /// Record the outcome of the latest request
    pub fn finish(&mut self, outcome: TranslationResult, messages: &Messages) {
        self.loading = false;
        match outcome {
            Ok(text) => {
                self.translated_text = text;
                self.error_message = None;
            }
            Err(_) => {
                self.translated_text = messages.error_text.to_string();
                self.error_message = Some(messages.error_banner.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::TranslationError;

    fn state() -> SessionState {
        SessionState::new(Language::English, Language::Portuguese, &Messages::default())
    }

    #[test]
    fn test_initial_state_shows_placeholder() {
        let s = state();
        assert_eq!(s.translated_text, Messages::default().placeholder);
        assert!(!s.loading);
        assert!(s.error_message.is_none());
        assert!(s.request().is_none());
    }

    #[test]
    fn test_swap_exchanges_both_codes() {
        let mut s = state();
        assert!(s.apply(InputEvent::Swap));
        assert_eq!(s.from, Language::Portuguese);
        assert_eq!(s.to, Language::English);
    }

    #[test]
    fn test_unchanged_edits_report_false() {
        let mut s = state();
        assert!(s.apply(InputEvent::SetText("hello".into())));
        assert!(!s.apply(InputEvent::SetText("hello".into())));
        assert!(!s.apply(InputEvent::SetFrom(Language::English)));
        assert!(s.apply(InputEvent::SetTo(Language::Spanish)));

        s.apply(InputEvent::SetFrom(Language::Spanish));
        assert!(!s.apply(InputEvent::Swap));
    }

    #[test]
    fn test_whitespace_text_produces_no_request() {
        let mut s = state();
        s.apply(InputEvent::SetText(" \t \n".into()));
        assert!(s.request().is_none());

        s.apply(InputEvent::SetText(" hi ".into()));
        let request = s.request().unwrap();
        assert_eq!(request.source_text, " hi ");
        assert_eq!(request.langpair(), "en-us|pt-br");
    }

    #[test]
    fn test_finish_success_and_failure() {
        let messages = Messages::default();
        let mut s = state();

        s.begin();
        assert!(s.loading);
        s.finish(Err(TranslationError::new("down")), &messages);
        assert!(!s.loading);
        assert_eq!(s.translated_text, messages.error_text);
        assert_eq!(s.error_message.as_deref(), Some(messages.error_banner));

        s.begin();
        assert!(s.error_message.is_none());
        s.finish(Ok("olá".into()), &messages);
        assert_eq!(s.translated_text, "olá");
        assert!(s.error_message.is_none());

        s.reset(&messages);
        assert_eq!(s.translated_text, messages.placeholder);
    }
}
