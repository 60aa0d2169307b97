//! Render surface: maps session state to exactly one visual state

use std::fmt;

use crate::core::messages::Locale;
use crate::session::SessionState;

/// What the output pane shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    /// A request is outstanding
    Loading,
    /// Translated text, or the placeholder before any translation
    Translated(&'a str),
    /// Text followed by an error banner
    Failed {
        /// Text shown in place of the translation
        text: &'a str,
        /// Banner shown beneath the text
        banner: &'a str,
    },
}

impl<'a> View<'a> {
    /// The single view a session state maps to
    pub fn of(state: &'a SessionState) -> Self {
        if state.loading {
            return View::Loading;
        }

        match state.error_message.as_deref() {
            Some(banner) => View::Failed {
                text: &state.translated_text,
                banner,
            },
            None => View::Translated(&state.translated_text),
        }
    }
}

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Loading => write!(f, "..."),
            View::Translated(text) => write!(f, "{}", text),
            View::Failed { text, banner } => write!(f, "{}\n[!] {}", text, banner),
        }
    }
}

/// Header line naming the language pair, e.g. `[Portuguese -> English]`
pub fn header(state: &SessionState, locale: Locale) -> String {
    format!(
        "[{} -> {}]",
        state.from.display_name(locale),
        state.to.display_name(locale)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::TranslationError;
    use crate::core::languages::Language;
    use crate::core::messages::Messages;

    fn state() -> SessionState {
        SessionState::new(Language::English, Language::Portuguese, &Messages::default())
    }

    #[test]
    fn test_initial_view_is_placeholder() {
        let s = state();
        assert_eq!(View::of(&s), View::Translated(Messages::default().placeholder));
    }

    #[test]
    fn test_loading_hides_text() {
        let mut s = state();
        s.begin();
        assert_eq!(View::of(&s), View::Loading);
    }

    #[test]
    fn test_failure_renders_text_then_banner() {
        let messages = Messages::default();
        let mut s = state();
        s.finish(Err(TranslationError::new("boom")), &messages);

        let view = View::of(&s);
        assert!(matches!(view, View::Failed { .. }));
        assert_eq!(
            view.to_string(),
            format!("{}\n[!] {}", messages.error_text, messages.error_banner)
        );
    }

    #[test]
    fn test_header_uses_locale() {
        let s = state();
        assert_eq!(header(&s, Locale::English), "[English -> Portuguese]");
        assert_eq!(header(&s, Locale::Portuguese), "[Inglês -> Português]");
    }
}
