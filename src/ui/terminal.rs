//! Interactive terminal front end

use chrono::Datelike;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing::debug;

use crate::core::languages::Language;
use crate::core::messages::{Locale, Messages};
use crate::session::{Session, SessionState};
use crate::ui::render::{header, View};

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the source text
    Text(String),
    /// Change the source language
    From(Language),
    /// Change the target language
    To(Language),
    /// Swap source and target
    Swap,
    /// Clear the source text
    Clear,
    /// List language codes
    Langs,
    /// Show the command list
    Help,
    /// Leave interactive mode
    Quit,
}

/// Parse a line: `:`-prefixed lines are commands, anything else is text.
///
/// A leading `::` escapes the colon, so `::)` is the text `:)`.
pub fn parse_line(line: &str) -> anyhow::Result<Command> {
    let trimmed = line.trim_start();
    if let Some(rest) = trimmed.strip_prefix("::") {
        return Ok(Command::Text(format!(":{}", rest)));
    }

    let Some(command) = trimmed.strip_prefix(':') else {
        return Ok(Command::Text(line.to_string()));
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();

    let language = |arg: Option<&str>| -> anyhow::Result<Language> {
        let code = arg.ok_or_else(|| anyhow::anyhow!("Missing language code, try :langs"))?;
        Ok(code.parse::<Language>()?)
    };

    match name {
        "from" => Ok(Command::From(language(arg)?)),
        "to" => Ok(Command::To(language(arg)?)),
        "swap" => Ok(Command::Swap),
        "clear" => Ok(Command::Clear),
        "langs" => Ok(Command::Langs),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(anyhow::anyhow!("Unknown command :{}, try :help", other)),
    }
}

/// Line-based front end driving one [`Session`]
pub struct InteractiveMode {
    session: Session,
    locale: Locale,
    messages: &'static Messages,
}

impl InteractiveMode {
    /// Wrap a session, rendering in `locale`
    pub fn new(session: Session, locale: Locale) -> Self {
        Self {
            session,
            locale,
            messages: Messages::for_locale(locale),
        }
    }

    /// Read lines from stdin until EOF or `:quit`
    pub async fn start(self) -> anyhow::Result<()> {
        self.show_banner();

        let renderer = tokio::spawn(render_loop(self.session.subscribe(), self.locale));
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        while let Some(line) = lines.next_line().await? {
            match parse_line(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command)?,
                Err(e) => eprintln!("{}", e),
            }
        }

        debug!("Leaving interactive mode");
        renderer.abort();
        self.session.shutdown().await;
        println!("Goodbye!");

        Ok(())
    }

    fn execute(&self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Text(text) => self.session.set_text(text)?,
            Command::From(lang) => self.session.set_from(lang)?,
            Command::To(lang) => self.session.set_to(lang)?,
            Command::Swap => self.session.swap()?,
            Command::Clear => self.session.set_text("")?,
            Command::Langs => self.show_languages(),
            Command::Help => self.show_help(),
            Command::Quit => {}
        }
        Ok(())
    }

    fn show_banner(&self) {
        let state = self.session.snapshot();
        println!("=== Tradutor ===");
        println!("{}", header(&state, self.locale));
        println!("{} (:help for commands)", self.messages.input_prompt);
        println!("{}", View::of(&state));
        println!("(c) {} Tradutor", chrono::Local::now().year());
        println!();
    }

    fn show_languages(&self) {
        for option in Language::catalog(self.locale) {
            println!("  {:<6} {}", option.code, option.display_name);
        }
    }

    fn show_help(&self) {
        println!();
        println!("Type text and press Enter to translate it.");
        println!("  :from <code>  - Set the source language");
        println!("  :to <code>    - Set the target language");
        println!("  :swap         - Swap source and target");
        println!("  :clear        - Clear the text");
        println!("  :langs        - List language codes");
        println!("  :help, :?     - Show this help");
        println!("  :quit, :q     - Exit");
        println!("Start a line with :: to translate text beginning with ':'.");
        println!();
    }
}

/// Redraw whenever the session state changes
async fn render_loop(mut updates: watch::Receiver<SessionState>, locale: Locale) {
    let mut spinner: Option<ProgressBar> = None;
    let mut last_rendered = String::new();

    while updates.changed().await.is_ok() {
        let state = updates.borrow_and_update().clone();
        let title = header(&state, locale);

        match View::of(&state) {
            View::Loading => {
                if spinner.is_none() {
                    spinner = Some(start_spinner(title));
                }
            }
            view => {
                if let Some(pb) = spinner.take() {
                    pb.finish_and_clear();
                }

                let rendered = format!("{} {}", title, view);
                if rendered != last_rendered {
                    println!("{}", rendered);
                    io::stdout().flush().ok();
                    last_rendered = rendered;
                }
            }
        }
    }
}

fn start_spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_lines_are_text() {
        assert_eq!(
            parse_line("  hello world ").unwrap(),
            Command::Text("  hello world ".to_string())
        );
        assert_eq!(parse_line("").unwrap(), Command::Text(String::new()));
    }

    #[test]
    fn test_language_commands() {
        assert_eq!(parse_line(":from es").unwrap(), Command::From(Language::Spanish));
        assert_eq!(parse_line(":to PT-BR").unwrap(), Command::To(Language::Portuguese));
        assert!(parse_line(":to").is_err());
        assert!(parse_line(":from xx").is_err());
    }

    #[test]
    fn test_other_commands() {
        assert_eq!(parse_line(":swap").unwrap(), Command::Swap);
        assert_eq!(parse_line(" :q").unwrap(), Command::Quit);
        assert_eq!(parse_line(":?").unwrap(), Command::Help);
        assert!(parse_line(":dance").is_err());
    }

    #[test]
    fn test_double_colon_escapes_text() {
        assert_eq!(parse_line("::)").unwrap(), Command::Text(":)".to_string()));
        assert_eq!(
            parse_line("  ::quit now").unwrap(),
            Command::Text(":quit now".to_string())
        );
    }
}
