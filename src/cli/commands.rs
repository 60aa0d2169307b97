//! CLI command definitions and handlers

use clap::Subcommand;
use std::sync::Arc;
use tracing::info;

use crate::core::client::{MyMemoryClient, TranslationProvider};
use crate::core::config::TranslatorConfig;
use crate::core::languages::Language;
use crate::core::models::TranslationRequest;
use crate::ui::render::View;

/// Commands for Tradutor
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate as you type (default)
    Interactive {
        /// Source language code (default from configuration)
        #[arg(long)]
        from: Option<Language>,

        /// Target language code (default from configuration)
        #[arg(long)]
        to: Option<Language>,
    },

    /// Translate text given on the command line
    Translate {
        /// Source language code (default from configuration)
        #[arg(long)]
        from: Option<Language>,

        /// Target language code (default from configuration)
        #[arg(long)]
        to: Option<Language>,

        /// Text to translate
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// List supported language codes
    Languages,

    /// Start HTTP API server
    Serve {
        /// Bind address (default: 127.0.0.1)
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Listen port (default: 8000)
        #[arg(short, long, default_value_t = 8000)]
        port: u16,
    },
}

/// Handle interactive session command
pub async fn handle_interactive(
    config: TranslatorConfig,
    from: Option<Language>,
    to: Option<Language>,
) -> anyhow::Result<()> {
    use crate::session::{Session, SessionSettings};
    use crate::ui::terminal::InteractiveMode;

    let provider: Arc<dyn TranslationProvider> = Arc::new(MyMemoryClient::new(&config)?);

    let mut settings = SessionSettings::from_config(&config);
    settings.from = from.unwrap_or(settings.from);
    settings.to = to.unwrap_or(settings.to);

    info!("Starting interactive session with {}", provider.name());
    let session = Session::spawn(provider, settings);

    InteractiveMode::new(session, config.locale).start().await
}

/// Handle one-shot translation command
pub async fn handle_translate(
    config: TranslatorConfig,
    from: Option<Language>,
    to: Option<Language>,
    text: Vec<String>,
) -> anyhow::Result<()> {
    let messages = config.messages();
    let request = TranslationRequest::new(
        text.join(" "),
        from.unwrap_or(config.default_from),
        to.unwrap_or(config.default_to),
    );

    if request.is_blank() {
        println!("{}", messages.placeholder);
        return Ok(());
    }

    let client = MyMemoryClient::new(&config)?;
    info!("Translating {}", request.langpair());

    match client
        .translate(&request.source_text, request.from, request.to)
        .await
    {
        Ok(translated) => {
            println!("{}", View::Translated(&translated));
            Ok(())
        }
        Err(_) => {
            // The client already logged the reason; users only see the banner
            eprintln!("{}", messages.error_text);
            anyhow::bail!("{}", messages.error_banner)
        }
    }
}

/// Handle languages command
pub fn handle_languages(config: &TranslatorConfig) {
    for option in Language::catalog(config.locale) {
        println!("{:<6} {}", option.code, option.display_name);
    }
}

/// Handle server command
pub async fn handle_server(config: TranslatorConfig, host: String, port: u16) -> anyhow::Result<()> {
    use crate::server::api::{run_server, AppState};

    let provider = Arc::new(MyMemoryClient::new(&config)?);

    info!("Starting HTTP server on {}:{}", host, port);
    println!("Server starting on http://{}:{}", host, port);

    run_server(AppState::new(provider, config.locale), host, port).await
}
