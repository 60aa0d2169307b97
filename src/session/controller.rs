//! Session controller: debounced, sequence-tagged translation dispatch

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{sleep_until, Instant};
use tracing::{debug, warn};

use crate::core::client::TranslationProvider;
use crate::core::config::TranslatorConfig;
use crate::core::errors::SessionError;
use crate::core::languages::Language;
use crate::core::messages::Messages;
use crate::core::models::TranslationResult;
use crate::session::state::{InputEvent, SessionState};

/// Settings a session starts with
#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// Initial source language
    pub from: Language,
    /// Initial target language
    pub to: Language,
    /// Quiet period before an edit is dispatched
    pub debounce: Duration,
    /// String table for placeholder and errors
    pub messages: &'static Messages,
}

impl SessionSettings {
    /// Settings from the configured defaults
    pub fn from_config(config: &TranslatorConfig) -> Self {
        Self {
            from: config.default_from,
            to: config.default_to,
            debounce: config.debounce(),
            messages: config.messages(),
        }
    }
}

/// Handle to a running session.
///
/// Edits go to a single controller task which owns the [`SessionState`];
/// observers read snapshots through a watch channel, so they never see a
/// half-applied edit.
#[derive(Debug)]
pub struct Session {
    events: mpsc::UnboundedSender<InputEvent>,
    state: watch::Receiver<SessionState>,
    task: JoinHandle<()>,
}

impl Session {
    /// Start the controller task on the current tokio runtime
    pub fn spawn(provider: Arc<dyn TranslationProvider>, settings: SessionSettings) -> Self {
        let initial = SessionState::new(settings.from, settings.to, settings.messages);
        let (state_tx, state_rx) = watch::channel(initial);
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let controller = Controller {
            provider,
            state: state_tx,
            messages: settings.messages,
            debounce: settings.debounce,
            issued: 0,
        };
        let task = tokio::spawn(controller.run(events_rx));

        Self {
            events: events_tx,
            state: state_rx,
            task,
        }
    }

    fn send(&self, event: InputEvent) -> Result<(), SessionError> {
        self.events.send(event).map_err(|_| SessionError::Closed)
    }

    /// Replace the source text
    pub fn set_text(&self, text: impl Into<String>) -> Result<(), SessionError> {
        self.send(InputEvent::SetText(text.into()))
    }

    /// Change the source language
    pub fn set_from(&self, lang: Language) -> Result<(), SessionError> {
        self.send(InputEvent::SetFrom(lang))
    }

    /// Change the target language
    pub fn set_to(&self, lang: Language) -> Result<(), SessionError> {
        self.send(InputEvent::SetTo(lang))
    }

    /// Exchange source and target languages
    pub fn swap(&self) -> Result<(), SessionError> {
        self.send(InputEvent::Swap)
    }

    /// Current state
    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.clone()
    }

    /// Stop accepting input and wait for the controller to exit.
    /// Requests still in flight are aborted.
    pub async fn shutdown(self) {
        drop(self.events);
        if let Err(e) = self.task.await {
            warn!("Session controller ended abnormally: {}", e);
        }
    }
}

/// Owner of the session state
struct Controller {
    provider: Arc<dyn TranslationProvider>,
    state: watch::Sender<SessionState>,
    messages: &'static Messages,
    debounce: Duration,
    /// Sequence number of the latest dispatched request; responses with
    /// any other number are stale
    issued: u64,
}

impl Controller {
    async fn run(mut self, mut events: mpsc::UnboundedReceiver<InputEvent>) {
        let mut in_flight: JoinSet<(u64, TranslationResult)> = JoinSet::new();
        let mut deadline: Option<Instant> = None;

        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => deadline = self.handle_input(event, deadline),
                    None => break,
                },
                Some(joined) = in_flight.join_next() => match joined {
                    Ok((seq, outcome)) => self.resolve(seq, outcome),
                    Err(e) => warn!("Translation task failed: {}", e),
                },
                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    deadline = None;
                    self.dispatch(&mut in_flight);
                }
            }
        }

        debug!("Session closed with {} request(s) in flight", in_flight.len());
        in_flight.shutdown().await;
    }

    /// Apply an edit and return the new dispatch deadline
    fn handle_input(&mut self, event: InputEvent, deadline: Option<Instant>) -> Option<Instant> {
        let messages = self.messages;
        let mut blank = false;

        let changed = self.state.send_if_modified(|state| {
            if !state.apply(event) {
                return false;
            }
            if state.request().is_none() {
                blank = true;
                state.reset(messages);
            }
            true
        });

        if !changed {
            return deadline;
        }

        if blank {
            // Nothing to translate; whatever is still in flight is now stale
            self.issued += 1;
            return None;
        }

        Some(Instant::now() + self.debounce)
    }

    fn dispatch(&mut self, in_flight: &mut JoinSet<(u64, TranslationResult)>) {
        let Some(request) = self.state.borrow().request() else {
            return;
        };

        self.issued += 1;
        let seq = self.issued;
        self.state.send_modify(SessionState::begin);

        debug!("Dispatching request #{} ({})", seq, request.langpair());
        let provider = Arc::clone(&self.provider);
        in_flight.spawn(async move {
            let outcome = provider
                .translate(&request.source_text, request.from, request.to)
                .await;
            (seq, outcome)
        });
    }

    fn resolve(&mut self, seq: u64, outcome: TranslationResult) {
        if seq != self.issued {
            debug!("Discarding stale response #{} (latest is #{})", seq, self.issued);
            return;
        }

        if let Err(e) = &outcome {
            debug!("Request #{} failed: {}", seq, e.reason());
        }

        let messages = self.messages;
        self.state.send_modify(|state| state.finish(outcome, messages));
    }
}
