//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{ContactForm, FieldKind, FieldName, FieldValue, Form, QueryType};
use crate::submit::{LogSink, SubmissionSink};
use crate::validation::Validator;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// The contact form and its latest errors
    pub form: ContactForm,
    /// Rule set built once at startup
    pub validator: Validator,
    /// Receiver for submit attempts
    sink: Box<dyn SubmissionSink>,
    /// User configuration
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
    /// Status bar message
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance that logs submissions
    pub fn new(config: TuiConfig) -> Result<Self> {
        Self::with_sink(config, Box::new(LogSink))
    }

    pub fn with_sink(config: TuiConfig, sink: Box<dyn SubmissionSink>) -> Result<Self> {
        let validator = Validator::new()?.with_precedence(config.error_precedence());
        Ok(Self {
            form: ContactForm::new(),
            validator,
            sink,
            config,
            quit: false,
            status_message: None,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_submit_button = self.form.is_submit_active();
        let active_kind = self.form.active().map(|f| f.kind());

        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Char('s') if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) => {
                self.submit().await;
            }
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Enter if on_submit_button => self.submit().await,
            KeyCode::Enter if active_kind == Some(FieldKind::MultilineText) => {
                self.form.newline();
            }
            KeyCode::Enter => self.form.next_field(),
            // Radio options
            KeyCode::Left if active_kind == Some(FieldKind::Radio) => {
                self.form.on_field_change(
                    FieldName::QueryType,
                    FieldValue::Choice(Some(QueryType::GeneralEnquiry)),
                )?;
            }
            KeyCode::Right if active_kind == Some(FieldKind::Radio) => {
                self.form.on_field_change(
                    FieldName::QueryType,
                    FieldValue::Choice(Some(QueryType::SupportRequest)),
                )?;
            }
            KeyCode::Char(' ') if active_kind == Some(FieldKind::Radio) => {
                self.form.cycle_query_type();
            }
            KeyCode::Char(' ') if active_kind == Some(FieldKind::Checkbox) => {
                self.form.toggle_consent();
            }
            // Text input (only on text fields)
            KeyCode::Char(c)
                if active_kind.is_some_and(|k| k.is_text())
                    && !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.form.input_char(c);
            }
            KeyCode::Backspace => self.form.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Validate the form and hand the outcome to the sink
    pub async fn submit(&mut self) {
        let outcome = self.form.on_submit(&self.validator);
        tracing::debug!(errors = self.form.errors.len(), "Submit attempt");

        if let Err(err) = self.sink.submit(&self.form.state, &outcome).await {
            tracing::error!("Failed to record submission: {err:?}");
            self.status_message = Some("Failed to record submission".to_string());
        }

        if outcome.is_valid() && self.config.reset_on_submit() {
            self.form.reset();
        }
    }
}
