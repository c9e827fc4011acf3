//! Application state and core logic

use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::config::AppConfig;
use crate::platform::COPY_MODIFIER;
use crate::state::{details_text, AppState, FieldKind, Form, Submission, View, ViewParams};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where copied details go
    clipboard: Box<dyn ClipboardSink>,
    /// Whether the app should quit
    quit: bool,
    /// Status bar feedback message
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance backed by the system clipboard
    pub fn new(config: &AppConfig) -> Self {
        Self::with_clipboard(config, Box::new(SystemClipboard))
    }

    pub fn with_clipboard(config: &AppConfig, clipboard: Box<dyn ClipboardSink>) -> Self {
        let table = Arc::new(config.country_table());
        Self {
            state: AppState::new(table, config.show_password()),
            clipboard,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Request the main loop to exit
    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// The submitted snapshot, once the success view is showing
    pub fn submission(&self) -> Option<&Submission> {
        self.state.submission()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        match self.state.current_view {
            View::Register => self.handle_register_key(key)?,
            View::Success => self.handle_success_key(key)?,
        }

        Ok(())
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View, params: ViewParams) {
        tracing::debug!("Navigating to {view:?}");
        self.state.current_view = view;
        self.state.view_params = params;
    }

    /// Handle keys in the Register view
    fn handle_register_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_submit_row = self.state.form.is_submit_row_active();
        let active_kind = self.state.form.active_name().map(|name| name.kind());

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Enter if on_submit_row => self.submit_form(),
            KeyCode::Enter => self.state.form.next_field(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_form();
            }
            KeyCode::Esc => self.quit(),
            // Select fields cycle through their choices
            KeyCode::Left if active_kind == Some(FieldKind::Select) => {
                self.state.form.cycle_choice(false)?;
            }
            KeyCode::Right if active_kind == Some(FieldKind::Select) => {
                self.state.form.cycle_choice(true)?;
            }
            KeyCode::Char(' ') if active_kind == Some(FieldKind::Select) => {
                self.state.form.cycle_choice(true)?;
            }
            KeyCode::Char(' ') if active_kind == Some(FieldKind::Checkbox) => {
                self.state.form.toggle_show_password()?;
            }
            // Form field input; Ctrl and Alt chords are not text
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.state.form.input_char(c)?;
            }
            KeyCode::Backspace => self.state.form.backspace()?,
            _ => {}
        }
        Ok(())
    }

    /// Submit the form, moving to the success view when it passes
    fn submit_form(&mut self) {
        if !self.state.form.can_submit() {
            self.status_message = Some("Fix the highlighted fields first".to_string());
            return;
        }
        match self.state.form.submit() {
            Some(submission) => self.navigate(
                View::Success,
                ViewParams {
                    submission: Some(submission),
                },
            ),
            None => {
                let count = self.state.form.errors().len();
                self.status_message = Some(format!("{count} field(s) need attention"));
            }
        }
    }

    /// Handle keys in the Success view
    fn handle_success_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('c')
                if key.modifiers.is_empty()
                    || COPY_MODIFIER.is_some_and(|m| key.modifiers.contains(m)) =>
            {
                self.copy_details();
            }
            KeyCode::Char('n') => {
                self.state.clear_form();
                self.navigate(View::Register, ViewParams::default());
            }
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            _ => {}
        }
        Ok(())
    }

    /// Copy the submitted details to the clipboard
    fn copy_details(&mut self) {
        let text = details_text(self.state.submission());
        match self.clipboard.set_text(text) {
            Ok(()) => self.status_message = Some("Copied details".to_string()),
            Err(err) => {
                tracing::debug!("Clipboard copy failed: {err:?}");
                self.push_error(format!("Failed to copy details: {err}"));
            }
        }
    }
}
