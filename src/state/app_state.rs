//! Application state definitions

use super::forms::{CountryCityTable, RegistrationForm, Submission};
use std::collections::VecDeque;
use std::sync::Arc;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Register,
    Success,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Register => "Register",
            View::Success => "Submission Successful",
        }
    }
}

/// View parameters for navigation
#[derive(Debug, Clone, Default)]
pub struct ViewParams {
    /// Snapshot handed to the success view
    pub submission: Option<Submission>,
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_params: ViewParams,

    // Form state
    pub form: RegistrationForm,

    // Modal errors, shown one at a time
    error_queue: VecDeque<String>,
}

impl AppState {
    pub fn new(table: Arc<CountryCityTable>, show_password: bool) -> Self {
        Self {
            form: RegistrationForm::new(table, show_password),
            ..Default::default()
        }
    }

    /// Snapshot carried by the current view, if any
    pub fn submission(&self) -> Option<&Submission> {
        self.view_params.submission.as_ref()
    }

    /// Queue an error for the modal dialog
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// The error currently shown, if any
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    /// Dismiss the error currently shown
    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    /// Discard the form and start a new registration
    pub fn clear_form(&mut self) {
        self.form.reset();
    }
}
