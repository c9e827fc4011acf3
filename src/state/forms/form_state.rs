//! Registration form state: values, errors, derived cities, and focus

use super::error::FormError;
use super::field::{FieldKind, FieldName, FieldValue};
use super::locations::CountryCityTable;
use super::registration::{RegistrationData, Submission};
use super::validation::validate_field;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Per-field error messages; an absent field is valid
pub type ErrorMap = BTreeMap<FieldName, String>;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Lifecycle of a registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    /// Terminal; the snapshot has been handed off
    Submitted,
}

/// Registration form controller
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    data: RegistrationData,
    errors: ErrorMap,
    cities: Vec<String>,
    table: Arc<CountryCityTable>,
    phase: FormPhase,
    show_password_default: bool,
    pub active_field_index: usize,
}

/// Index of the submit button row in the focus order
pub const SUBMIT_ROW: usize = FieldName::ALL.len();

impl RegistrationForm {
    pub fn new(table: Arc<CountryCityTable>, show_password: bool) -> Self {
        Self {
            data: RegistrationData {
                show_password,
                ..Default::default()
            },
            errors: ErrorMap::new(),
            cities: Vec::new(),
            table,
            phase: FormPhase::Editing,
            show_password_default: show_password,
            active_field_index: 0,
        }
    }

    /// Fresh editing form sharing this form's table and defaults
    pub fn reset(&mut self) {
        *self = Self::new(Arc::clone(&self.table), self.show_password_default);
    }

    pub fn data(&self) -> &RegistrationData {
        &self.data
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, name: FieldName) -> Option<&str> {
        self.errors.get(&name).map(String::as_str)
    }

    /// Cities offered for the current country
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn table(&self) -> &CountryCityTable {
        &self.table
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// The submit control is inert while any field has an error
    pub fn can_submit(&self) -> bool {
        self.errors.is_empty()
    }

    /// Update a field, re-validate it, and re-derive cities on country change
    pub fn set_field(
        &mut self,
        name: FieldName,
        value: impl Into<FieldValue>,
    ) -> Result<(), FormError> {
        let value = value.into();
        if self.phase == FormPhase::Submitted {
            debug!(field = %name, "ignoring edit on submitted form");
            return Ok(());
        }

        match (&value, name.is_textual()) {
            (FieldValue::Flag(_), true) => {
                return Err(FormError::ValueKind {
                    field: name,
                    expected: "text",
                })
            }
            (FieldValue::Text(_), false) => {
                return Err(FormError::ValueKind {
                    field: name,
                    expected: "boolean",
                })
            }
            _ => {}
        }

        let text = value.as_text();
        match name {
            FieldName::Country if !text.is_empty() && !self.table.contains_country(text) => {
                return Err(FormError::UnknownCountry(text.to_string()));
            }
            FieldName::City if !text.is_empty() && !self.cities.iter().any(|c| c == text) => {
                return Err(FormError::CityNotOffered {
                    country: self.data.country.clone(),
                    city: text.to_string(),
                });
            }
            _ => {}
        }

        match validate_field(name, &value) {
            Some(message) => {
                self.errors.insert(name, message.to_string());
            }
            None => {
                self.errors.remove(&name);
            }
        }
        self.data.store(name, value);

        if name == FieldName::Country {
            self.refresh_cities();
        }
        Ok(())
    }

    /// Derive the city list from the current country, clearing a stale city
    fn refresh_cities(&mut self) {
        self.cities = self.table.cities(&self.data.country).to_vec();
        if !self.data.city.is_empty() && !self.cities.contains(&self.data.city) {
            debug!(city = %self.data.city, country = %self.data.country, "clearing stale city");
            self.data.city.clear();
        }
    }

    /// Validate every field, replacing the error map wholesale
    pub fn validate_all(&mut self) -> bool {
        self.errors = FieldName::ALL
            .into_iter()
            .filter_map(|name| {
                validate_field(name, &self.data.get(name)).map(|message| (name, message.to_string()))
            })
            .collect();
        debug!(invalid = self.errors.len(), "validated all fields");
        self.errors.is_empty()
    }

    /// Validate and, if everything passes, hand off an immutable snapshot
    pub fn submit(&mut self) -> Option<Submission> {
        if self.phase == FormPhase::Submitted {
            debug!("form already submitted");
            return None;
        }
        if !self.validate_all() {
            debug!(invalid = self.errors.len(), "submission rejected");
            return None;
        }
        self.phase = FormPhase::Submitted;
        let submission = Submission::new(self.data.clone());
        debug!(id = %submission.id, "registration submitted");
        Some(submission)
    }

    /// Field under focus, or `None` on the submit row
    pub fn active_name(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field_index).copied()
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    /// Append a character to the focused text field
    pub fn input_char(&mut self, c: char) -> Result<(), FormError> {
        match self.active_name() {
            Some(name) if matches!(name.kind(), FieldKind::Text | FieldKind::Secret) => {
                let mut text = self.data.text(name).to_string();
                text.push(c);
                self.set_field(name, text)
            }
            _ => Ok(()),
        }
    }

    /// Remove the last character from the focused text field
    pub fn backspace(&mut self) -> Result<(), FormError> {
        match self.active_name() {
            Some(name) if matches!(name.kind(), FieldKind::Text | FieldKind::Secret) => {
                let mut text = self.data.text(name).to_string();
                if text.pop().is_none() {
                    return Ok(());
                }
                self.set_field(name, text)
            }
            _ => Ok(()),
        }
    }

    pub fn toggle_show_password(&mut self) -> Result<(), FormError> {
        let shown = self.data.show_password;
        self.set_field(FieldName::ShowPassword, !shown)
    }

    /// Choices for a select field, led by the blank placeholder
    pub fn choices(&self, name: FieldName) -> Vec<String> {
        let options: Vec<String> = match name {
            FieldName::Country => self.table().countries().map(str::to_string).collect(),
            FieldName::City => self.cities().to_vec(),
            _ => return Vec::new(),
        };
        std::iter::once(String::new()).chain(options).collect()
    }

    /// Step the focused select field through its choices (wraps around)
    pub fn cycle_choice(&mut self, forward: bool) -> Result<(), FormError> {
        let Some(name) = self.active_name() else {
            return Ok(());
        };
        if name.kind() != FieldKind::Select {
            return Ok(());
        }
        let choices = self.choices(name);
        let current = self.data.text(name);
        let position = choices.iter().position(|c| c == current).unwrap_or(0);
        let next = if forward {
            (position + 1) % choices.len()
        } else if position == 0 {
            choices.len() - 1
        } else {
            position - 1
        };
        let choice = choices[next].clone();
        self.set_field(name, choice)
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new(Arc::new(CountryCityTable::default()), false)
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        SUBMIT_ROW + 1 // eleven fields, submit row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::validation::{EMAIL_INVALID, PASSWORD_WEAK};

    fn filled_form() -> RegistrationForm {
        let mut form = RegistrationForm::default();
        form.set_field(FieldName::FirstName, "Ada").unwrap();
        form.set_field(FieldName::LastName, "Lovelace").unwrap();
        form.set_field(FieldName::Username, "ada").unwrap();
        form.set_field(FieldName::Email, "ada@example.com").unwrap();
        form.set_field(FieldName::Password, "Abcdef1!").unwrap();
        form.set_field(FieldName::PhoneNo, "5550100").unwrap();
        form.set_field(FieldName::Country, "India").unwrap();
        form.set_field(FieldName::City, "Mumbai").unwrap();
        form.set_field(FieldName::PanNo, "ABCDE1234F").unwrap();
        form.set_field(FieldName::AadharNo, "123412341234").unwrap();
        form
    }

    mod set_field {
        use super::*;

        #[test]
        fn test_new_form_is_blank() {
            let form = RegistrationForm::default();
            assert_eq!(form.data(), &RegistrationData::default());
            assert!(form.errors().is_empty());
            assert!(form.cities().is_empty());
            assert_eq!(form.phase(), FormPhase::Editing);
        }

        #[test]
        fn test_updates_value_and_error() {
            let mut form = RegistrationForm::default();
            form.set_field(FieldName::Email, "a@b").unwrap();
            assert_eq!(form.data().email, "a@b");
            assert_eq!(form.error(FieldName::Email), Some(EMAIL_INVALID));

            form.set_field(FieldName::Email, "a@b.c").unwrap();
            assert!(form.error(FieldName::Email).is_none());
        }

        #[test]
        fn test_only_touched_field_is_revalidated() {
            let mut form = RegistrationForm::default();
            form.set_field(FieldName::Username, "").unwrap();
            assert_eq!(form.errors().len(), 1);
            assert_eq!(form.error(FieldName::Username), Some("Username is required"));
        }

        #[test]
        fn test_rejects_wrong_value_kind() {
            let mut form = RegistrationForm::default();
            assert_eq!(
                form.set_field(FieldName::Email, true),
                Err(FormError::ValueKind {
                    field: FieldName::Email,
                    expected: "text",
                })
            );
            assert!(form.set_field(FieldName::ShowPassword, "yes").is_err());
            assert_eq!(form.data(), &RegistrationData::default());
        }

        #[test]
        fn test_show_password_toggle_has_no_error() {
            let mut form = RegistrationForm::default();
            form.toggle_show_password().unwrap();
            assert!(form.data().show_password);
            form.toggle_show_password().unwrap();
            assert!(!form.data().show_password);
            assert!(form.errors().is_empty());
        }

        #[test]
        fn test_rejects_unknown_country() {
            let mut form = RegistrationForm::default();
            assert_eq!(
                form.set_field(FieldName::Country, "France"),
                Err(FormError::UnknownCountry("France".to_string()))
            );
            assert!(form.data().country.is_empty());
        }

        #[test]
        fn test_rejects_city_not_offered() {
            let mut form = RegistrationForm::default();
            form.set_field(FieldName::Country, "USA").unwrap();
            assert!(matches!(
                form.set_field(FieldName::City, "Delhi"),
                Err(FormError::CityNotOffered { .. })
            ));
            assert!(form.data().city.is_empty());
        }
    }

    mod cities {
        use super::*;

        #[test]
        fn test_country_change_offers_its_cities_in_order() {
            let mut form = RegistrationForm::default();
            form.set_field(FieldName::Country, "USA").unwrap();
            assert_eq!(
                form.cities(),
                ["New York", "Los Angeles", "Chicago", "Houston"]
            );
        }

        #[test]
        fn test_stale_city_is_cleared() {
            let mut form = RegistrationForm::default();
            form.set_field(FieldName::Country, "India").unwrap();
            form.set_field(FieldName::City, "Delhi").unwrap();
            form.set_field(FieldName::Country, "USA").unwrap();
            assert_eq!(form.data().city, "");
            assert_eq!(form.cities().len(), 4);
        }

        #[test]
        fn test_city_kept_when_still_offered() {
            let mut form = RegistrationForm::default();
            form.set_field(FieldName::Country, "India").unwrap();
            form.set_field(FieldName::City, "pune").unwrap();
            form.set_field(FieldName::Country, "India").unwrap();
            assert_eq!(form.data().city, "pune");
        }

        #[test]
        fn test_clearing_country_clears_cities() {
            let mut form = RegistrationForm::default();
            form.set_field(FieldName::Country, "USA").unwrap();
            form.set_field(FieldName::City, "Houston").unwrap();
            form.set_field(FieldName::Country, "").unwrap();
            assert!(form.cities().is_empty());
            assert_eq!(form.data().city, "");
            assert_eq!(form.error(FieldName::Country), Some("Country is required"));
        }

        #[test]
        fn test_city_invariant_holds_through_cycling() {
            let mut form = RegistrationForm::default();
            form.set_active_field(FieldName::ALL.iter().position(|n| *n == FieldName::Country).unwrap());
            for _ in 0..5 {
                form.cycle_choice(true).unwrap();
                let data = form.data();
                assert!(
                    data.city.is_empty() || form.table().cities(&data.country).contains(&data.city)
                );
            }
        }
    }

    mod choices {
        use super::*;

        fn focus(form: &mut RegistrationForm, name: FieldName) {
            let index = FieldName::ALL.iter().position(|n| *n == name).unwrap();
            form.set_active_field(index);
        }

        #[test]
        fn test_country_choices_start_with_blank() {
            let form = RegistrationForm::default();
            assert_eq!(form.choices(FieldName::Country), vec!["", "India", "USA"]);
            assert!(form.choices(FieldName::Email).is_empty());
        }

        #[test]
        fn test_cycle_forward_and_back() {
            let mut form = RegistrationForm::default();
            focus(&mut form, FieldName::Country);
            form.cycle_choice(true).unwrap();
            assert_eq!(form.data().country, "India");
            form.cycle_choice(true).unwrap();
            assert_eq!(form.data().country, "USA");
            form.cycle_choice(true).unwrap();
            assert_eq!(form.data().country, "");
            form.cycle_choice(false).unwrap();
            assert_eq!(form.data().country, "USA");
        }

        #[test]
        fn test_cycle_city_uses_derived_list() {
            let mut form = RegistrationForm::default();
            form.set_field(FieldName::Country, "USA").unwrap();
            focus(&mut form, FieldName::City);
            form.cycle_choice(true).unwrap();
            assert_eq!(form.data().city, "New York");
            form.cycle_choice(false).unwrap();
            form.cycle_choice(false).unwrap();
            assert_eq!(form.data().city, "Houston");
        }

        #[test]
        fn test_cycle_city_without_country_stays_blank() {
            let mut form = RegistrationForm::default();
            focus(&mut form, FieldName::City);
            form.cycle_choice(true).unwrap();
            assert_eq!(form.data().city, "");
            assert_eq!(form.error(FieldName::City), Some("City is required"));
        }

        #[test]
        fn test_cycle_on_text_field_is_noop() {
            let mut form = RegistrationForm::default();
            form.cycle_choice(true).unwrap();
            assert_eq!(form.data(), &RegistrationData::default());
        }
    }

    mod text_input {
        use super::*;

        #[test]
        fn test_input_char_and_backspace() {
            let mut form = RegistrationForm::default();
            form.input_char('A').unwrap();
            form.input_char('d').unwrap();
            assert_eq!(form.data().first_name, "Ad");
            form.backspace().unwrap();
            assert_eq!(form.data().first_name, "A");
            form.backspace().unwrap();
            assert_eq!(form.error(FieldName::FirstName), Some("First Name is required"));
        }

        #[test]
        fn test_backspace_on_empty_does_not_flag_error() {
            let mut form = RegistrationForm::default();
            form.backspace().unwrap();
            assert!(form.errors().is_empty());
        }

        #[test]
        fn test_password_input_revalidates() {
            let mut form = RegistrationForm::default();
            form.set_active_field(4);
            assert_eq!(form.active_name(), Some(FieldName::Password));
            for c in "Abcdef1".chars() {
                form.input_char(c).unwrap();
            }
            assert_eq!(form.error(FieldName::Password), Some(PASSWORD_WEAK));
            form.input_char('!').unwrap();
            assert!(form.error(FieldName::Password).is_none());
        }

        #[test]
        fn test_input_ignored_on_checkbox_and_select() {
            let mut form = RegistrationForm::default();
            form.set_active_field(5);
            form.input_char('x').unwrap();
            form.set_active_field(7);
            form.input_char('x').unwrap();
            assert_eq!(form.data(), &RegistrationData::default());
        }
    }

    mod submit {
        use super::*;

        #[test]
        fn test_valid_form_produces_equal_snapshot() {
            let mut form = filled_form();
            let submission = form.submit().expect("valid form should submit");
            assert_eq!(&submission.data, form.data());
            assert_eq!(form.phase(), FormPhase::Submitted);
        }

        #[test]
        fn test_invalid_form_reports_every_invalid_field() {
            let mut form = RegistrationForm::default();
            form.set_field(FieldName::FirstName, "Ada").unwrap();
            form.set_field(FieldName::Email, "bad").unwrap();
            let before = form.data().clone();

            assert!(form.submit().is_none());
            assert_eq!(form.data(), &before);
            assert_eq!(form.phase(), FormPhase::Editing);

            let invalid: Vec<_> = form.errors().keys().copied().collect();
            assert_eq!(
                invalid,
                vec![
                    FieldName::LastName,
                    FieldName::Username,
                    FieldName::Email,
                    FieldName::Password,
                    FieldName::PhoneNo,
                    FieldName::Country,
                    FieldName::City,
                    FieldName::PanNo,
                    FieldName::AadharNo,
                ]
            );
            assert_eq!(form.error(FieldName::Email), Some(EMAIL_INVALID));
            assert!(!form.can_submit());
        }

        #[test]
        fn test_validate_all_replaces_stale_errors() {
            let mut form = filled_form();
            form.set_field(FieldName::Username, "").unwrap();
            form.set_field(FieldName::Username, "ada").unwrap();
            assert!(form.validate_all());
            assert!(form.errors().is_empty());
        }

        #[test]
        fn test_edits_after_submit_are_ignored() {
            let mut form = filled_form();
            form.submit().unwrap();
            form.set_field(FieldName::Username, "someone").unwrap();
            assert_eq!(form.data().username, "ada");
            assert!(form.submit().is_none());
        }

        #[test]
        fn test_reset_returns_to_editing() {
            let table = Arc::new(CountryCityTable::default());
            let mut form = RegistrationForm::new(table, true);
            form.set_field(FieldName::Username, "ada").unwrap();
            form.active_field_index = 3;
            form.reset();
            assert_eq!(form.data().username, "");
            assert!(form.data().show_password);
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.phase(), FormPhase::Editing);
        }

        #[test]
        fn test_can_submit_tracks_errors() {
            let mut form = RegistrationForm::default();
            assert!(form.can_submit());
            form.set_field(FieldName::Email, "").unwrap();
            assert!(!form.can_submit());
            form.set_field(FieldName::Email, "a@b.c").unwrap();
            assert!(form.can_submit());
        }
    }

    mod focus {
        use super::*;

        #[test]
        fn test_field_count_includes_submit_row() {
            let form = RegistrationForm::default();
            assert_eq!(form.field_count(), 12);
        }

        #[test]
        fn test_next_field_wraps() {
            let mut form = RegistrationForm::default();
            for _ in 0..12 {
                form.next_field();
            }
            assert_eq!(form.active_field(), 0);
        }

        #[test]
        fn test_prev_field_wraps_to_submit_row() {
            let mut form = RegistrationForm::default();
            form.prev_field();
            assert!(form.is_submit_row_active());
            assert!(form.active_name().is_none());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = RegistrationForm::default();
            form.set_active_field(100);
            assert_eq!(form.active_field(), SUBMIT_ROW);
        }
    }
}
