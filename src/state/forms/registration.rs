//! Registration data and the snapshot handed to the success view

use super::field::{FieldName, FieldValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Live values of every registration field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationData {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    /// Never written out; the exit JSON goes to stdout
    #[serde(skip_serializing)]
    pub password: String,
    pub show_password: bool,
    pub phone_no: String,
    pub country: String,
    pub city: String,
    pub pan_no: String,
    pub aadhar_no: String,
}

impl RegistrationData {
    /// Get a field's current value
    pub fn get(&self, name: FieldName) -> FieldValue {
        match name {
            FieldName::ShowPassword => FieldValue::Flag(self.show_password),
            _ => FieldValue::Text(self.text(name).to_string()),
        }
    }

    /// Borrow a textual field (empty for the show-password flag)
    pub fn text(&self, name: FieldName) -> &str {
        match name {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Username => &self.username,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::ShowPassword => "",
            FieldName::PhoneNo => &self.phone_no,
            FieldName::Country => &self.country,
            FieldName::City => &self.city,
            FieldName::PanNo => &self.pan_no,
            FieldName::AadharNo => &self.aadhar_no,
        }
    }

    /// Store a value; callers have already checked the value kind
    pub(super) fn store(&mut self, name: FieldName, value: FieldValue) {
        let slot = match name {
            FieldName::ShowPassword => {
                self.show_password = value.as_flag();
                return;
            }
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::Username => &mut self.username,
            FieldName::Email => &mut self.email,
            FieldName::Password => &mut self.password,
            FieldName::PhoneNo => &mut self.phone_no,
            FieldName::Country => &mut self.country,
            FieldName::City => &mut self.city,
            FieldName::PanNo => &mut self.pan_no,
            FieldName::AadharNo => &mut self.aadhar_no,
        };
        *slot = match value {
            FieldValue::Text(s) => s,
            FieldValue::Flag(_) => String::new(),
        };
    }
}

/// Immutable snapshot of a successfully submitted form
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub data: RegistrationData,
}

impl Submission {
    pub fn new(data: RegistrationData) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            data,
        }
    }
}

/// Fields shown on the success view, in display order
pub const RESULT_FIELDS: [FieldName; 9] = [
    FieldName::FirstName,
    FieldName::LastName,
    FieldName::Username,
    FieldName::Email,
    FieldName::PhoneNo,
    FieldName::Country,
    FieldName::City,
    FieldName::PanNo,
    FieldName::AadharNo,
];

/// Label/value pairs for a submission, or blanks when none was supplied
pub fn result_rows(submission: Option<&Submission>) -> Vec<(&'static str, &str)> {
    RESULT_FIELDS
        .iter()
        .map(|name| {
            let value = submission.map(|s| s.data.text(*name)).unwrap_or("");
            (name.label(), value)
        })
        .collect()
}

/// Plain-text rendering of the result rows, one `Label: value` per line
pub fn details_text(submission: Option<&Submission>) -> String {
    result_rows(submission)
        .into_iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}
