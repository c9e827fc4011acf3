//! Form field value objects

use super::FormError;
use std::fmt;
use std::str::FromStr;

/// The eleven recognized registration fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    FirstName,
    LastName,
    Username,
    Email,
    Password,
    ShowPassword,
    PhoneNo,
    Country,
    City,
    PanNo,
    AadharNo,
}

/// How a field is edited and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Text that is masked unless show-password is on
    Secret,
    Checkbox,
    Select,
}

impl FieldName {
    pub const ALL: [FieldName; 11] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Username,
        FieldName::Email,
        FieldName::Password,
        FieldName::ShowPassword,
        FieldName::PhoneNo,
        FieldName::Country,
        FieldName::City,
        FieldName::PanNo,
        FieldName::AadharNo,
    ];

    /// Key used in serialized data and error maps
    pub fn key(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::ShowPassword => "showPassword",
            Self::PhoneNo => "phoneNo",
            Self::Country => "country",
            Self::City => "city",
            Self::PanNo => "panNo",
            Self::AadharNo => "aadharNo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ShowPassword => "Show Password",
            Self::PhoneNo => "Phone Number",
            Self::Country => "Country",
            Self::City => "City",
            Self::PanNo => "PAN Number",
            Self::AadharNo => "Aadhar Number",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Password => FieldKind::Secret,
            Self::ShowPassword => FieldKind::Checkbox,
            Self::Country | Self::City => FieldKind::Select,
            _ => FieldKind::Text,
        }
    }

    /// Placeholder shown by select fields with nothing chosen
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Country => Some("Select Country"),
            Self::City => Some("Select City"),
            _ => None,
        }
    }

    /// Whether the field holds a string (every field except the checkbox)
    pub fn is_textual(&self) -> bool {
        !matches!(self.kind(), FieldKind::Checkbox)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|name| name.key() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Get the text value (returns empty string for flags)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Flag(_) => "",
        }
    }

    /// Get the flag value (returns false for text)
    pub fn as_flag(&self) -> bool {
        match self {
            FieldValue::Flag(b) => *b,
            FieldValue::Text(_) => false,
        }
    }

    /// A value counts as empty when it is blank text or an unset flag
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Flag(b) => !b,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}
