//! Form field value objects

use super::validator::{self, ValidationError, ValidationOutcome};
use std::fmt;

/// The fixed set of contact form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldName {
    pub const ALL: [FieldName; 4] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Subject,
        FieldName::Message,
    ];

    /// Look up a field by its form identifier (`"email"`, ...)
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        match identifier {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "subject" => Some(Self::Subject),
            "message" => Some(Self::Message),
            _ => None,
        }
    }

    pub fn identifier(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    /// Identifier with the first letter uppercased, as used in messages
    pub fn capitalized(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    /// Position of the field within the form
    pub fn index(&self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Subject => 2,
            Self::Message => 3,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Represents a single form field with its configuration, value and
/// validation state.
///
/// Validity is derived from `error`: a field is valid exactly when it holds
/// no error, so the flag and the message slot cannot disagree.
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub label: String,
    pub value: String,
    pub is_multiline: bool,
    pub required: bool,
    error: Option<ValidationError>,
}

impl FormField {
    /// Create a new required text field
    pub fn text(name: FieldName, label: &str, is_multiline: bool) -> Self {
        Self {
            name,
            label: label.to_string(),
            value: String::new(),
            is_multiline,
            required: true,
            error: None,
        }
    }

    /// Create a new required text field with initial value
    #[cfg(test)]
    pub fn text_with_value(name: FieldName, label: &str, value: String, is_multiline: bool) -> Self {
        Self {
            value,
            ..Self::text(name, label, is_multiline)
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the value and any validation error
    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Error text, empty when the field is valid
    pub fn error_message(&self) -> String {
        self.outcome().message
    }

    pub fn outcome(&self) -> ValidationOutcome {
        match &self.error {
            Some(err) => ValidationOutcome::from(Err(err.clone())),
            None => ValidationOutcome::from(Ok(())),
        }
    }

    /// Run the field's rule against its current value and store the result.
    /// Returns whether the field is valid.
    pub fn validate(&mut self) -> bool {
        self.error = validator::validate(self.name, &self.value).err();
        self.error.is_none()
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        self.value.clone()
    }
}
