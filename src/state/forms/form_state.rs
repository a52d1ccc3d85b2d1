//! Contact form fields and keyboard focus

use super::field::{FieldName, FormField};

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
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
}

/// The contact form: name, email, subject and message, followed by the
/// submit button as the last focus stop.
#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: [FormField; 4],
    pub active_field_index: usize,
}

impl ContactForm {
    /// Focus index of the submit button
    pub const BUTTON_INDEX: usize = 4;

    pub fn new() -> Self {
        Self {
            fields: [
                FormField::text(FieldName::Name, "Name", false),
                FormField::text(FieldName::Email, "Email", false),
                FormField::text(FieldName::Subject, "Subject", false),
                FormField::text(FieldName::Message, "Message", true),
            ],
            active_field_index: 0,
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        &self.fields[name.index()]
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        &mut self.fields[name.index()]
    }

    /// All fields in display order
    #[cfg(test)]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Name of the focused field, `None` when the button is focused
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field_index).copied()
    }

    pub fn is_button_active(&self) -> bool {
        self.active_field_index == Self::BUTTON_INDEX
    }

    /// Derived from the fields' current error slots; no rule is re-run
    pub fn is_valid(&self) -> bool {
        self.fields.iter().filter(|f| f.required).all(|f| f.is_valid())
    }

    /// First field currently holding an error
    #[cfg(test)]
    pub fn first_invalid(&self) -> Option<FieldName> {
        self.fields.iter().find(|f| !f.is_valid()).map(|f| f.name)
    }

    /// Validate every required field, returning the names that failed in order
    pub fn validate_required(&mut self) -> Vec<FieldName> {
        self.fields
            .iter_mut()
            .filter(|f| f.required)
            .filter_map(|f| if f.validate() { None } else { Some(f.name) })
            .collect()
    }

    /// Clear every value and error
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        5 // name, email, subject, message, button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::BUTTON_INDEX);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.active_field_index)
    }
}
