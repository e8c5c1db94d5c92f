// src/page/contact.rs
// =============================================================================
// The contact form.
//
// Submitting checks that no field is empty, logs the message and returns a
// confirmation for the visitor. Like HTML `required`, a field holding only
// whitespace counts as filled in. The message is NOT sent anywhere:
// there is no mail or backend integration yet.
// =============================================================================

use thiserror::Error;

/// Shown to the visitor after a successful submit
pub const CONFIRMATION: &str = "Thank you for your message! I will get back to you soon.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("the '{0}' field is required")]
    MissingField(&'static str),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    // Submits the form
    //
    // On success the fields are cleared and the confirmation text returned.
    // On a missing field nothing is logged and the fields are kept.
    pub fn submit(&mut self) -> Result<&'static str, ContactError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }

        tracing::info!(
            name = %self.name,
            email = %self.email,
            message = %self.message,
            "contact form submitted"
        );

        self.reset();
        Ok(CONFIRMATION)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_confirms_and_resets() {
        let mut form = ContactForm::new("Ada", "ada@example.com", "Hello!");
        assert_eq!(form.submit(), Ok(CONFIRMATION));
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_blank_field_is_rejected() {
        let mut form = ContactForm::new("Ada", "", "Hello!");
        assert_eq!(form.submit(), Err(ContactError::MissingField("email")));
        // Nothing is lost on a failed submit
        assert_eq!(form.name, "Ada");
    }

    #[test]
    fn test_whitespace_counts_as_filled_in() {
        let mut form = ContactForm::new("Ada", "ada@example.com", "  ");
        assert_eq!(form.submit(), Ok(CONFIRMATION));
    }
}
