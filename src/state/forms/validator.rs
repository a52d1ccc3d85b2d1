//! Per-field validation rules for the contact form

use super::field::FieldName;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

fn email_pattern() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
    })
}

const NAME_MIN_CHARS: usize = 2;
const SUBJECT_MIN_CHARS: usize = 5;
const MESSAGE_MIN_CHARS: usize = 20;

/// Why a single field failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{} is required", .0.capitalized())]
    Required(FieldName),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("{} must be at least {min} characters", .field.capitalized())]
    TooShort { field: FieldName, min: usize },
}

/// Validity flag plus message, the message being empty when valid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub message: String,
}

impl From<Result<(), ValidationError>> for ValidationOutcome {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self {
                is_valid: true,
                message: String::new(),
            },
            Err(err) => Self {
                is_valid: false,
                message: err.to_string(),
            },
        }
    }
}

/// Validate a field value. The value is trimmed first; the first failing
/// rule wins.
pub fn validate(field: FieldName, value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required(field));
    }

    let min = match field {
        FieldName::Email => {
            if email_pattern().is_match(value) {
                return Ok(());
            }
            return Err(ValidationError::InvalidEmail);
        }
        FieldName::Name => NAME_MIN_CHARS,
        FieldName::Subject => SUBJECT_MIN_CHARS,
        FieldName::Message => MESSAGE_MIN_CHARS,
    };

    if value.chars().count() < min {
        return Err(ValidationError::TooShort { field, min });
    }
    Ok(())
}

/// Validate by form identifier. Identifiers outside the contact form have
/// no rule and always pass.
#[allow(dead_code)]
pub fn validate_identifier(identifier: &str, value: &str) -> ValidationOutcome {
    match FieldName::from_identifier(identifier) {
        Some(field) => validate(field, value).into(),
        None => Ok(()).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(field: FieldName, value: &str) -> String {
        ValidationOutcome::from(validate(field, value)).message
    }

    mod required {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_is_required_for_every_field() {
            for field in FieldName::ALL {
                let err = validate(field, "").unwrap_err();
                assert_eq!(err, ValidationError::Required(field));
                assert_eq!(
                    err.to_string(),
                    format!("{} is required", field.capitalized())
                );
            }
        }

        #[test]
        fn test_whitespace_only_counts_as_empty() {
            assert_eq!(message(FieldName::Name, "   \t\n"), "Name is required");
            assert_eq!(message(FieldName::Email, "  "), "Email is required");
        }

        #[test]
        fn test_required_wins_over_field_rule() {
            assert_eq!(
                validate(FieldName::Email, ""),
                Err(ValidationError::Required(FieldName::Email))
            );
        }
    }

    mod email {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_short_address_is_valid() {
            assert!(validate(FieldName::Email, "a@b.co").is_ok());
        }

        #[test]
        fn test_plain_text_is_invalid() {
            assert_eq!(
                message(FieldName::Email, "not-an-email"),
                "Please enter a valid email address"
            );
        }

        #[test]
        fn test_surrounding_whitespace_is_trimmed() {
            assert!(validate(FieldName::Email, "  jane.doe+news@mail.example.org ").is_ok());
        }

        #[test]
        fn test_rejects_single_letter_tld() {
            assert_eq!(
                validate(FieldName::Email, "a@b.c"),
                Err(ValidationError::InvalidEmail)
            );
        }

        #[test]
        fn test_rejects_missing_domain_dot() {
            assert_eq!(
                validate(FieldName::Email, "user@localhost"),
                Err(ValidationError::InvalidEmail)
            );
        }

        #[test]
        fn test_rejects_inner_space_and_double_at() {
            assert!(validate(FieldName::Email, "jane doe@x.io").is_err());
            assert!(validate(FieldName::Email, "a@@b.io").is_err());
        }
    }

    mod lengths {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_name_boundary() {
            assert!(validate(FieldName::Name, "Al").is_ok());
            assert_eq!(
                message(FieldName::Name, "A"),
                "Name must be at least 2 characters"
            );
        }

        #[test]
        fn test_subject_boundary() {
            assert!(validate(FieldName::Subject, "Hello").is_ok());
            assert_eq!(
                message(FieldName::Subject, "Hell"),
                "Subject must be at least 5 characters"
            );
        }

        #[test]
        fn test_message_boundary() {
            assert!(validate(FieldName::Message, &"x".repeat(20)).is_ok());
            assert_eq!(
                message(FieldName::Message, &"x".repeat(19)),
                "Message must be at least 20 characters"
            );
        }

        #[test]
        fn test_length_is_measured_after_trim() {
            assert_eq!(
                validate(FieldName::Name, " A "),
                Err(ValidationError::TooShort {
                    field: FieldName::Name,
                    min: 2
                })
            );
        }

        #[test]
        fn test_length_counts_characters_not_bytes() {
            assert!(validate(FieldName::Name, "Jó").is_ok());
            assert!(validate(FieldName::Subject, "ééééé").is_ok());
        }
    }

    mod identifiers {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_unknown_identifier_is_always_valid() {
            let outcome = validate_identifier("phone", "");
            assert_eq!(
                outcome,
                ValidationOutcome {
                    is_valid: true,
                    message: String::new()
                }
            );
        }

        #[test]
        fn test_known_identifier_uses_rule() {
            let outcome = validate_identifier("subject", "Hi");
            assert!(!outcome.is_valid);
            assert_eq!(outcome.message, "Subject must be at least 5 characters");
        }
    }
}
