use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::form::FormState;

/// Whitespace as browsers define it for `\s` and number parsing. Unlike
/// `char::is_whitespace` this includes U+FEFF and leaves out U+0085.
const JS_WHITESPACE: &[char] = &[
    '\t', '\n', '\u{0b}', '\u{0c}', '\r', ' ', '\u{a0}', '\u{1680}', '\u{2000}', '\u{2001}',
    '\u{2002}', '\u{2003}', '\u{2004}', '\u{2005}', '\u{2006}', '\u{2007}', '\u{2008}',
    '\u{2009}', '\u{200a}', '\u{2028}', '\u{2029}', '\u{202f}', '\u{205f}', '\u{3000}',
    '\u{feff}',
];

const EMAIL_PART: &str = r"[^@\t\n\x0B\f\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{EMAIL_PART}@{EMAIL_PART}\.{EMAIL_PART}$")).unwrap()
});

// Decimal literals, 0x/0o/0b integers and signed Infinity. Digits are ASCII only.
static NUMERIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?|0[xX][0-9a-fA-F]+|0[oO][0-7]+|0[bB][01]+|[+-]?Infinity)$",
    )
    .unwrap()
});

/// Reasons a submission is stopped before anything is sent.
///
/// The display text is what the visitor sees under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("⚠️ Please fill in all fields.")]
    MissingFields,
    #[error("⚠️ Please enter a valid email or phone number.")]
    InvalidContact,
}

/// Runs the submit checks in order and stops at the first failure.
pub fn validate(form: &FormState) -> Result<(), ValidationError> {
    if form.has_empty_field() {
        return Err(ValidationError::MissingFields);
    }

    if !is_email(&form.contact) && !looks_numeric(&form.contact) {
        return Err(ValidationError::InvalidContact);
    }

    Ok(())
}

pub fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Loose "is this a phone number" check: anything that reads as a number.
///
/// Surrounding whitespace is ignored and a blank string counts as zero, so
/// `"   "` passes while `"+91-8758209508"` does not.
pub fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim_matches(JS_WHITESPACE);

    trimmed.is_empty() || NUMERIC_PATTERN.is_match(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with_contact(contact: &str) -> FormState {
        FormState {
            name: "Ann".to_string(),
            contact: contact.to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_each_empty_field_is_missing() {
        let empty_name = FormState {
            name: String::new(),
            ..form_with_contact("ann@x.com")
        };
        let empty_contact = form_with_contact("");
        let empty_subject = FormState {
            subject: String::new(),
            ..form_with_contact("ann@x.com")
        };
        let empty_message = FormState {
            message: String::new(),
            ..form_with_contact("ann@x.com")
        };

        for form in [empty_name, empty_contact, empty_subject, empty_message] {
            assert_eq!(validate(&form), Err(ValidationError::MissingFields));
        }
    }

    #[test]
    fn test_missing_fields_is_checked_before_contact() {
        let form = FormState {
            message: String::new(),
            ..form_with_contact("not-an-email-or-number")
        };

        assert_eq!(validate(&form), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_email_contact_passes() {
        assert_eq!(validate(&form_with_contact("user@example.com")), Ok(()));
    }

    #[test]
    fn test_digit_contact_passes() {
        assert_eq!(validate(&form_with_contact("9998887777")), Ok(()));
    }

    #[test]
    fn test_garbage_contact_is_invalid() {
        assert_eq!(
            validate(&form_with_contact("not-an-email-or-number")),
            Err(ValidationError::InvalidContact)
        );
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_email("a@b.c"));
        assert!(is_email("first.last@sub.example.co.uk"));

        assert!(!is_email("user@example"));
        assert!(!is_email("user @example.com"));
        assert!(!is_email("user@@example.com"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("user@example."));
    }

    #[test]
    fn test_numeric_is_loose() {
        for value in [
            "0", "123", "-12.5", "+91", "1e5", ".5", "5.", "0x1F", "0b101", "0o17", "Infinity",
            " 42 ", "   ",
        ] {
            assert!(looks_numeric(value), "{value:?} should look numeric");
        }
    }

    #[test]
    fn test_numeric_rejects_punctuated_numbers() {
        for value in [
            "+91-8758209508",
            "(555) 123-4567",
            "NaN",
            "12abc",
            "-0x10",
            "١٢٣",
        ] {
            assert!(!looks_numeric(value), "{value:?} should not look numeric");
        }
    }

    #[test]
    fn test_whitespace_follows_browser_rules() {
        assert!(!looks_numeric("\u{85}"));
        assert!(looks_numeric("\u{feff}42\u{3000}"));
        assert!(looks_numeric("\u{a0}\u{2028}"));

        assert!(is_email("a\u{85}b@c.d"));
        assert!(!is_email("a\u{feff}b@c.d"));
        assert!(!is_email("a\u{a0}b@c.d"));
    }

    #[test]
    fn test_next_line_contact_is_invalid() {
        assert_eq!(
            validate(&form_with_contact("\u{85}")),
            Err(ValidationError::InvalidContact)
        );
    }

    #[test]
    fn test_messages_match_what_visitors_see() {
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "⚠️ Please fill in all fields."
        );
        assert_eq!(
            ValidationError::InvalidContact.to_string(),
            "⚠️ Please enter a valid email or phone number."
        );
    }
}
