//! Per-field validators for the contact form.
//!
//! Validators are total functions: any string input, including empty, very
//! long, or non-ASCII text, produces a well-defined [`ValidationResult`].
//! Failure is data, never an error or a panic, so the host can render the
//! message next to the field and move on.

use crate::models::ContactFormData;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Minimum number of characters in a trimmed name.
pub const MIN_NAME_LEN: usize = 2;

/// Inclusive bounds on the digit count of a valid phone number.
///
/// Local numbers are 8 digits for landlines and 9 for mobiles; anything
/// outside that range is rejected after normalization.
pub const MIN_PHONE_DIGITS: usize = 8;
/// See [`MIN_PHONE_DIGITS`].
pub const MAX_PHONE_DIGITS: usize = 9;

/// Verdict for a single form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the field passed validation
    pub is_valid: bool,

    /// Explanation of the failure when invalid; empty or a short
    /// confirmation when valid
    pub message: String,
}

impl ValidationResult {
    /// A passing verdict with no message.
    pub fn pass() -> Self {
        ValidationResult {
            is_valid: true,
            message: String::new(),
        }
    }

    /// A passing verdict carrying a confirmation message.
    pub fn pass_with(message: impl Into<String>) -> Self {
        ValidationResult {
            is_valid: true,
            message: message.into(),
        }
    }

    /// A failing verdict. The message explains the failure to the user.
    pub fn fail(message: impl Into<String>) -> Self {
        ValidationResult {
            is_valid: false,
            message: message.into(),
        }
    }
}

/// Combined verdict for a whole submission.
///
/// The host must check [`FormVerdict::is_valid`] before composing a message;
/// the per-field results are kept so feedback can be rendered next to each
/// control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormVerdict {
    /// Verdict for the name field
    pub name: ValidationResult,

    /// Verdict for the phone field
    pub phone: ValidationResult,
}

impl FormVerdict {
    /// True when every field passed.
    pub fn is_valid(&self) -> bool {
        self.name.is_valid && self.phone.is_valid
    }
}

/// Validate the name field.
///
/// The value is trimmed before checking. An empty trimmed value fails with
/// "name required"; fewer than [`MIN_NAME_LEN`] characters fails with
/// "name too short". Success carries no confirmation message.
pub fn validate_name(raw: &str) -> ValidationResult {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return ValidationResult::fail("name required");
    }

    if trimmed.chars().count() < MIN_NAME_LEN {
        return ValidationResult::fail("name too short");
    }

    ValidationResult::pass()
}

/// Validate the phone field.
///
/// Non-digit characters are stripped first: spaces, dashes, parentheses and
/// letters are normalization noise, never a failure by themselves. Only the
/// resulting digit count decides the verdict. No digits fails with
/// "phone required"; a digit count outside the closed
/// [`MIN_PHONE_DIGITS`]..=[`MAX_PHONE_DIGITS`] range fails with "phone invalid".
///
/// # Example
///
/// ```
/// use contact_form_core::validation::validate_phone;
///
/// assert!(validate_phone("123-456-78").is_valid); // 8 digits
/// assert!(!validate_phone("1234567").is_valid); // 7 digits
/// ```
pub fn validate_phone(raw: &str) -> ValidationResult {
    let digits = strip_non_digits(raw);

    if digits.is_empty() {
        return ValidationResult::fail("phone required");
    }

    if digits.len() < MIN_PHONE_DIGITS || digits.len() > MAX_PHONE_DIGITS {
        return ValidationResult::fail("phone invalid");
    }

    ValidationResult::pass_with("valid phone")
}

/// Validate a whole submission, field by field.
pub fn validate_form(data: &ContactFormData) -> FormVerdict {
    let verdict = FormVerdict {
        name: validate_name(&data.name),
        phone: validate_phone(&data.phone),
    };

    if !verdict.is_valid() {
        tracing::debug!(
            name_ok = verdict.name.is_valid,
            phone_ok = verdict.phone.is_valid,
            "Form validation failed"
        );
    }

    verdict
}

/// Drop everything that is not an ASCII decimal digit.
///
/// The class is spelled `[^0-9]` rather than `\D` on purpose: the regex
/// crate's `\d` matches all of Unicode's `Nd` category, but only the ASCII
/// digits 0-9 count toward a phone number here. The result is pure ASCII, so
/// its byte length is its digit count.
fn strip_non_digits(raw: &str) -> String {
    static NON_DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").unwrap());

    NON_DIGIT_RE.replace_all(raw, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContactFormData;

    #[test]
    fn test_name_valid() {
        assert_eq!(validate_name("Ana"), ValidationResult::pass());
        assert_eq!(validate_name("  Jo"), ValidationResult::pass());
        assert_eq!(validate_name("María José"), ValidationResult::pass());
    }

    #[test]
    fn test_name_required() {
        assert_eq!(validate_name(""), ValidationResult::fail("name required"));
        assert_eq!(
            validate_name("   "),
            ValidationResult::fail("name required")
        );
        assert_eq!(
            validate_name("\t\n"),
            ValidationResult::fail("name required")
        );
    }

    #[test]
    fn test_name_too_short() {
        assert_eq!(validate_name("J"), ValidationResult::fail("name too short"));
        assert_eq!(
            validate_name("  X  "),
            ValidationResult::fail("name too short")
        );
    }

    #[test]
    fn test_name_length_counts_chars_not_bytes() {
        // Two non-ASCII characters are enough even though they are four bytes
        assert!(validate_name("Ñú").is_valid);
    }

    #[test]
    fn test_phone_valid_boundaries() {
        assert!(validate_phone("12345678").is_valid); // exactly 8
        assert!(validate_phone("123456789").is_valid); // exactly 9
        assert_eq!(validate_phone("12345678").message, "valid phone");
    }

    #[test]
    fn test_phone_invalid_boundaries() {
        assert_eq!(
            validate_phone("1234567"), // 7 digits
            ValidationResult::fail("phone invalid")
        );
        assert_eq!(
            validate_phone("1234567890"), // 10 digits
            ValidationResult::fail("phone invalid")
        );
    }

    #[test]
    fn test_phone_required() {
        assert_eq!(validate_phone(""), ValidationResult::fail("phone required"));
        assert_eq!(
            validate_phone("abc- ()"),
            ValidationResult::fail("phone required")
        );
    }

    #[test]
    fn test_phone_strips_formatting() {
        assert!(validate_phone("123-456-78").is_valid);
        assert!(validate_phone("(099) 123 456").is_valid);
        assert!(validate_phone("tel: 099.123.456").is_valid);
    }

    #[test]
    fn test_phone_counts_ascii_digits_only() {
        // Non-ASCII digits are formatting noise like any other character:
        // stripped, never counted
        assert_eq!(
            validate_phone("12345678\u{0661}"), // 8 ASCII digits + Arabic-Indic one
            ValidationResult::pass_with("valid phone")
        );
        assert_eq!(
            validate_phone("\u{0661}\u{0662}\u{0663}\u{0664}\u{0665}\u{0666}\u{0667}\u{0668}"),
            ValidationResult::fail("phone required")
        );
        assert_eq!(
            validate_phone("１２３４５６７８"), // fullwidth digits
            ValidationResult::fail("phone required")
        );
    }

    #[test]
    fn test_phone_formatting_never_fails_by_itself() {
        // Same digits, wildly different decoration, same verdict
        let plain = validate_phone("099123456");
        let decorated = validate_phone("  +x(099) 12-34-56 ext ");
        assert_eq!(plain.is_valid, decorated.is_valid);
    }

    #[test]
    fn test_validate_form() {
        let good = ContactFormData::from_raw("Ana", "099123456", "pickup", "");
        assert!(validate_form(&good).is_valid());

        let bad_name = ContactFormData::from_raw("A", "099123456", "pickup", "");
        let verdict = validate_form(&bad_name);
        assert!(!verdict.is_valid());
        assert!(!verdict.name.is_valid);
        assert!(verdict.phone.is_valid);

        let bad_both = ContactFormData::from_raw("", "123", "delivery", "");
        let verdict = validate_form(&bad_both);
        assert_eq!(verdict.name.message, "name required");
        assert_eq!(verdict.phone.message, "phone invalid");
    }

    #[test]
    fn test_verdicts_serialize() {
        let verdict = validate_name("J");
        let json = serde_json::to_string(&verdict).unwrap();
        assert!(json.contains("\"is_valid\":false"));
        assert!(json.contains("name too short"));
    }
}
