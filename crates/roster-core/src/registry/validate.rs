//! Input validation for contractor submissions.

use std::sync::LazyLock;

use regex::Regex;
use roster_types::contractor::{ContractorField, ContractorInput};
use roster_types::error::{ContractorError, FieldError};

/// Loose phone-number shape: optional leading `+`, then digits, whitespace,
/// hyphens and parentheses.
static CONTACT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-()]+$").expect("contact pattern compiles"));

pub const NAME_REQUIRED: &str = "Name is required";
pub const CONTACT_REQUIRED: &str = "Contact number is required";
pub const CONTACT_INVALID: &str = "Please enter a valid contact number";

/// Whether `value` (already trimmed) looks like a contact number.
pub fn is_valid_contact_number(value: &str) -> bool {
    CONTACT_PATTERN.is_match(value)
}

/// Check an input and return its trimmed form.
///
/// Every offending field contributes one message; nothing is returned
/// partially.
pub fn validate(input: &ContractorInput) -> Result<ContractorInput, ContractorError> {
    let trimmed = input.trimmed();
    let mut errors = Vec::new();

    if trimmed.name.is_empty() {
        errors.push(FieldError::new(ContractorField::Name, NAME_REQUIRED));
    }

    if trimmed.contact_number.is_empty() {
        errors.push(FieldError::new(ContractorField::ContactNumber, CONTACT_REQUIRED));
    } else if !is_valid_contact_number(&trimmed.contact_number) {
        errors.push(FieldError::new(ContractorField::ContactNumber, CONTACT_INVALID));
    }

    if errors.is_empty() {
        Ok(trimmed)
    } else {
        Err(ContractorError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_pattern_accepts_common_shapes() {
        for ok in ["+880 17 1128 4718", "0171-1234567", "(02) 955 1234", "12345"] {
            assert!(is_valid_contact_number(ok), "{ok} should be accepted");
        }
    }

    #[test]
    fn test_contact_pattern_rejects_letters_and_inner_plus() {
        for bad in ["call me", "+880 17 ext. 5", "12+34", "++880", "+"] {
            assert!(!is_valid_contact_number(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_validate_trims_all_fields() {
        let input = ContractorInput::new("  Pintu Contactor ", " +880 16 7435 1165 ", " Cantonment ", " PCO work ");
        let clean = validate(&input).unwrap();
        assert_eq!(clean, ContractorInput::new("Pintu Contactor", "+880 16 7435 1165", "Cantonment", "PCO work"));
    }

    #[test]
    fn test_validate_reports_each_field() {
        let err = validate(&ContractorInput::new("   ", "", "", "")).unwrap_err();
        let fields = err.field_errors();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0], FieldError::new(ContractorField::Name, NAME_REQUIRED));
        assert_eq!(fields[1], FieldError::new(ContractorField::ContactNumber, CONTACT_REQUIRED));
    }

    #[test]
    fn test_validate_bad_pattern() {
        let err = validate(&ContractorInput::new("Alam Builders", "not-a-number", "", "")).unwrap_err();
        assert_eq!(
            err.field_errors(),
            &[FieldError::new(ContractorField::ContactNumber, CONTACT_INVALID)]
        );
    }

    #[test]
    fn test_validate_blank_optional_fields_ok() {
        assert!(validate(&ContractorInput::new("A", "1", "", "")).is_ok());
    }
}
