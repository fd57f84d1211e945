//! Field validators for luggage and tracking-update input.
//!
//! Required text fields must be non-empty after trimming; lengths are capped
//! to match the column sizes in the schema.

use crate::error::CoreError;

/// Maximum length of a luggage tag number.
pub const MAX_TAG_NUMBER_LEN: usize = 64;
/// Maximum length of a location string.
pub const MAX_LOCATION_LEN: usize = 255;
/// Maximum length of free-text fields (description, notes).
pub const MAX_TEXT_LEN: usize = 2000;

/// Validate a required text field: non-empty after trimming, within `max` chars.
pub fn validate_required_text(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if value.chars().count() > max {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

/// Validate an optional text field: within `max` chars when present.
pub fn validate_optional_text(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<(), CoreError> {
    if let Some(v) = value {
        if v.chars().count() > max {
            return Err(CoreError::Validation(format!(
                "{field} must be at most {max} characters"
            )));
        }
    }
    Ok(())
}

/// Validate a luggage tag number.
pub fn validate_tag_number(tag_number: &str) -> Result<(), CoreError> {
    validate_required_text("tag_number", tag_number, MAX_TAG_NUMBER_LEN)
}

/// Validate a location string (luggage current location or update location).
pub fn validate_location(location: &str) -> Result<(), CoreError> {
    validate_required_text("location", location, MAX_LOCATION_LEN)
}

/// Validate a submitted status string: non-empty, within length bounds.
///
/// Unrecognized values are accepted (the store keeps status as free text);
/// only empty/oversized input is rejected.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    validate_required_text("status", status, MAX_TAG_NUMBER_LEN)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn empty_tag_number_rejected() {
        let err = validate_tag_number("").unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }

    #[test]
    fn whitespace_only_location_rejected() {
        assert!(validate_location("   ").is_err());
    }

    #[test]
    fn valid_fields_accepted() {
        assert!(validate_tag_number("BAG-001").is_ok());
        assert!(validate_location("JFK Terminal 4").is_ok());
        assert!(validate_status("in_transit").is_ok());
    }

    #[test]
    fn overlong_tag_number_rejected() {
        let tag = "X".repeat(MAX_TAG_NUMBER_LEN + 1);
        assert!(validate_tag_number(&tag).is_err());
    }

    #[test]
    fn optional_text_none_is_ok() {
        assert!(validate_optional_text("notes", None, MAX_TEXT_LEN).is_ok());
    }

    #[test]
    fn optional_text_overlong_rejected() {
        let long = "y".repeat(MAX_TEXT_LEN + 1);
        assert!(validate_optional_text("notes", Some(&long), MAX_TEXT_LEN).is_err());
    }
}
