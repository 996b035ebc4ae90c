//! Field-level validation for candidate entries.
//!
//! Every check runs; errors accumulate in a fixed order (number, place,
//! district, state) so a client sees all problems in one response.

use std::sync::LazyLock;

use regex::Regex;

use crate::entry::NewEntry;
use crate::states::{is_allowed_state, ALLOWED_STATES};

/// Indian mobile number: ten digits, leading digit 6-9.
const MOBILE_NUMBER_PATTERN: &str = r"^[6-9][0-9]{9}$";

static MOBILE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MOBILE_NUMBER_PATTERN).expect("valid regex"));

pub const INVALID_NUMBER_MSG: &str = "Invalid mobile number. Use 10 digits starting with 6-9.";
pub const PLACE_REQUIRED_MSG: &str = "Place is required.";
pub const DISTRICT_REQUIRED_MSG: &str = "District is required.";
pub const STATE_REQUIRED_MSG: &str = "State is required.";

/// Whether `number` (already trimmed) is a valid mobile number.
pub fn is_valid_mobile_number(number: &str) -> bool {
    MOBILE_NUMBER_RE.is_match(number)
}

/// Message for a state outside [`ALLOWED_STATES`].
pub fn invalid_state_message() -> String {
    format!("State must be one of: {}", ALLOWED_STATES.join(", "))
}

/// Validate a candidate entry. An empty result means the entry is valid.
pub fn validate_entry(entry: &NewEntry) -> Vec<String> {
    let mut errors = Vec::new();

    if !is_valid_mobile_number(entry.number.trim()) {
        errors.push(INVALID_NUMBER_MSG.to_string());
    }

    if entry.place.trim().is_empty() {
        errors.push(PLACE_REQUIRED_MSG.to_string());
    }
    if entry.district.trim().is_empty() {
        errors.push(DISTRICT_REQUIRED_MSG.to_string());
    }

    let state = entry.state.trim();
    if state.is_empty() {
        errors.push(STATE_REQUIRED_MSG.to_string());
    } else if !is_allowed_state(state) {
        errors.push(invalid_state_message());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> NewEntry {
        NewEntry {
            number: "9876543210".into(),
            place: "Gandhipuram".into(),
            district: "Coimbatore".into(),
            state: "Tamil Nadu".into(),
        }
    }

    #[test]
    fn valid_entry_has_no_errors() {
        assert!(validate_entry(&valid()).is_empty());
    }

    #[test]
    fn mobile_number_rules() {
        assert!(is_valid_mobile_number("9876543210"));
        assert!(is_valid_mobile_number("6000000000"));
        assert!(!is_valid_mobile_number("5876543210"));
        assert!(!is_valid_mobile_number("98765432100"));
        assert!(!is_valid_mobile_number("987654321"));
        assert!(!is_valid_mobile_number("98765x3210"));
        assert!(!is_valid_mobile_number(""));
    }

    #[test]
    fn non_ascii_digits_rejected() {
        // Devanagari digits are `\d` under Unicode rules; the pattern is ASCII only.
        assert!(!is_valid_mobile_number("९८७६५४३२१०"));
    }

    #[test]
    fn number_is_trimmed_before_checking() {
        let entry = NewEntry {
            number: "  9876543210 ".into(),
            ..valid()
        };
        assert!(validate_entry(&entry).is_empty());
    }

    #[test]
    fn empty_entry_reports_every_error_in_order() {
        let errors = validate_entry(&NewEntry::default());

        assert_eq!(
            errors,
            vec![
                INVALID_NUMBER_MSG,
                PLACE_REQUIRED_MSG,
                DISTRICT_REQUIRED_MSG,
                STATE_REQUIRED_MSG,
            ]
        );
    }

    #[test]
    fn whitespace_only_fields_are_required_errors() {
        let entry = NewEntry {
            place: "   ".into(),
            district: "\t".into(),
            ..valid()
        };

        assert_eq!(
            validate_entry(&entry),
            vec![PLACE_REQUIRED_MSG, DISTRICT_REQUIRED_MSG]
        );
    }

    #[test]
    fn unknown_state_lists_allowed_values() {
        let entry = NewEntry {
            state: "Goa".into(),
            ..valid()
        };

        let errors = validate_entry(&entry);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0],
            "State must be one of: Tamil Nadu, Kerala, Karnataka, Andhra Pradesh, Telangana"
        );
    }

    #[test]
    fn state_match_is_case_sensitive() {
        let entry = NewEntry {
            state: "tamil nadu".into(),
            ..valid()
        };
        assert_eq!(validate_entry(&entry), vec![invalid_state_message()]);
    }
}
