//! Normalization applied to validated entries before they are stored.

use crate::entry::{Entry, NewEntry};

/// Title-case free text: split on whitespace, uppercase the first character
/// of each word, lowercase the rest, rejoin with single spaces.
///
/// # Examples
///
/// ```
/// use mobdir_core::normalize::title_case;
///
/// assert_eq!(title_case("  gandhi   PURAM "), "Gandhi Puram");
/// ```
pub fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Produce the stored form of a validated entry.
///
/// `place` and `district` are trimmed and title-cased; `number` and `state`
/// are trimmed only.
pub fn normalize_entry(entry: &NewEntry) -> Entry {
    Entry {
        number: entry.number.trim().to_string(),
        place: title_case(&entry.place),
        district: title_case(&entry.district),
        state: entry.state.trim().to_string(),
    }
}
