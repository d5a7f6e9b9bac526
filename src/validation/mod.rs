//! Field validators and the composite record check.
//!
//! Every validator is a pure predicate over the raw string the form holds.
//! [`validate_player`] runs all of them and reports each failing field with
//! a message suitable for inline display.

mod errors;

use crate::player::{capitalize_words, Field, PlayerDraft, Position, Year};

pub use errors::FieldErrors;

/// Longest accepted name, in characters, after trimming.
pub const MAX_NAME_LEN: usize = 100;

pub const MIN_RATING: i64 = 0;
pub const MAX_RATING: i64 = 99;

/// The limit applies to the typed value and to its stored display form,
/// since upper-casing can lengthen a name ('ß' becomes "SS").
pub fn validate_name(raw: &str) -> bool {
    let trimmed = raw.trim();
    !trimmed.is_empty()
        && trimmed.chars().count() <= MAX_NAME_LEN
        && capitalize_words(trimmed).chars().count() <= MAX_NAME_LEN
}

pub fn validate_position(raw: &str) -> bool {
    Position::from_code(raw).is_some()
}

pub fn validate_year(raw: &str) -> bool {
    Year::from_label(raw).is_some()
}

pub fn validate_rating(raw: &str) -> bool {
    matches!(raw.trim().parse::<i64>(), Ok(value) if (MIN_RATING..=MAX_RATING).contains(&value))
}

/// Validate a single field of a draft.
pub fn validate_field(field: Field, raw: &str) -> bool {
    match field {
        Field::Name => validate_name(raw),
        Field::Position => validate_position(raw),
        Field::Year => validate_year(raw),
        Field::Rating => validate_rating(raw),
    }
}

/// Message shown when `field` fails its validator.
pub fn error_message(field: Field) -> String {
    match field {
        Field::Name => format!(
            "Name is required and must be at most {} characters",
            MAX_NAME_LEN
        ),
        Field::Position => format!(
            "Position must be one of: {}",
            Position::codes().collect::<Vec<_>>().join(", ")
        ),
        Field::Year => format!(
            "Year must be one of: {}",
            Year::labels().collect::<Vec<_>>().join(", ")
        ),
        Field::Rating => format!(
            "Rating must be a whole number between {} and {}",
            MIN_RATING, MAX_RATING
        ),
    }
}

/// Run every field validator. An empty result means the draft is valid.
pub fn validate_player(draft: &PlayerDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in Field::ALL {
        if !validate_field(field, draft.get(field)) {
            errors.insert(field, error_message(field));
        }
    }
    errors
}
