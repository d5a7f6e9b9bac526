//! Player records, the editable draft, and the fixed position/year tables.
//!
//! A [`Player`] is what the roster persists. Its fields stay string-encoded so
//! the stored format matches what the form produced; the enumerated tables in
//! [`Position`] and [`Year`] are used to validate and rank those strings.

mod field;
mod name;
mod position;
mod year;

use serde::{Deserialize, Serialize};

pub use field::Field;
pub use name::capitalize_words;
pub use position::Position;
pub use year::Year;

/// Player identity. Derived from the creation timestamp in milliseconds.
pub type PlayerId = u64;

/// A stored roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: String,
    pub year: String,
    pub rating: String,
}

impl Player {
    /// Parsed rating, or `None` if the stored value is not an integer.
    pub fn rating_value(&self) -> Option<i64> {
        self.rating.trim().parse().ok()
    }

    /// Parsed year label, or `None` if the label is not in the rank table.
    pub fn year_label(&self) -> Option<Year> {
        Year::from_label(&self.year)
    }
}

/// Staging buffer for the add form and the edit session.
///
/// Holds raw field values exactly as typed; nothing is checked until the
/// draft is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerDraft {
    pub name: String,
    pub position: String,
    pub year: String,
    pub rating: String,
}

impl PlayerDraft {
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        year: impl Into<String>,
        rating: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            year: year.into(),
            rating: rating.into(),
        }
    }

    /// Copy a stored player's fields into a fresh draft.
    pub fn from_player(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            position: player.position.clone(),
            year: player.year.clone(),
            rating: player.rating.clone(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Position => &self.position,
            Field::Year => &self.year,
            Field::Rating => &self.rating,
        }
    }

    pub fn set(&mut self, field: Field, raw: impl Into<String>) {
        let raw = raw.into();
        match field {
            Field::Name => self.name = raw,
            Field::Position => self.position = raw,
            Field::Year => self.year = raw,
            Field::Rating => self.rating = raw,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    /// Build the record to store. The name is put into display form and the
    /// rating is trimmed; callers validate first.
    pub fn to_player(&self, id: PlayerId) -> Player {
        Player {
            id,
            name: capitalize_words(&self.name),
            position: self.position.clone(),
            year: self.year.clone(),
            rating: self.rating.trim().to_string(),
        }
    }
}
