use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::player::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Turn an ascending comparison into one for this direction.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Active sort key and direction for the roster view.
///
/// Defaults to rating, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: Field,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: Field::Rating,
            direction: SortDirection::Descending,
        }
    }
}

impl SortState {
    pub fn new(field: Field, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Handle a sort request on `field`: the same field flips direction,
    /// a different field starts ascending.
    pub fn request(&mut self, field: Field) {
        if self.field == field {
            self.direction = self.direction.reversed();
        } else {
            self.field = field;
            self.direction = SortDirection::Ascending;
        }
    }
}
