//! Sorted views over the roster.
//!
//! Each [`Field`] has its own comparator: names and positions compare as
//! strings, years by their rank in the year table, ratings numerically.
//! Values that cannot be ranked or parsed sort after every value that can,
//! so a comparison never fails.

mod state;

use std::cmp::Ordering;

use crate::player::{Field, Player};

pub use state::{SortDirection, SortState};

/// Compare two players on one field, ascending.
pub fn compare(a: &Player, b: &Player, field: Field) -> Ordering {
    match field {
        Field::Name => a.name.cmp(&b.name),
        Field::Position => a.position.cmp(&b.position),
        Field::Year => known_first(
            a.year_label().map(|y| y.rank()),
            b.year_label().map(|y| y.rank()),
        ),
        Field::Rating => known_first(a.rating_value(), b.rating_value()),
    }
}

/// Known values in natural order, then all unknown values as one tie group.
fn known_first<K: Ord>(a: Option<K>, b: Option<K>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Return a sorted copy of `players`. The input is left untouched.
pub fn sort_players(players: &[Player], state: SortState) -> Vec<Player> {
    let mut sorted = players.to_vec();
    sorted.sort_by(|a, b| state.direction.apply(compare(a, b, state.field)));
    sorted
}
