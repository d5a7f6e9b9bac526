use std::fmt;

use serde::{Deserialize, Serialize};

/// The four editable player fields. Also the set of sortable keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Position,
    Year,
    Rating,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Position, Field::Year, Field::Rating];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Position => "position",
            Field::Year => "year",
            Field::Rating => "rating",
        }
    }

    /// Parse the field name carried by form and sort-request events.
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
