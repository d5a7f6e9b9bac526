//! Roster configuration: storage keys and the default sort.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::ordering::SortState;

/// Backing-store keys for the three persisted values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub players: String,
    pub coach_name: String,
    pub school_name: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            players: "players".to_string(),
            coach_name: "coachName".to_string(),
            school_name: "schoolName".to_string(),
        }
    }
}

impl StorageKeys {
    pub fn all(&self) -> [&str; 3] {
        [
            self.players.as_str(),
            self.coach_name.as_str(),
            self.school_name.as_str(),
        ]
    }

    fn is_valid(&self) -> bool {
        let [a, b, c] = self.all();
        !a.is_empty() && !b.is_empty() && !c.is_empty() && a != b && a != c && b != c
    }
}

/// Roster configuration.
///
/// Every field has a default, so a config file only needs the overrides:
///
/// ```
/// use roster_rust::RosterConfig;
///
/// let config = RosterConfig::from_json_str(r#"{"keys": {"players": "varsity"}}"#).unwrap();
/// assert_eq!(config.keys.players, "varsity");
/// assert_eq!(config.keys.coach_name, "coachName");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub keys: StorageKeys,
    /// Sort the view returns to after every change to the roster.
    pub default_sort: SortState,
}

impl RosterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.keys.is_valid() {
            Ok(())
        } else {
            Err(ConfigError::InvalidKeys)
        }
    }
}
