//! Coach profile and reset.
//!
//! The coach name and school name live beside the roster in the same backing
//! store, each as a plain string under its own key.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::StorageKeys;
use crate::store::{BackingStore, StoreError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachProfile {
    pub coach_name: String,
    pub school_name: String,
}

/// Reads and writes the [`CoachProfile`] keys. Missing keys read as empty.
pub struct ProfileStore<B> {
    backing: B,
    keys: StorageKeys,
}

impl<B: BackingStore> ProfileStore<B> {
    pub fn new(backing: B, keys: StorageKeys) -> Self {
        Self { backing, keys }
    }

    pub fn load(&self) -> Result<CoachProfile, StoreError> {
        Ok(CoachProfile {
            coach_name: self.backing.get(&self.keys.coach_name)?.unwrap_or_default(),
            school_name: self.backing.get(&self.keys.school_name)?.unwrap_or_default(),
        })
    }

    pub fn save(&self, profile: &CoachProfile) -> Result<(), StoreError> {
        self.set_coach_name(&profile.coach_name)?;
        self.set_school_name(&profile.school_name)
    }

    pub fn set_coach_name(&self, name: &str) -> Result<(), StoreError> {
        debug!(key = %self.keys.coach_name, "Saving coach name");
        self.backing.set(&self.keys.coach_name, name)
    }

    pub fn set_school_name(&self, name: &str) -> Result<(), StoreError> {
        debug!(key = %self.keys.school_name, "Saving school name");
        self.backing.set(&self.keys.school_name, name)
    }
}

/// Remove every roster key from `backing`.
///
/// Attempts all keys even if one fails and returns the first failure.
pub fn reset<B: BackingStore + ?Sized>(backing: &B, keys: &StorageKeys) -> Result<(), StoreError> {
    let mut first_err = None;
    for key in keys.all() {
        if let Err(err) = backing.remove(key) {
            if first_err.is_none() {
                first_err = Some(err);
            }
        }
    }

    match first_err {
        Some(err) => Err(err),
        None => {
            info!("Cleared roster storage");
            Ok(())
        }
    }
}
