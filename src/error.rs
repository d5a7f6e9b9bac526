use thiserror::Error;

use crate::player::PlayerId;
use crate::store::StoreError;
use crate::validation::FieldErrors;

/// Errors surfaced by roster operations.
///
/// None of these are fatal: validation failures abort before any mutation,
/// and persistence failures leave the in-memory roster usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("validation failed: {0}")]
    Validation(FieldErrors),
    #[error("failed to persist roster: {0}")]
    Persistence(#[from] StoreError),
    #[error("player not found: {0}")]
    NotFound(PlayerId),
    #[error("no edit session is active")]
    NotEditing,
    #[error("player {0} is being edited; save or cancel the edit first")]
    EditInProgress(PlayerId),
}

impl RosterError {
    /// Every roster error can be recovered from by correcting input or
    /// retrying; kept explicit so new variants must decide.
    pub fn is_recoverable(&self) -> bool {
        match self {
            RosterError::Validation(_) => true,
            RosterError::Persistence(_) => true,
            RosterError::NotFound(_) => true,
            RosterError::NotEditing => true,
            RosterError::EditInProgress(_) => true,
        }
    }

    /// Field errors, if this is a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            RosterError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Error loading a [`RosterConfig`](crate::RosterConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid roster config: {0}")]
    Parse(String),
    #[error("storage keys must be distinct and non-empty")]
    InvalidKeys,
}
