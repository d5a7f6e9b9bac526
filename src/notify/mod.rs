//! Success/failure notifications for roster mutations.
//!
//! The roster reports the outcome of every mutating operation to a
//! [`Notifier`]. The presentation layer decides how to show them (toasts,
//! status lines); the library only ships sinks that log or re-emit.

mod log;
#[cfg(feature = "emitter")]
mod emitter;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::player::PlayerId;
use crate::validation::FieldErrors;

pub use log::LogNotifier;
#[cfg(feature = "emitter")]
pub use emitter::EmitterNotifier;

/// Outcome of a roster operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Notification {
    PlayerAdded { id: PlayerId, name: String },
    PlayerUpdated { id: PlayerId, name: String },
    PlayerRemoved { id: PlayerId },
    ValidationFailed { errors: FieldErrors },
    PersistenceFailed { message: String },
    RosterReset,
}

impl Notification {
    /// Stable event name, also used as the emitter event type.
    pub fn kind(&self) -> &'static str {
        match self {
            Notification::PlayerAdded { .. } => "PlayerAdded",
            Notification::PlayerUpdated { .. } => "PlayerUpdated",
            Notification::PlayerRemoved { .. } => "PlayerRemoved",
            Notification::ValidationFailed { .. } => "ValidationFailed",
            Notification::PersistenceFailed { .. } => "PersistenceFailed",
            Notification::RosterReset => "RosterReset",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Notification::ValidationFailed { .. } | Notification::PersistenceFailed { .. }
        )
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::PlayerAdded { name, .. } => write!(f, "Added {} to the roster", name),
            Notification::PlayerUpdated { name, .. } => write!(f, "Updated {}", name),
            Notification::PlayerRemoved { .. } => write!(f, "Player removed"),
            Notification::ValidationFailed { errors } => {
                write!(f, "Please fix the highlighted fields ({})", errors)
            }
            Notification::PersistenceFailed { message } => {
                write!(f, "Changes could not be saved: {}", message)
            }
            Notification::RosterReset => write!(f, "Roster reset"),
        }
    }
}

/// Sink for roster notifications.
pub trait Notifier: Send {
    fn notify(&mut self, notification: &Notification);
}
