mod config;
mod error;
mod notify;
mod ordering;
mod player;
mod profile;
mod roster;
mod store;
mod validation;

pub use config::{RosterConfig, StorageKeys};
pub use error::{ConfigError, RosterError};
#[cfg(feature = "emitter")]
pub use notify::EmitterNotifier;
pub use notify::{LogNotifier, Notification, Notifier};
pub use ordering::{compare, sort_players, SortDirection, SortState};
pub use player::{capitalize_words, Field, Player, PlayerDraft, PlayerId, Position, Year};
pub use profile::{reset, CoachProfile, ProfileStore};
pub use roster::{IdGenerator, Roster};
pub use store::{
    BackingStore, FileBackingStore, InMemoryBackingStore, PersistedCollection, StoreError,
};
pub use validation::{
    error_message, validate_field, validate_name, validate_player, validate_position,
    validate_rating, validate_year, FieldErrors, MAX_NAME_LEN, MAX_RATING, MIN_RATING,
};

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
