//! Durable key-value backing stores and the persisted collection built on top.
//!
//! ## Example
//!
//! ```
//! use roster_rust::{InMemoryBackingStore, PersistedCollection, Player, PlayerDraft};
//!
//! let backing = InMemoryBackingStore::new();
//! let player = PlayerDraft::new("bo jackson", "RB", "SR", "99").to_player(1);
//!
//! let mut players = PersistedCollection::<Player, _>::new(backing.clone(), "players");
//! players.write(vec![player.clone()]).unwrap();
//!
//! // A fresh collection over the same backing store sees the write.
//! let mut reopened = PersistedCollection::<Player, _>::new(backing, "players");
//! assert_eq!(reopened.read(), &[player]);
//! ```

mod backing;
mod file;
mod in_memory;
mod persisted;

use thiserror::Error;

pub use backing::BackingStore;
pub use file::FileBackingStore;
pub use in_memory::InMemoryBackingStore;
pub use persisted::PersistedCollection;

/// Error type for backing store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The write would exceed the store's capacity.
    #[error("quota exceeded writing {key}: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded {
        key: String,
        needed: usize,
        quota: usize,
    },
    /// The medium could not be read or written.
    #[error("backing store unavailable: {0}")]
    Unavailable(String),
    /// The medium was readable but its content is not what the store wrote.
    #[error("backing store content is corrupt: {0}")]
    Corrupt(String),
    /// A value could not be encoded for storage.
    #[error("serialization error: {0}")]
    Serialize(String),
}
