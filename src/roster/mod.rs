//! Roster - the record lifecycle controller.
//!
//! [`Roster`] owns the persisted player collection, the draft being typed,
//! the single edit session, the inline error map and the sort state. Every
//! mutation validates first, then commits the whole collection through the
//! [`PersistedCollection`], then reports its outcome to the [`Notifier`].
//!
//! ## Example
//!
//! ```
//! use roster_rust::{Field, InMemoryBackingStore, Roster, RosterConfig};
//!
//! let mut roster = Roster::new(InMemoryBackingStore::new(), RosterConfig::default());
//! roster.set_field(Field::Name, "bryce young");
//! roster.set_field(Field::Position, "QB");
//! roster.set_field(Field::Year, "JR");
//! roster.set_field(Field::Rating, "94");
//!
//! let added = roster.add().unwrap();
//! assert_eq!(added.name, "Bryce Young");
//! assert_eq!(roster.players().len(), 1);
//! ```

mod id;

use tracing::{debug, info};

use crate::config::{RosterConfig, StorageKeys};
use crate::error::RosterError;
use crate::notify::{LogNotifier, Notification, Notifier};
use crate::ordering::{sort_players, SortState};
use crate::player::{Field, Player, PlayerDraft, PlayerId};
use crate::profile;
use crate::store::{BackingStore, PersistedCollection, StoreError};
use crate::validation::{validate_player, FieldErrors};

pub use id::IdGenerator;

pub struct Roster<B> {
    players: PersistedCollection<Player, B>,
    keys: StorageKeys,
    draft: PlayerDraft,
    editing_id: Option<PlayerId>,
    errors: FieldErrors,
    sort: SortState,
    default_sort: SortState,
    ids: IdGenerator,
    notifier: Box<dyn Notifier>,
}

impl<B: BackingStore> Roster<B> {
    pub fn new(backing: B, config: RosterConfig) -> Self {
        Self {
            players: PersistedCollection::new(backing, config.keys.players.clone()),
            keys: config.keys,
            draft: PlayerDraft::default(),
            editing_id: None,
            errors: FieldErrors::new(),
            sort: config.default_sort,
            default_sort: config.default_sort,
            ids: IdGenerator::new(),
            notifier: Box::new(LogNotifier::new()),
        }
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn with_id_generator(mut self, ids: IdGenerator) -> Self {
        self.ids = ids;
        self
    }

    pub fn backing(&self) -> &B {
        self.players.backing()
    }

    // ------------------------------------------------------------------
    // Presentation-facing state
    // ------------------------------------------------------------------

    /// The roster in the active sort order.
    pub fn players(&mut self) -> Vec<Player> {
        let sort = self.sort;
        sort_players(self.players.read(), sort)
    }

    /// The roster in stored (insertion) order.
    pub fn stored(&mut self) -> &[Player] {
        self.players.read()
    }

    pub fn get(&mut self, id: PlayerId) -> Option<Player> {
        self.players.read().iter().find(|p| p.id == id).cloned()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn draft(&self) -> &PlayerDraft {
        &self.draft
    }

    pub fn editing_id(&self) -> Option<PlayerId> {
        self.editing_id
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    // ------------------------------------------------------------------
    // Input events
    // ------------------------------------------------------------------

    /// Update one draft field with the raw value from the form.
    pub fn set_field(&mut self, field: Field, raw: impl Into<String>) {
        self.draft.set(field, raw);
    }

    /// Replace the whole draft.
    pub fn set_draft(&mut self, draft: PlayerDraft) {
        self.draft = draft;
    }

    /// Sort request from a column header.
    pub fn request_sort(&mut self, field: Field) {
        self.sort.request(field);
        debug!(field = %self.sort.field, direction = ?self.sort.direction, "Sort requested");
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Validate the draft and append it as a new player.
    ///
    /// On a persistence failure the player is still part of the in-memory
    /// roster; the error reports that it was not made durable.
    pub fn add(&mut self) -> Result<Player, RosterError> {
        if let Some(id) = self.editing_id {
            return Err(RosterError::EditInProgress(id));
        }
        self.check_draft()?;

        let mut next = self.players.read().to_vec();
        let id = self.ids.next(next.iter().map(|p| p.id));
        let player = self.draft.to_player(id);
        next.push(player.clone());

        self.draft = PlayerDraft::default();
        self.errors.clear();
        info!(id, name = %player.name, "Adding player");

        self.commit(next)?;
        self.notify(Notification::PlayerAdded {
            id,
            name: player.name.clone(),
        });
        Ok(player)
    }

    /// Open an edit session on `id`, copying its fields into the draft.
    ///
    /// Starting an edit while another is open replaces that session.
    pub fn start_edit(&mut self, id: PlayerId) -> Result<(), RosterError> {
        let player = self.get(id).ok_or(RosterError::NotFound(id))?;

        if let Some(previous) = self.editing_id.filter(|prev| *prev != id) {
            debug!(previous, id, "Replacing open edit session");
        }
        self.editing_id = Some(id);
        self.draft = PlayerDraft::from_player(&player);
        self.errors.clear();
        Ok(())
    }

    /// Validate the draft and replace the player being edited.
    ///
    /// On validation failure the session stays open.
    pub fn save_edit(&mut self) -> Result<Player, RosterError> {
        let id = self.editing_id.ok_or(RosterError::NotEditing)?;
        self.check_draft()?;

        let mut next = self.players.read().to_vec();
        let Some(slot) = next.iter_mut().find(|p| p.id == id) else {
            debug!(id, "Edited player no longer exists; closing session");
            self.close_session();
            return Err(RosterError::NotFound(id));
        };
        let player = self.draft.to_player(id);
        *slot = player.clone();

        self.close_session();
        info!(id, name = %player.name, "Updating player");

        self.commit(next)?;
        self.notify(Notification::PlayerUpdated {
            id,
            name: player.name.clone(),
        });
        Ok(player)
    }

    /// Close the edit session without saving.
    pub fn cancel_edit(&mut self) {
        if let Some(id) = self.editing_id {
            debug!(id, "Cancelling edit");
        }
        self.close_session();
    }

    /// Remove the player with `id`. Returns whether a player was removed;
    /// an unknown id changes nothing.
    ///
    /// Removing the player being edited also closes the edit session.
    pub fn remove(&mut self, id: PlayerId) -> Result<bool, RosterError> {
        let current = self.players.read();
        if !current.iter().any(|p| p.id == id) {
            debug!(id, "Remove of unknown player ignored");
            return Ok(false);
        }
        let next: Vec<Player> = current.iter().filter(|p| p.id != id).cloned().collect();

        if self.editing_id == Some(id) {
            debug!(id, "Removed player was being edited; closing session");
            self.close_session();
        }
        info!(id, "Removing player");

        self.commit(next)?;
        self.notify(Notification::PlayerRemoved { id });
        Ok(true)
    }

    /// Clear the roster and coach profile keys from the backing store and
    /// start over with an empty roster.
    pub fn reset(&mut self) -> Result<(), RosterError> {
        self.close_session();
        self.sort = self.default_sort;
        let result = profile::reset(self.players.backing(), &self.keys);
        self.players.reload();

        match result {
            Ok(()) => {
                self.notify(Notification::RosterReset);
                Ok(())
            }
            Err(err) => Err(self.persistence_failed(err)),
        }
    }

    /// Drop the in-memory view and load it again from the backing store,
    /// for when another actor changed the store.
    pub fn reload(&mut self) {
        self.players.reload();
        self.sort = self.default_sort;
        if let Some(id) = self.editing_id {
            if self.get(id).is_none() {
                debug!(id, "Edited player vanished on reload; closing session");
                self.close_session();
            }
        }
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn check_draft(&mut self) -> Result<(), RosterError> {
        let errors = validate_player(&self.draft);
        if errors.is_empty() {
            return Ok(());
        }

        debug!(fields = %errors, "Draft rejected");
        self.errors = errors.clone();
        self.notify(Notification::ValidationFailed {
            errors: errors.clone(),
        });
        Err(RosterError::Validation(errors))
    }

    /// Write the collection and return the view to the default sort. Every
    /// change to the collection resets the sort, even a failed persist,
    /// because the in-memory roster changed either way.
    fn commit(&mut self, next: Vec<Player>) -> Result<(), RosterError> {
        let result = self.players.write(next);
        self.sort = self.default_sort;
        result.map_err(|err| self.persistence_failed(err))
    }

    fn persistence_failed(&mut self, err: StoreError) -> RosterError {
        self.notify(Notification::PersistenceFailed {
            message: err.to_string(),
        });
        RosterError::Persistence(err)
    }

    fn close_session(&mut self) {
        self.editing_id = None;
        self.draft = PlayerDraft::default();
        self.errors.clear();
    }

    fn notify(&mut self, notification: Notification) {
        self.notifier.notify(&notification);
    }
}
