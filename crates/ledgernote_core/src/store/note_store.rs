//! Note store.
//!
//! # Responsibility
//! - Create notes with store-assigned id and creation time.
//! - Delete notes by id with idempotent no-op semantics.
//!
//! # Invariants
//! - `created_at` always comes from the store clock.
//! - `edit_note` never mutates the sequence.

use crate::error::StoreResult;
use crate::model::note::{NewNote, Note};
use crate::model::record::RecordId;
use crate::store::record_store::{RecordStore, StoreEvent, SubscriptionId};
use crate::store::source::{Clock, IdGenerator, RandomIds, SystemClock};
use log::{error, info};

const SEED_TITLE: &str = "Need to add feature";
const SEED_CONTENT: &str = "1. rich text, 2. search, 3. feeling category 4. read more/less";

/// Ordered note collection.
#[derive(Debug)]
pub struct NoteStore {
    inner: RecordStore<Note>,
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore {
    /// Creates a store holding the single demo seed note.
    pub fn new() -> Self {
        Self::with_sources(Box::new(RandomIds), Box::new(SystemClock), true)
    }

    /// Creates a store with no records.
    pub fn empty() -> Self {
        Self::with_sources(Box::new(RandomIds), Box::new(SystemClock), false)
    }

    /// Creates a store over explicit id/time sources, optionally seeded.
    pub fn with_sources(ids: Box<dyn IdGenerator>, clock: Box<dyn Clock>, seed: bool) -> Self {
        let mut store = Self {
            inner: RecordStore::new(ids, clock),
        };
        if seed {
            if let Err(err) = store.create_note(NewNote::new(SEED_TITLE, SEED_CONTENT)) {
                error!("event=store_seed module=note status=error error={err}");
            }
        }
        store
    }

    /// Appends a note built from caller fields.
    ///
    /// Fields are stored verbatim. Returns the new note id.
    pub fn create_note(&mut self, new_note: NewNote) -> StoreResult<RecordId> {
        self.inner.insert_with(|id, clock| new_note.into_note(id, clock.now_iso8601()))
    }

    /// Deletes the note with `id`.
    ///
    /// Looks the note up first; when nothing matches the store is left
    /// unchanged. Returns whether a note was removed.
    pub fn delete_note(&mut self, id: RecordId) -> bool {
        self.inner.remove(id).is_some()
    }

    /// Declared edit entry point. Only records the requested id.
    pub fn edit_note(&mut self, id: RecordId) {
        info!(
            "event=note_edit module=note status=unimplemented id={} known={}",
            id,
            self.inner.contains(id)
        );
    }

    pub fn notes(&self) -> &[Note] {
        self.inner.records()
    }

    pub fn get(&self, id: RecordId) -> Option<&Note> {
        self.inner.get(id)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn subscribe(
        &mut self,
        listener: impl Fn(&StoreEvent<'_, Note>) + Send + 'static,
    ) -> SubscriptionId {
        self.inner.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        self.inner.unsubscribe(subscription)
    }
}
