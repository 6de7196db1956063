//! Generic ordered, observable record store.
//!
//! # Responsibility
//! - Own one ordered sequence of records and the ids it has issued.
//! - Notify subscribed listeners after every mutation.
//!
//! # Invariants
//! - Ids are unique within the sequence and never issued twice per store.
//! - Insertion order is preserved; removal keeps the order of the rest.
//! - Listeners run after the sequence already reflects the change.
//! - Removing an unknown id mutates nothing and notifies nobody.

use crate::error::{StoreError, StoreResult};
use crate::model::record::{Record, RecordId};
use crate::store::source::{Clock, IdGenerator, RandomIds, SystemClock};
use log::{debug, warn};
use std::collections::HashSet;
use std::fmt::{Debug, Formatter};

const MAX_ID_ATTEMPTS: usize = 8;

/// Handle returned by [`RecordStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Mutation notification delivered to listeners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StoreEvent<'a, R> {
    /// Record was appended to the end of the sequence.
    Created(&'a R),
    /// Record was removed from the sequence.
    Deleted(&'a R),
}

impl<R: Record> StoreEvent<'_, R> {
    /// Id of the record this event is about.
    pub fn record_id(&self) -> RecordId {
        match self {
            Self::Created(record) | Self::Deleted(record) => record.id(),
        }
    }
}

type Listener<R> = Box<dyn Fn(&StoreEvent<'_, R>) + Send>;

/// Ordered in-memory record container.
pub struct RecordStore<R: Record> {
    records: Vec<R>,
    issued: HashSet<RecordId>,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
    listeners: Vec<(SubscriptionId, Listener<R>)>,
    next_subscription: u64,
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new(Box::new(RandomIds), Box::new(SystemClock))
    }
}

impl<R: Record> RecordStore<R> {
    /// Creates an empty store over the given id and time sources.
    pub fn new(ids: Box<dyn IdGenerator>, clock: Box<dyn Clock>) -> Self {
        Self {
            records: Vec::new(),
            issued: HashSet::new(),
            ids,
            clock,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Live view of the sequence in insertion order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Current instant from the injected clock.
    pub fn now(&self) -> String {
        self.clock.now_iso8601()
    }

    /// Allocates a fresh id, builds the record and appends it.
    ///
    /// `build` receives the new id and the store clock and must put that id
    /// on the record.
    ///
    /// # Errors
    /// - `StoreError::IdExhausted` when the generator keeps repeating ids
    ///   this store already issued.
    /// - `StoreError::IdMismatch` when the built record carries another id.
    ///   Nothing is appended; the allocated id stays burned.
    pub fn insert_with(
        &mut self,
        build: impl FnOnce(RecordId, &dyn Clock) -> R,
    ) -> StoreResult<RecordId> {
        let id = self.allocate_id()?;
        let record = build(id, self.clock.as_ref());
        if record.id() != id {
            warn!(
                "event=record_create module=store status=rejected kind={} reason=id_mismatch",
                R::KIND
            );
            return Err(StoreError::IdMismatch {
                store: R::KIND,
                expected: id,
                actual: record.id(),
            });
        }
        self.records.push(record);

        debug!(
            "event=record_create module=store status=ok kind={} id={} len={}",
            R::KIND,
            id,
            self.records.len()
        );
        if let Some(created) = self.records.last() {
            self.notify(&StoreEvent::Created(created));
        }
        Ok(id)
    }

    /// Removes the record with `id`, returning it.
    ///
    /// Returns `None` and leaves the store untouched when nothing matches.
    pub fn remove(&mut self, id: RecordId) -> Option<R> {
        let Some(position) = self.records.iter().position(|record| record.id() == id) else {
            debug!(
                "event=record_delete module=store status=noop kind={} id={}",
                R::KIND,
                id
            );
            return None;
        };

        let removed = self.records.remove(position);
        debug!(
            "event=record_delete module=store status=ok kind={} id={} len={}",
            R::KIND,
            id,
            self.records.len()
        );
        self.notify(&StoreEvent::Deleted(&removed));
        Some(removed)
    }

    /// Registers a listener for future mutations.
    pub fn subscribe(
        &mut self,
        listener: impl Fn(&StoreEvent<'_, R>) + Send + 'static,
    ) -> SubscriptionId {
        let subscription = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((subscription, Box::new(listener)));
        subscription
    }

    /// Removes a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn allocate_id(&mut self) -> StoreResult<RecordId> {
        let mut last = self.ids.next_id();
        for attempt in 1..=MAX_ID_ATTEMPTS {
            if self.issued.insert(last) {
                return Ok(last);
            }
            warn!(
                "event=id_collision module=store status=retry kind={} attempt={}",
                R::KIND,
                attempt
            );
            if attempt < MAX_ID_ATTEMPTS {
                last = self.ids.next_id();
            }
        }

        Err(StoreError::IdExhausted {
            store: R::KIND,
            attempts: MAX_ID_ATTEMPTS,
            last,
        })
    }

    fn notify(&self, event: &StoreEvent<'_, R>) {
        for (_, listener) in &self.listeners {
            listener(event);
        }
    }
}

impl<R: Record> Debug for RecordStore<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("kind", &R::KIND)
            .field("len", &self.records.len())
            .field("issued", &self.issued.len())
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{RecordStore, StoreEvent};
    use crate::error::StoreError;
    use crate::model::record::{Record, RecordId};
    use crate::store::source::{Clock, IdGenerator};
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: RecordId,
        label: String,
    }

    impl Record for Item {
        const KIND: &'static str = "item";

        fn id(&self) -> RecordId {
            self.id
        }
    }

    struct FixedIds(Vec<u128>);

    impl IdGenerator for FixedIds {
        fn next_id(&mut self) -> RecordId {
            Uuid::from_u128(if self.0.is_empty() { 0 } else { self.0.remove(0) })
        }
    }

    struct FrozenClock;

    impl Clock for FrozenClock {
        fn now_iso8601(&self) -> String {
            "2024-01-01T00:00:00.000Z".to_string()
        }
    }

    fn store_with_ids(ids: Vec<u128>) -> RecordStore<Item> {
        RecordStore::new(Box::new(FixedIds(ids)), Box::new(FrozenClock))
    }

    fn push(store: &mut RecordStore<Item>, label: &str) -> RecordId {
        store
            .insert_with(|id, _| Item {
                id,
                label: label.to_string(),
            })
            .unwrap()
    }

    #[test]
    fn insert_appends_in_order() {
        let mut store = store_with_ids(vec![1, 2, 3]);
        push(&mut store, "a");
        push(&mut store, "b");
        push(&mut store, "c");

        let labels: Vec<_> = store.records().iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["a", "b", "c"]);
    }

    #[test]
    fn repeated_ids_are_skipped_until_fresh() {
        let mut store = store_with_ids(vec![7, 7, 7, 8]);
        let first = push(&mut store, "a");
        let second = push(&mut store, "b");
        assert_eq!(first, Uuid::from_u128(7));
        assert_eq!(second, Uuid::from_u128(8));
    }

    #[test]
    fn removed_ids_are_never_reissued() {
        let mut store = store_with_ids(vec![1, 1, 2]);
        let first = push(&mut store, "a");
        store.remove(first).unwrap();

        let second = push(&mut store, "b");
        assert_ne!(first, second);
    }

    #[test]
    fn generator_stuck_on_one_value_exhausts() {
        let mut store = store_with_ids(vec![5; 16]);
        push(&mut store, "a");
        let err = store
            .insert_with(|id, _| Item {
                id,
                label: "b".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::IdExhausted { store: "item", .. }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn record_with_foreign_id_is_rejected() {
        let mut store = store_with_ids(vec![1, 2, 3]);
        let foreign = Uuid::from_u128(99);
        let build = |_: RecordId| Item {
            id: foreign,
            label: "forged".to_string(),
        };

        let first = store.insert_with(|id, _| build(id)).unwrap_err();
        assert_eq!(
            first,
            StoreError::IdMismatch {
                store: "item",
                expected: Uuid::from_u128(1),
                actual: foreign,
            }
        );
        let second = store.insert_with(|id, _| build(id)).unwrap_err();
        assert!(matches!(second, StoreError::IdMismatch { .. }));
        assert!(store.is_empty());

        let id = push(&mut store, "real");
        assert_eq!(id, Uuid::from_u128(3));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn listeners_see_created_and_deleted_events() {
        let mut store = store_with_ids(vec![1, 2]);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |event| {
            let tag = match event {
                StoreEvent::Created(item) => format!("+{}", item.label),
                StoreEvent::Deleted(item) => format!("-{}", item.label),
            };
            sink.lock().unwrap().push(tag);
        });

        let a = push(&mut store, "a");
        push(&mut store, "b");
        store.remove(a);
        store.remove(Uuid::from_u128(99));

        assert_eq!(*seen.lock().unwrap(), ["+a", "+b", "-a"]);
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let mut store = store_with_ids(vec![1]);
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);
        let subscription = store.subscribe(move |_| *counter.lock().unwrap() += 1);

        assert!(store.unsubscribe(subscription));
        assert!(!store.unsubscribe(subscription));
        push(&mut store, "a");
        assert_eq!(*calls.lock().unwrap(), 0);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn remove_keeps_relative_order() {
        let mut store = store_with_ids(vec![1, 2, 3, 4]);
        push(&mut store, "a");
        let b = push(&mut store, "b");
        push(&mut store, "c");
        push(&mut store, "d");

        let removed = store.remove(b).unwrap();
        assert_eq!(removed.label, "b");
        let labels: Vec<_> = store.records().iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["a", "c", "d"]);
    }
}
