//! Transaction store.
//!
//! # Responsibility
//! - Append financial transactions with store-assigned ids.
//! - Provide income/expense totals over the current sequence.
//!
//! # Invariants
//! - Caller fields are stored verbatim, including negative amounts.
//! - There is no delete or edit path.

use crate::error::StoreResult;
use crate::model::record::RecordId;
use crate::model::transaction::{NewTransaction, Transaction, TransactionKind};
use crate::store::record_store::{RecordStore, StoreEvent, SubscriptionId};
use crate::store::source::{Clock, IdGenerator, RandomIds, SystemClock};
use log::error;

const SEED_AMOUNT: f64 = 10_000.0;
const SEED_CATEGORY: &str = "Features";
const SEED_TEXT: &str = "Hello, World!";

/// Sums per direction over a transaction sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransactionTotals {
    pub income: f64,
    pub expense: f64,
}

impl TransactionTotals {
    /// Income minus expense.
    pub fn balance(&self) -> f64 {
        self.income - self.expense
    }
}

/// Ordered transaction collection.
#[derive(Debug)]
pub struct TransactionStore {
    inner: RecordStore<Transaction>,
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionStore {
    /// Creates a store holding the single demo income entry.
    pub fn new() -> Self {
        Self::with_sources(Box::new(RandomIds), Box::new(SystemClock), true)
    }

    pub fn empty() -> Self {
        Self::with_sources(Box::new(RandomIds), Box::new(SystemClock), false)
    }

    pub fn with_sources(ids: Box<dyn IdGenerator>, clock: Box<dyn Clock>, seed: bool) -> Self {
        let mut store = Self {
            inner: RecordStore::new(ids, clock),
        };
        if seed {
            let seed_entry = NewTransaction {
                amount: SEED_AMOUNT,
                category: SEED_CATEGORY.to_string(),
                kind: TransactionKind::Income,
                title: SEED_TEXT.to_string(),
                date: store.inner.now(),
                note: SEED_TEXT.to_string(),
            };
            if let Err(err) = store.create_transaction(seed_entry) {
                error!("event=store_seed module=transaction status=error error={err}");
            }
        }
        store
    }

    /// Appends a transaction. Returns the new id.
    pub fn create_transaction(&mut self, new_transaction: NewTransaction) -> StoreResult<RecordId> {
        self.inner.insert_with(|id, _| new_transaction.into_transaction(id))
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.inner.records()
    }

    pub fn get(&self, id: RecordId) -> Option<&Transaction> {
        self.inner.get(id)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Adds up amounts by kind.
    ///
    /// Amounts are summed as stored, so a negative expense lowers the expense
    /// total.
    pub fn totals(&self) -> TransactionTotals {
        self.inner
            .records()
            .iter()
            .fold(TransactionTotals::default(), |mut totals, entry| {
                match entry.kind {
                    TransactionKind::Income => totals.income += entry.amount,
                    TransactionKind::Expense => totals.expense += entry.amount,
                }
                totals
            })
    }

    pub fn subscribe(
        &mut self,
        listener: impl Fn(&StoreEvent<'_, Transaction>) + Send + 'static,
    ) -> SubscriptionId {
        self.inner.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        self.inner.unsubscribe(subscription)
    }
}
