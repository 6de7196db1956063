//! Financial transaction domain model.
//!
//! # Invariants
//! - `amount` carries no sign convention; direction comes from `kind`.
//! - `date` is caller supplied and never checked.

use crate::error::{StoreError, StoreResult};
use crate::model::record::{Record, RecordId};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Money direction of one transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = StoreError;

    fn from_str(value: &str) -> StoreResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(StoreError::InvalidTransactionKind(value.to_string())),
        }
    }
}

/// One entry kept by the transaction store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: RecordId,
    pub amount: f64,
    pub category: String,
    /// Serialized as `type` to match the web schema.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub title: String,
    pub date: String,
    pub note: String,
}

impl Record for Transaction {
    const KIND: &'static str = "transaction";

    fn id(&self) -> RecordId {
        self.id
    }
}

/// Caller-supplied fields for a new transaction (everything except `id`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub amount: f64,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub title: String,
    pub date: String,
    pub note: String,
}

impl NewTransaction {
    pub(crate) fn into_transaction(self, id: RecordId) -> Transaction {
        Transaction {
            id,
            amount: self.amount,
            category: self.category,
            kind: self.kind,
            title: self.title,
            date: self.date,
            note: self.note,
        }
    }
}
