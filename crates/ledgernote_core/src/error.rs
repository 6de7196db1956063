//! Core error types.
//!
//! # Responsibility
//! - Describe the few ways a store call can fail.
//! - Keep error text stable for FFI envelopes.
//!
//! # Invariants
//! - Deleting a missing record is not an error; see `NoteStore::delete_note`.

use crate::model::record::RecordId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error returned by store and model parsing operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The id generator only produced ids already issued by this store.
    IdExhausted {
        store: &'static str,
        attempts: usize,
        last: RecordId,
    },
    /// A record was built with an id other than the one the store allocated.
    IdMismatch {
        store: &'static str,
        expected: RecordId,
        actual: RecordId,
    },
    /// Transaction kind text was neither `income` nor `expense`.
    InvalidTransactionKind(String),
    /// Textual record id could not be parsed.
    InvalidRecordId(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdExhausted {
                store,
                attempts,
                last,
            } => write!(
                f,
                "{store} store found no fresh id after {attempts} attempts (last: {last})"
            ),
            Self::IdMismatch {
                store,
                expected,
                actual,
            } => write!(
                f,
                "{store} record carries id {actual} but the store allocated {expected}"
            ),
            Self::InvalidTransactionKind(value) => write!(
                f,
                "invalid transaction type `{value}`; expected income|expense"
            ),
            Self::InvalidRecordId(value) => write!(f, "invalid record id `{value}`"),
        }
    }
}

impl Error for StoreError {}

/// Error returned when store configuration cannot be loaded.
#[derive(Debug)]
pub enum ConfigError {
    Json(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid store config: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
