//! Shared record identity contract.
//!
//! # Responsibility
//! - Define the identifier type carried by every stored record.
//! - Give stores one trait to read identity from any record shape.
//!
//! # Invariants
//! - A record's id is assigned once by its store and never changes.

use crate::error::{StoreError, StoreResult};
use uuid::Uuid;

/// Opaque identifier for notes, transactions and users.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = Uuid;

/// A record that can live in a [`RecordStore`](crate::store::RecordStore).
pub trait Record {
    /// Short store name used in diagnostics (`note`, `transaction`).
    const KIND: &'static str;

    /// Returns the store-assigned identifier.
    fn id(&self) -> RecordId;
}

/// Parses a textual record id coming from an outer boundary.
pub fn parse_record_id(value: &str) -> StoreResult<RecordId> {
    let trimmed = value.trim();
    Uuid::parse_str(trimmed).map_err(|_| StoreError::InvalidRecordId(trimmed.to_string()))
}
