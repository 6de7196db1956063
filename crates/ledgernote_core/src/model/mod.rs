//! Domain records held by the stores.
//!
//! # Responsibility
//! - Define note, transaction and user shapes with their web wire names.
//!
//! # Invariants
//! - Every stored record is identified by a store-assigned `RecordId`.

pub mod note;
pub mod record;
pub mod transaction;
pub mod user;
