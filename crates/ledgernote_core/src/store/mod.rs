//! In-memory stores for notes, transactions and the signed-in user.
//!
//! # Responsibility
//! - Own volatile application state for one session.
//! - Expose create/delete operations and observable record sequences.
//!
//! # Invariants
//! - Every mutation goes through a store method taking `&mut self`.
//! - Nothing here performs I/O; all data is lost when the session ends.

pub mod auth_store;
pub mod note_store;
pub mod record_store;
pub mod registry;
pub mod source;
pub mod transaction_store;

pub use record_store::{RecordStore, StoreEvent, SubscriptionId};
