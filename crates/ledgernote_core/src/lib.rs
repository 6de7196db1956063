//! Core state for LedgerNote.
//! Notes, finance transactions and the auth placeholder live here so the UI
//! shell only renders and forwards user intent.

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;

pub use config::StoreConfig;
pub use error::{ConfigError, StoreError, StoreResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{NewNote, Note};
pub use model::record::{parse_record_id, Record, RecordId};
pub use model::transaction::{NewTransaction, Transaction, TransactionKind};
pub use model::user::{Credentials, NewUser, User};
pub use store::auth_store::AuthStore;
pub use store::note_store::NoteStore;
pub use store::registry::{InitializedStores, StoreRegistry};
pub use store::source::{Clock, IdGenerator, RandomIds, SystemClock};
pub use store::transaction_store::{TransactionStore, TransactionTotals};
pub use store::{RecordStore, StoreEvent, SubscriptionId};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
