//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose store operations to Dart via FRB as plain sync functions.
//! - Own the single store registry for the running app session.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - All store access goes through one session mutex.

use ledgernote_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, parse_record_id,
    ping as ping_inner, Credentials, NewNote, NewTransaction, NewUser, Note, StoreConfig,
    StoreRegistry, Transaction, TransactionKind,
};
use log::warn;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

static SESSION: OnceLock<Mutex<StoreRegistry>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Note row returned to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: String,
}

impl From<&Note> for NoteItem {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id.to_string(),
            title: note.title.clone(),
            content: note.content.clone(),
            created_at: note.created_at.clone(),
        }
    }
}

/// Transaction row returned to the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionItem {
    pub id: String,
    pub amount: f64,
    pub category: String,
    /// `income|expense`.
    pub kind: String,
    pub title: String,
    pub date: String,
    pub note: String,
}

impl From<&Transaction> for TransactionItem {
    fn from(entry: &Transaction) -> Self {
        Self {
            id: entry.id.to_string(),
            amount: entry.amount,
            category: entry.category.clone(),
            kind: entry.kind.as_str().to_string(),
            title: entry.title.clone(),
            date: entry.date.clone(),
            note: entry.note.clone(),
        }
    }
}

/// Income/expense totals over the session transactions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransactionSummary {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Id of the record the action created or targeted.
    pub record_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, record_id: Option<String>) -> Self {
        Self {
            ok: true,
            record_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            record_id: None,
            message: message.into(),
        }
    }
}

/// Replaces the session registry with a fresh one.
///
/// Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn session_reset(config_json: Option<String>) -> String {
    let config = match config_json.as_deref().map(StoreConfig::from_json) {
        None => StoreConfig::default(),
        Some(Ok(config)) => config,
        Some(Err(err)) => return err.to_string(),
    };
    *session() = StoreRegistry::with_config(config);
    String::new()
}

/// Lists notes in insertion order.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_list() -> Vec<NoteItem> {
    session().notes().notes().iter().map(NoteItem::from).collect()
}

/// Creates one note from title/content.
#[flutter_rust_bridge::frb(sync)]
pub fn note_create(title: String, content: String) -> ActionResponse {
    match session().notes().create_note(NewNote::new(title, content)) {
        Ok(id) => ActionResponse::success("Note created.", Some(id.to_string())),
        Err(err) => ActionResponse::failure(format!("note_create failed: {err}")),
    }
}

/// Deletes one note by id.
///
/// Unknown or unparseable ids are a successful no-op, matching the store.
#[flutter_rust_bridge::frb(sync)]
pub fn note_delete(id: String) -> ActionResponse {
    let Ok(note_id) = parse_record_id(id.as_str()) else {
        warn!("event=ffi_note_delete module=ffi status=noop reason=unparseable_id");
        return ActionResponse::success("No matching note.", None);
    };

    if session().notes().delete_note(note_id) {
        ActionResponse::success("Note deleted.", Some(note_id.to_string()))
    } else {
        ActionResponse::success("No matching note.", Some(note_id.to_string()))
    }
}

/// Forwards an edit request. The store only records it.
///
/// Unparseable ids are logged and accepted, like `note_delete`.
#[flutter_rust_bridge::frb(sync)]
pub fn note_edit(id: String) -> ActionResponse {
    let Ok(note_id) = parse_record_id(id.as_str()) else {
        warn!("event=ffi_note_edit module=ffi status=noop reason=unparseable_id");
        return ActionResponse::success("Note editing is not available yet.", None);
    };

    session().notes().edit_note(note_id);
    ActionResponse::success("Note editing is not available yet.", Some(note_id.to_string()))
}

/// Lists transactions in insertion order.
#[flutter_rust_bridge::frb(sync)]
pub fn transactions_list() -> Vec<TransactionItem> {
    session()
        .transactions()
        .transactions()
        .iter()
        .map(TransactionItem::from)
        .collect()
}

/// Creates one transaction. `kind` must be `income` or `expense`.
#[flutter_rust_bridge::frb(sync)]
pub fn transaction_create(
    amount: f64,
    category: String,
    kind: String,
    title: String,
    date: String,
    note: String,
) -> ActionResponse {
    let kind = match kind.parse::<TransactionKind>() {
        Ok(kind) => kind,
        Err(err) => return ActionResponse::failure(err.to_string()),
    };
    let new_transaction = NewTransaction {
        amount,
        category,
        kind,
        title,
        date,
        note,
    };

    match session().transactions().create_transaction(new_transaction) {
        Ok(id) => ActionResponse::success("Transaction created.", Some(id.to_string())),
        Err(err) => ActionResponse::failure(format!("transaction_create failed: {err}")),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn transaction_summary() -> TransactionSummary {
    let totals = session().transactions().totals();
    TransactionSummary {
        income: totals.income,
        expense: totals.expense,
        balance: totals.balance(),
    }
}

/// Passes credentials to the auth store. No session is established.
#[flutter_rust_bridge::frb(sync)]
pub fn auth_login(email: String, password: String) -> ActionResponse {
    session().auth().login(Credentials::new(email, password));
    ActionResponse::success("Login is not available yet.", None)
}

/// Passes registration data to the auth store. No account is created.
#[flutter_rust_bridge::frb(sync)]
pub fn auth_register(
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    birth_date: String,
) -> ActionResponse {
    session().auth().register(NewUser {
        first_name,
        last_name,
        email,
        password,
        birth_date,
    });
    ActionResponse::success("Registration is not available yet.", None)
}

fn session() -> MutexGuard<'static, StoreRegistry> {
    SESSION
        .get_or_init(|| Mutex::new(StoreRegistry::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}
