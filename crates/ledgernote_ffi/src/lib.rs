//! Flutter bridge for LedgerNote core.

pub mod api;
