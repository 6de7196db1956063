//! Identity and time sources injected into stores.
//!
//! # Responsibility
//! - Hide UUID generation and wall-clock reads behind small traits.
//! - Let tests drive stores with deterministic ids and timestamps.

use crate::model::record::RecordId;
use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

/// Produces candidate record identifiers.
///
/// Stores still reject ids they already issued, so implementations only need
/// to be unique in practice, not by proof.
pub trait IdGenerator: Send {
    fn next_id(&mut self) -> RecordId;
}

/// Produces the current instant as an ISO-8601 string.
pub trait Clock: Send {
    fn now_iso8601(&self) -> String;
}

/// Random UUID v4 ids.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> RecordId {
        Uuid::new_v4()
    }
}

/// System UTC clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_iso8601(&self) -> String {
        format_iso8601(Utc::now())
    }
}

/// Formats an instant the way the web client does: UTC, millisecond
/// precision, `Z` suffix.
pub fn format_iso8601(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
