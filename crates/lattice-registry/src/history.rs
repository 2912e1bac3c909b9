//! Retention modes and the audit history record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Retention mode for a [`Registry`](crate::Registry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetentionMode {
    /// Keep current state only.
    Clean,
    /// Additionally append every mutation to an unbounded audit log.
    ///
    /// The log grows without limit for the lifetime of the registry. This is
    /// a documented memory/time tradeoff for audit and debugging use, not a
    /// defect.
    History,
}

/// The kind of mutation recorded in a registry's history log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistryAction {
    /// An entry was inserted or overwritten.
    Register,
    /// An entry was removed.
    Unregister,
    /// An entry was marked protected.
    Protect,
    /// An entry's protection was lifted.
    Unprotect,
    /// An id was banned from future registration.
    Ban,
}

/// One record in a registry's append-only history log (History mode only).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// The mutation performed.
    pub action: RegistryAction,
    /// The entry id the mutation targeted.
    pub id: String,
    /// When the mutation occurred.
    pub timestamp: DateTime<Utc>,
}

impl HistoryRecord {
    pub(crate) fn new(action: RegistryAction, id: &str) -> Self {
        Self {
            action,
            id: id.to_string(),
            timestamp: Utc::now(),
        }
    }
}
