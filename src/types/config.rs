//! Configuration types
//!
//! Store configuration derived from the user's settings.

use crate::storage::settings::AppSettings;
use serde::{Deserialize, Serialize};

/// Storage key the packing list lives under
pub const DEFAULT_STORAGE_KEY: &str = "items";

/// When the store writes its contents back to storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PersistPolicy {
    /// Write after every change, including one that empties the list
    #[default]
    Always,
    /// Skip writes that would store an empty list, leaving the previous
    /// contents in place
    NonEmptyOnly,
}

impl PersistPolicy {
    /// Whether a list of `len` items should be written
    pub fn should_write(self, len: usize) -> bool {
        match self {
            PersistPolicy::Always => true,
            PersistPolicy::NonEmptyOnly => len > 0,
        }
    }
}

/// Store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Key under which items are persisted
    pub storage_key: String,
    /// Write policy
    pub persist_policy: PersistPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            persist_policy: PersistPolicy::Always,
        }
    }
}

impl From<&AppSettings> for StoreConfig {
    fn from(settings: &AppSettings) -> Self {
        Self {
            persist_policy: if settings.persist_cleared_list {
                PersistPolicy::Always
            } else {
                PersistPolicy::NonEmptyOnly
            },
            ..Self::default()
        }
    }
}
