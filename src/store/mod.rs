//! Packing list store
//!
//! [`ListStore`] owns the authoritative list of items. Every change is
//! written straight back through its [`PersistenceAdapter`] and announced to
//! subscribers; there is no batching.

pub mod stats;
pub mod view;

pub use stats::PackingStats;
pub use view::{sorted_view, SortOrder};

use crate::storage::{PersistenceAdapter, StorageError};
use crate::types::config::{PersistPolicy, StoreConfig};
use crate::types::item::{IdSource, Item, ItemId, ValidationError};
use std::collections::HashSet;
use thiserror::Error;

/// Errors returned by store mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Invalid item: {0}")]
    Validation(#[from] ValidationError),
    #[error("No unused item id left")]
    IdsExhausted,
}

/// The caller's answer to "delete all items?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Confirmation::Confirmed
        } else {
            Confirmation::Declined
        }
    }
}

/// Handle returned by [`ListStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&[Item])>;

/// In-memory packing list synchronized with key-value storage
pub struct ListStore<A: PersistenceAdapter = Box<dyn PersistenceAdapter>> {
    items: Vec<Item>,
    adapter: A,
    config: StoreConfig,
    ids: IdSource,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
    persistence_warning: Option<String>,
}

impl<A: PersistenceAdapter> ListStore<A> {
    /// Create a store, restoring whatever list was previously saved.
    ///
    /// Missing, unreadable or malformed data leaves the list empty.
    pub fn initialize(adapter: A, config: StoreConfig) -> Self {
        let items = load_items(&adapter, &config.storage_key);
        tracing::info!(
            "Packing list loaded with {} item(s) from '{}'",
            items.len(),
            config.storage_key
        );

        Self {
            ids: IdSource::after(&items),
            items,
            adapter,
            config,
            subscribers: Vec::new(),
            next_subscription: 0,
            persistence_warning: None,
        }
    }

    /// Current list, newest first
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Change the write policy; takes effect from the next change
    pub fn set_persist_policy(&mut self, policy: PersistPolicy) {
        self.config.persist_policy = policy;
    }

    /// Message of the last failed write, cleared by the next successful one
    pub fn persistence_warning(&self) -> Option<&str> {
        self.persistence_warning.as_deref()
    }

    /// Add an item at the top of the list
    pub fn add_item(
        &mut self,
        description: impl Into<String>,
        quantity: u32,
    ) -> Result<Item, StoreError> {
        let description = description.into();
        Item::validate_fields(&description, quantity)?;
        let id = self.ids.next_id().ok_or(StoreError::IdsExhausted)?;
        let item = Item::new(id, description, quantity)?;
        tracing::debug!("Adding item {} ({})", item.id, item.description);

        self.items.insert(0, item.clone());
        self.commit();
        Ok(item)
    }

    /// Remove the item with `id`. Returns false if there was none.
    pub fn delete_item(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            return false;
        }

        self.commit();
        true
    }

    /// Flip the packed flag of the item with `id`, keeping its position.
    /// Returns the new flag, or `None` if there was no such item.
    pub fn toggle_packed(&mut self, id: ItemId) -> Option<bool> {
        let slot = self.items.iter_mut().find(|item| item.id == id)?;
        *slot = slot.toggled();
        let packed = slot.packed;

        self.commit();
        Some(packed)
    }

    /// Empty the list once the caller has confirmed.
    /// Returns how many items were removed.
    pub fn clear_all(&mut self, confirmation: impl Into<Confirmation>) -> usize {
        if confirmation.into() == Confirmation::Declined {
            return 0;
        }

        let removed = self.items.len();
        self.items.clear();
        tracing::info!("Cleared {} item(s) from the packing list", removed);

        self.commit();
        removed
    }

    /// Like [`clear_all`](Self::clear_all), asking `prompt` with the current
    /// item count whether to go ahead.
    pub fn clear_all_with(&mut self, prompt: impl FnOnce(usize) -> bool) -> usize {
        let confirmed = prompt(self.items.len());
        self.clear_all(confirmed)
    }

    /// The list in display order; the stored order is unchanged
    pub fn sorted_view(&self, order: SortOrder) -> Vec<&Item> {
        sorted_view(&self.items, order)
    }

    pub fn stats(&self) -> PackingStats {
        PackingStats::from_items(&self.items)
    }

    /// Call `callback` with the new list after every change
    pub fn subscribe(&mut self, callback: impl FnMut(&[Item]) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    fn commit(&mut self) {
        self.persist();
        for (_, callback) in self.subscribers.iter_mut() {
            callback(&self.items);
        }
    }

    fn persist(&mut self) {
        if !self.config.persist_policy.should_write(self.items.len()) {
            tracing::debug!("Skipping write of empty packing list");
            return;
        }

        let result = serde_json::to_string(&self.items)
            .map_err(StorageError::from)
            .and_then(|blob| self.adapter.save(&self.config.storage_key, &blob));

        match result {
            Ok(()) => self.persistence_warning = None,
            Err(e) => {
                tracing::warn!("Failed to save packing list, keeping it in memory: {}", e);
                self.persistence_warning = Some(e.to_string());
            }
        }
    }
}

/// Read the saved list, treating every failure as "nothing saved"
fn load_items(adapter: &impl PersistenceAdapter, key: &str) -> Vec<Item> {
    let blob = match adapter.load(key) {
        Ok(Some(blob)) => blob,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!("Failed to read saved packing list, starting empty: {}", e);
            return Vec::new();
        }
    };

    let entries = match serde_json::from_str::<Option<Vec<serde_json::Value>>>(&blob) {
        Ok(entries) => entries.unwrap_or_default(),
        Err(e) => {
            tracing::warn!("Saved packing list is malformed, starting empty: {}", e);
            return Vec::new();
        }
    };

    // Entries are checked one by one so a single bad record only loses itself
    let count = entries.len();
    let items: Vec<Item> = entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<Item>(entry) {
            Ok(item) => match item.validate() {
                Ok(()) => Some(item),
                Err(e) => {
                    tracing::warn!("Dropping saved item {}: {}", item.id, e);
                    None
                }
            },
            Err(e) => {
                tracing::warn!("Dropping unreadable saved item: {}", e);
                None
            }
        })
        .collect();
    if items.len() != count {
        tracing::warn!("Kept {} of {} saved item(s)", items.len(), count);
    }

    let mut seen = HashSet::new();
    let count = items.len();
    let items: Vec<Item> = items.into_iter().filter(|item| seen.insert(item.id)).collect();
    if items.len() != count {
        tracing::warn!(
            "Dropped {} saved item(s) with duplicate ids",
            count - items.len()
        );
    }
    items
}
