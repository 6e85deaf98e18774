//! Item types
//!
//! Defines the packing list entry and the validation applied when one is created.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of a packing list entry (creation timestamp in milliseconds)
pub type ItemId = i64;

/// A single entry on the packing list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique id, derived from the creation time
    pub id: ItemId,
    /// What to pack
    pub description: String,
    /// How many of it
    pub quantity: u32,
    /// Whether it is already in the bag
    pub packed: bool,
}

impl Item {
    /// Create a new, unpacked item after validating its fields
    pub fn new(
        id: ItemId,
        description: impl Into<String>,
        quantity: u32,
    ) -> Result<Self, ValidationError> {
        let description = description.into();
        Self::validate_fields(&description, quantity)?;

        Ok(Self {
            id,
            description,
            quantity,
            packed: false,
        })
    }

    /// Check the fields an item would be created with
    pub fn validate_fields(description: &str, quantity: u32) -> Result<(), ValidationError> {
        if description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if quantity == 0 {
            return Err(ValidationError::NonPositiveQuantity);
        }
        Ok(())
    }

    /// Check an existing item, e.g. one read back from storage
    pub fn validate(&self) -> Result<(), ValidationError> {
        Self::validate_fields(&self.description, self.quantity)
    }

    /// Copy of this item with the packed flag flipped
    pub fn toggled(&self) -> Self {
        Self {
            packed: !self.packed,
            ..self.clone()
        }
    }
}

/// Reasons an item is rejected at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Description must not be empty")]
    EmptyDescription,
    #[error("Quantity must be at least 1")]
    NonPositiveQuantity,
}

/// Hands out unique item ids based on the wall clock.
///
/// Ids follow the current time in milliseconds, but never repeat: two items
/// created in the same millisecond get consecutive ids. Once the highest id
/// is `i64::MAX`, new ids count down from the lowest one in use instead.
#[derive(Debug, Clone, Default)]
pub struct IdSource {
    last: Option<ItemId>,
    lowest: Option<ItemId>,
}

impl IdSource {
    /// Start after the ids already in use
    pub fn after<'a>(items: impl IntoIterator<Item = &'a Item>) -> Self {
        let mut source = Self::default();
        for item in items {
            source.record(item.id);
        }
        source
    }

    /// Next id using the system clock
    pub fn next_id(&mut self) -> Option<ItemId> {
        self.next_at(chrono::Utc::now().timestamp_millis())
    }

    /// Next id for a given clock reading, `None` only if every id is taken
    pub fn next_at(&mut self, now_millis: ItemId) -> Option<ItemId> {
        let id = match self.last {
            Some(last) if now_millis <= last => match last.checked_add(1) {
                Some(next) => next,
                None => self.lowest.unwrap_or(last).checked_sub(1)?,
            },
            _ => now_millis,
        };
        self.record(id);
        Some(id)
    }

    fn record(&mut self, id: ItemId) {
        self.last = Some(self.last.map_or(id, |last| last.max(id)));
        self.lowest = Some(self.lowest.map_or(id, |lowest| lowest.min(id)));
    }
}
