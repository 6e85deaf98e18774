//! Sorted views
//!
//! Read-only orderings of the packing list. The stored order is never touched.

use crate::types::item::Item;
use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How the list is ordered for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Newest first, as stored
    #[default]
    Insertion,
    /// Alphabetical by description
    Description,
    /// Unpacked items first
    Packed,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [SortOrder::Insertion, SortOrder::Description, SortOrder::Packed];

    /// Stable identifier, used as the value of the sort selector
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Insertion => "input",
            SortOrder::Description => "description",
            SortOrder::Packed => "packed",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown sort order: {0}")]
pub struct UnknownSortOrder(pub String);

impl FromStr for SortOrder {
    type Err = UnknownSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "input" => Ok(SortOrder::Insertion),
            "description" | "desc" => Ok(SortOrder::Description),
            "packed" => Ok(SortOrder::Packed),
            other => Err(UnknownSortOrder(other.to_string())),
        }
    }
}

/// Order `items` for display without mutating them.
///
/// All orderings are stable: items that compare equal keep their stored
/// relative order.
pub fn sorted_view(items: &[Item], order: SortOrder) -> Vec<&Item> {
    let mut view: Vec<&Item> = items.iter().collect();
    match order {
        SortOrder::Insertion => {}
        SortOrder::Description => {
            let collator = description_collator();
            view.sort_by(|a, b| {
                compare_descriptions(collator.as_ref(), &a.description, &b.description)
            })
        }
        SortOrder::Packed => view.sort_by_key(|item| item.packed),
    }
    view
}

/// Root-locale Unicode collator, `None` if its data cannot be loaded
fn description_collator() -> Option<CollatorBorrowed<'static>> {
    match Collator::try_new(Default::default(), CollatorOptions::default()) {
        Ok(collator) => Some(collator),
        Err(e) => {
            tracing::warn!("Collation unavailable, sorting case-insensitively: {}", e);
            None
        }
    }
}

/// Collation order (accents and case fold in as in a dictionary), then the
/// raw text so equal-collating descriptions still have a fixed order.
fn compare_descriptions(collator: Option<&CollatorBorrowed<'static>>, a: &str, b: &str) -> Ordering {
    let primary = match collator {
        Some(collator) => collator.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()),
    };
    primary.then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, description: &str, packed: bool) -> Item {
        Item {
            id,
            description: description.to_string(),
            quantity: 1,
            packed,
        }
    }

    fn ids(view: &[&Item]) -> Vec<i64> {
        view.iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_insertion_is_identity() {
        let items = vec![item(3, "b", true), item(2, "a", false), item(1, "c", true)];
        assert_eq!(ids(&sorted_view(&items, SortOrder::Insertion)), vec![3, 2, 1]);
    }

    #[test]
    fn test_description_order() {
        let items = vec![
            item(1, "passport", false),
            item(2, "Charger", false),
            item(3, "adapter", false),
            item(4, "Sunscreen", false),
        ];
        let view = sorted_view(&items, SortOrder::Description);
        assert_eq!(ids(&view), vec![3, 2, 1, 4]);

        let collator = description_collator();
        for pair in view.windows(2) {
            assert_ne!(
                compare_descriptions(collator.as_ref(), &pair[0].description, &pair[1].description),
                Ordering::Greater
            );
        }
        // Stored order untouched
        assert_eq!(items[0].id, 1);
    }

    #[test]
    fn test_accented_descriptions_sort_with_their_base_letter() {
        let items = vec![
            item(1, "Zebra", false),
            item(2, "Éclair", false),
            item(3, "fork", false),
            item(4, "élastique", false),
            item(5, "Eau", false),
        ];
        let view = sorted_view(&items, SortOrder::Description);
        let names: Vec<&str> = view.iter().map(|item| item.description.as_str()).collect();
        assert_eq!(names, vec!["Eau", "Éclair", "élastique", "fork", "Zebra"]);
    }

    #[test]
    fn test_fallback_comparison_is_case_insensitive() {
        assert_eq!(compare_descriptions(None, "apple", "Banana"), Ordering::Less);
        assert_eq!(compare_descriptions(None, "Apple", "apple"), Ordering::Less);
        assert_eq!(compare_descriptions(None, "same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_packed_order_is_stable() {
        let items = vec![
            item(1, "a", true),
            item(2, "b", false),
            item(3, "c", true),
            item(4, "d", false),
        ];
        assert_eq!(ids(&sorted_view(&items, SortOrder::Packed)), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_sort_order_parsing() {
        for order in SortOrder::ALL {
            assert_eq!(order.as_str().parse::<SortOrder>(), Ok(order));
        }
        assert_eq!("desc".parse::<SortOrder>(), Ok(SortOrder::Description));
        assert!("size".parse::<SortOrder>().is_err());
    }
}
