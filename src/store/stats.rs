//! Packing progress

use crate::types::item::Item;

/// Aggregate progress over the whole list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackingStats {
    /// Nothing on the list yet
    Empty,
    Progress {
        total: usize,
        packed: usize,
        /// Share of packed items, rounded down
        percent: u8,
    },
}

impl PackingStats {
    pub fn from_items(items: &[Item]) -> Self {
        let total = items.len();
        if total == 0 {
            return PackingStats::Empty;
        }

        let packed = items.iter().filter(|item| item.packed).count();
        // packed <= total, so this stays within 0..=100
        let percent = (packed * 100 / total) as u8;

        PackingStats::Progress {
            total,
            packed,
            percent,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, PackingStats::Empty)
    }

    /// Everything on a non-empty list is packed
    pub fn is_complete(&self) -> bool {
        matches!(self, PackingStats::Progress { percent: 100, .. })
    }

    /// `(total, packed, percent)`, `None` for an empty list
    pub fn counts(&self) -> Option<(usize, usize, u8)> {
        match *self {
            PackingStats::Empty => None,
            PackingStats::Progress {
                total,
                packed,
                percent,
            } => Some((total, packed, percent)),
        }
    }
}
