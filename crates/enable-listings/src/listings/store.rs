use chrono::{DateTime, Utc};

/// Owned snapshot of the most recent successful fetch for one collection.
///
/// The store is constructed per screen session and passed around explicitly;
/// it holds whole snapshots only. `load` swaps the previous contents in one
/// step, so a reader never observes a half-populated collection.
#[derive(Debug, Clone)]
pub struct ListingStore<T> {
    records: Vec<T>,
    loaded_at: Option<DateTime<Utc>>,
}

impl<T> Default for ListingStore<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            loaded_at: None,
        }
    }
}

impl<T> ListingStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held snapshot. The previous contents are discarded only
    /// once the replacement collection is fully in hand.
    pub fn load(&mut self, records: Vec<T>) {
        self.records = records;
        self.loaded_at = Some(Utc::now());
    }

    /// Full unfiltered snapshot, in fetch order. Empty until the first
    /// successful load.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// When the current snapshot was taken; `None` while never loaded.
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }
}
