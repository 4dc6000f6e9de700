//! The pure query core.
//!
//! Every query runs the same pipeline over a fresh snapshot: raw documents
//! are normalized into [`Transaction`](crate::models::Transaction)s, narrowed
//! to a month, then handed to exactly one reducer. Nothing here performs I/O
//! or keeps state between calls.

pub mod category;
pub mod histogram;
pub mod month;
pub mod normalize;
pub mod paginate;
pub mod stats;

pub use category::categorize;
pub use histogram::{bucket_label, histogram};
pub use month::{filter_by_month, matches_month};
pub use normalize::{normalize, normalize_all};
pub use paginate::paginate;
pub use stats::summarize;

use std::collections::HashMap;

/// Counts keys while remembering the order each key was first seen.
#[derive(Debug, Default)]
pub(crate) struct FirstSeenCounter {
    index: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl FirstSeenCounter {
    pub(crate) fn add(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), 1));
            }
        }
    }

    pub(crate) fn into_entries(self) -> Vec<(String, u64)> {
        self.entries
    }
}
