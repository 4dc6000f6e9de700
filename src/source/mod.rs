//! Record sources: where a query's snapshot comes from.
//!
//! A source returns the complete, unfiltered collection as raw JSON
//! documents on every call. All filtering and pagination happens in-process
//! afterwards, so a source never sees query parameters beyond the requested
//! ordering.

pub mod file;
pub mod firestore;
pub mod memory;

pub use file::JsonFileSource;
pub use firestore::FirestoreSource;
pub use memory::MemorySource;

use serde_json::Value;

use crate::engine::normalize;
use crate::error::Result;

/// Ordering a query asks of its snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchOrder {
    /// Whatever order the store returns.
    #[default]
    Unordered,
    /// Ascending `itemId`.
    ByItemId,
}

/// Supplies raw transaction documents.
///
/// Implementations must be safe to share across threads; every call is
/// expected to return a fresh, complete snapshot or an error.
pub trait RecordSource: Send + Sync {
    /// Fetch every record in the collection.
    fn fetch(&self, order: FetchOrder) -> Result<Vec<Value>>;
}

impl<S: RecordSource + ?Sized> RecordSource for Box<S> {
    fn fetch(&self, order: FetchOrder) -> Result<Vec<Value>> {
        (**self).fetch(order)
    }
}

impl<S: RecordSource + ?Sized> RecordSource for std::sync::Arc<S> {
    fn fetch(&self, order: FetchOrder) -> Result<Vec<Value>> {
        (**self).fetch(order)
    }
}

/// Apply `order` to a snapshot held locally. The sort is stable, so records
/// sharing an id keep their relative order.
pub(crate) fn apply_order(mut records: Vec<Value>, order: FetchOrder) -> Vec<Value> {
    if order == FetchOrder::ByItemId {
        records.sort_by_cached_key(|raw| normalize(raw).item_id);
    }
    records
}
