//! Paginated transaction listing.

use crate::engine::paginate;
use crate::error::Result;
use crate::models::{Transaction, TransactionPage};
use crate::params::{ListParams, MonthSelector};
use crate::source::{FetchOrder, RecordSource};

// ---------------------------------------------------------------------------
// TransactionQuery
// ---------------------------------------------------------------------------

/// Query interface for listing transactions page by page.
///
/// Listings ask the source for records in `itemId` order so that page
/// boundaries are stable between calls.
pub struct TransactionQuery<'a> {
    source: &'a dyn RecordSource,
}

impl<'a> TransactionQuery<'a> {
    /// Create a new `TransactionQuery` bound to the given source.
    pub fn new(source: &'a dyn RecordSource) -> Self {
        Self { source }
    }

    /// One page of the month-filtered listing plus the total page count.
    pub fn list(&self, params: &ListParams) -> Result<TransactionPage> {
        let records = super::load_month(self.source, FetchOrder::ByItemId, params.month)?;
        Ok(paginate(records, params.page, params.limit))
    }

    /// Every transaction sold in `month`, unpaginated.
    pub fn all(&self, month: MonthSelector) -> Result<Vec<Transaction>> {
        super::load_month(self.source, FetchOrder::ByItemId, month)
    }
}
