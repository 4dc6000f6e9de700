//! Query modules for the sales insights SDK.
//!
//! Each module provides a query struct that borrows the SDK's
//! [`RecordSource`](crate::source::RecordSource), fetches a fresh snapshot
//! per call and runs it through the [`engine`](crate::engine).

pub mod categories;
pub mod dashboard;
pub mod price_ranges;
pub mod statistics;
pub mod transactions;

pub use categories::CategoryQuery;
pub use dashboard::DashboardQuery;
pub use price_ranges::PriceRangeQuery;
pub use statistics::StatisticsQuery;
pub use transactions::TransactionQuery;

use crate::engine::{filter_by_month, normalize_all};
use crate::error::Result;
use crate::models::Transaction;
use crate::params::MonthSelector;
use crate::source::{FetchOrder, RecordSource};

/// Fetch a snapshot, normalize it and keep the records sold in `month`.
pub(crate) fn load_month(
    source: &dyn RecordSource,
    order: FetchOrder,
    month: MonthSelector,
) -> Result<Vec<Transaction>> {
    let raw = source.fetch(order)?;
    let snapshot_len = raw.len();
    let filtered = filter_by_month(normalize_all(&raw), month);
    tracing::debug!(
        "month {}: {} of {} records matched",
        month.number(),
        filtered.len(),
        snapshot_len
    );
    Ok(filtered)
}
