use crate::engine::histogram;
use crate::error::Result;
use crate::models::PriceHistogram;
use crate::params::MonthSelector;
use crate::source::{FetchOrder, RecordSource};

/// Query interface for the price-range histogram (bar chart data).
pub struct PriceRangeQuery<'a> {
    source: &'a dyn RecordSource,
}

impl<'a> PriceRangeQuery<'a> {
    pub fn new(source: &'a dyn RecordSource) -> Self {
        Self { source }
    }

    /// Record counts per 100-unit price range for `month`.
    ///
    /// Ranges come back in first-occurrence order; use
    /// [`PriceHistogram::sorted_by_range_start`] for ascending order.
    pub fn get(&self, month: MonthSelector) -> Result<PriceHistogram> {
        let records = super::load_month(self.source, FetchOrder::Unordered, month)?;
        Ok(histogram(&records))
    }
}
