use crate::engine::summarize;
use crate::error::Result;
use crate::models::SaleStatistics;
use crate::params::MonthSelector;
use crate::source::{FetchOrder, RecordSource};

/// Query interface for revenue and sold/unsold totals.
pub struct StatisticsQuery<'a> {
    source: &'a dyn RecordSource,
}

impl<'a> StatisticsQuery<'a> {
    pub fn new(source: &'a dyn RecordSource) -> Self {
        Self { source }
    }

    /// Sale statistics for `month`.
    pub fn get(&self, month: MonthSelector) -> Result<SaleStatistics> {
        let records = super::load_month(self.source, FetchOrder::Unordered, month)?;
        Ok(summarize(&records))
    }
}
