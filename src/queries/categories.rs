use crate::engine::categorize;
use crate::error::Result;
use crate::models::CategoryDistribution;
use crate::params::MonthSelector;
use crate::source::{FetchOrder, RecordSource};

/// Query interface for the category distribution (pie chart data).
pub struct CategoryQuery<'a> {
    source: &'a dyn RecordSource,
}

impl<'a> CategoryQuery<'a> {
    pub fn new(source: &'a dyn RecordSource) -> Self {
        Self { source }
    }

    /// Record counts per non-empty category for `month`.
    pub fn get(&self, month: MonthSelector) -> Result<CategoryDistribution> {
        let records = super::load_month(self.source, FetchOrder::Unordered, month)?;
        Ok(categorize(&records))
    }
}
