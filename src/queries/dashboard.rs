//! Combined statistics, histogram and category query.

use crate::engine::{categorize, histogram, summarize};
use crate::error::Result;
use crate::models::Dashboard;
use crate::params::MonthSelector;
use crate::source::{FetchOrder, RecordSource};

/// Query interface for the three chart payloads of one month at once.
pub struct DashboardQuery<'a> {
    source: &'a dyn RecordSource,
}

impl<'a> DashboardQuery<'a> {
    pub fn new(source: &'a dyn RecordSource) -> Self {
        Self { source }
    }

    /// Statistics, price ranges and categories computed from a single
    /// snapshot, so the three parts always agree with each other.
    pub fn get(&self, month: MonthSelector) -> Result<Dashboard> {
        let records = super::load_month(self.source, FetchOrder::Unordered, month)?;
        Ok(Dashboard {
            statistics: summarize(&records),
            bar_chart: histogram(&records),
            pie_chart: categorize(&records),
        })
    }
}
