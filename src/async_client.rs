//! Async wrapper around [`SalesInsights`] for use in async runtimes (Tokio, etc.).
//!
//! Runs every query on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], since record sources do blocking I/O.
//!
//! # Example
//!
//! ```no_run
//! use sales_insights_sdk::{AsyncSalesInsights, MonthSelector, SalesInsights, SourceConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = SalesInsights::builder()
//!         .firestore(SourceConfig::new("my-project"))
//!         .build()
//!         .unwrap();
//!     let sdk = AsyncSalesInsights::new(sdk);
//!
//!     let dashboard = sdk.dashboard(MonthSelector::Month(3)).await.unwrap();
//! }
//! ```

use std::sync::Arc;

use crate::error::{InsightsError, Result};
use crate::models::{
    CategoryDistribution, Dashboard, PriceHistogram, SaleStatistics, TransactionPage,
};
use crate::params::{ListParams, MonthSelector};
use crate::SalesInsights;

/// Async wrapper around [`SalesInsights`].
///
/// Cheap to clone; clones share the same underlying SDK.
#[derive(Clone)]
pub struct AsyncSalesInsights {
    inner: Arc<SalesInsights>,
}

impl AsyncSalesInsights {
    pub fn new(sdk: SalesInsights) -> Self {
        Self {
            inner: Arc::new(sdk),
        }
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// ```no_run
    /// # use sales_insights_sdk::{AsyncSalesInsights, MonthSelector};
    /// # async fn example(sdk: AsyncSalesInsights) -> sales_insights_sdk::Result<()> {
    /// let march = sdk
    ///     .run(|s| s.transactions().all(MonthSelector::Month(3)))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&SalesInsights) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&sdk))
            .await
            .map_err(|e| InsightsError::InvalidArgument(format!("Task join error: {e}")))?
    }

    pub async fn transactions(&self, params: ListParams) -> Result<TransactionPage> {
        self.run(move |s| s.transactions().list(&params)).await
    }

    pub async fn statistics(&self, month: MonthSelector) -> Result<SaleStatistics> {
        self.run(move |s| s.statistics().get(month)).await
    }

    pub async fn price_ranges(&self, month: MonthSelector) -> Result<PriceHistogram> {
        self.run(move |s| s.price_ranges().get(month)).await
    }

    pub async fn categories(&self, month: MonthSelector) -> Result<CategoryDistribution> {
        self.run(move |s| s.categories().get(month)).await
    }

    /// Statistics, price ranges and categories for `month`, fetched as three
    /// concurrent sub-queries.
    ///
    /// Each sub-query takes its own snapshot. If any of them fails the whole
    /// call fails with that error; the others are simply discarded.
    pub async fn dashboard(&self, month: MonthSelector) -> Result<Dashboard> {
        let (statistics, bar_chart, pie_chart) = tokio::join!(
            self.statistics(month),
            self.price_ranges(month),
            self.categories(month),
        );
        Ok(Dashboard {
            statistics: statistics?,
            bar_chart: bar_chart?,
            pie_chart: pie_chart?,
        })
    }
}
