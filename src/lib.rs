//! Sales insights SDK for Rust.
//!
//! Answers month-filtered questions about a collection of product sale
//! records: paginated listings, sale statistics, a price-range histogram
//! and a category distribution. Records are fetched in full from a record
//! source (a Firestore collection, a snapshot file, or memory) on every
//! query and aggregated in-process.
//!
//! # Quick start
//!
//! ```no_run
//! use sales_insights_sdk::{ListParams, MonthSelector, SalesInsights, SourceConfig};
//!
//! let sdk = SalesInsights::builder()
//!     .firestore(SourceConfig::new("my-project"))
//!     .build()
//!     .unwrap();
//!
//! // Second page of March sales
//! let page = sdk
//!     .transactions()
//!     .list(&ListParams::default().month(MonthSelector::Month(3)).page(2))
//!     .unwrap();
//!
//! // Everything the dashboard charts need, for all months
//! let dashboard = sdk.dashboard().get(MonthSelector::All).unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod params;
pub mod queries;
pub mod source;

#[cfg(feature = "async")]
pub use async_client::AsyncSalesInsights;
pub use config::SourceConfig;
pub use error::{InsightsError, Result};
pub use models::{
    CategoryCount, CategoryDistribution, Dashboard, PriceHistogram, PriceRange, SaleStatistics,
    Transaction, TransactionPage,
};
pub use params::{ListParams, MonthSelector};
pub use source::{FetchOrder, FirestoreSource, JsonFileSource, MemorySource, RecordSource};

use std::fmt;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// SalesInsightsBuilder
// ---------------------------------------------------------------------------

enum SourceChoice {
    Firestore(SourceConfig),
    File(PathBuf),
    Custom(Box<dyn RecordSource>),
}

/// Builder for configuring and constructing a [`SalesInsights`] instance.
///
/// Exactly one record source is used; the last one configured wins.
#[derive(Default)]
pub struct SalesInsightsBuilder {
    source: Option<SourceChoice>,
}

impl SalesInsightsBuilder {
    /// Read records from a Firestore collection over its REST API.
    pub fn firestore(mut self, config: SourceConfig) -> Self {
        self.source = Some(SourceChoice::Firestore(config));
        self
    }

    /// Read records from a snapshot file on disk (`.json` or `.json.gz`).
    pub fn snapshot_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source = Some(SourceChoice::File(path.as_ref().to_path_buf()));
        self
    }

    /// Read records from any [`RecordSource`] implementation.
    pub fn source<S: RecordSource + 'static>(mut self, source: S) -> Self {
        self.source = Some(SourceChoice::Custom(Box::new(source)));
        self
    }

    /// Build the SDK.
    ///
    /// Nothing is fetched here; every query fetches its own snapshot.
    pub fn build(self) -> Result<SalesInsights> {
        let (source, label): (Box<dyn RecordSource>, String) = match self.source {
            Some(SourceChoice::Firestore(config)) => {
                let label = config.documents_url();
                let source: Box<dyn RecordSource> = Box::new(FirestoreSource::new(config)?);
                (source, label)
            }
            Some(SourceChoice::File(path)) => {
                let label = path.display().to_string();
                let source: Box<dyn RecordSource> = Box::new(JsonFileSource::new(path));
                (source, label)
            }
            Some(SourceChoice::Custom(source)) => (source, "custom".to_string()),
            None => {
                return Err(InsightsError::InvalidArgument(
                    "no record source configured".into(),
                ))
            }
        };
        Ok(SalesInsights { source, label })
    }
}

// ---------------------------------------------------------------------------
// SalesInsights
// ---------------------------------------------------------------------------

/// The main entry point for the SDK.
///
/// Owns the record source and exposes each query type as a lightweight
/// borrowing wrapper. Holds no other state: two calls never share a
/// snapshot.
pub struct SalesInsights {
    source: Box<dyn RecordSource>,
    label: String,
}

impl SalesInsights {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> SalesInsightsBuilder {
        SalesInsightsBuilder::default()
    }

    /// Shorthand for an SDK over an arbitrary source.
    pub fn with_source<S: RecordSource + 'static>(source: S) -> Self {
        Self {
            source: Box::new(source),
            label: "custom".to_string(),
        }
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the paginated listing interface.
    pub fn transactions(&self) -> queries::TransactionQuery<'_> {
        queries::TransactionQuery::new(self.source.as_ref())
    }

    /// Access the sale statistics interface.
    pub fn statistics(&self) -> queries::StatisticsQuery<'_> {
        queries::StatisticsQuery::new(self.source.as_ref())
    }

    /// Access the price-range histogram interface.
    pub fn price_ranges(&self) -> queries::PriceRangeQuery<'_> {
        queries::PriceRangeQuery::new(self.source.as_ref())
    }

    /// Access the category distribution interface.
    pub fn categories(&self) -> queries::CategoryQuery<'_> {
        queries::CategoryQuery::new(self.source.as_ref())
    }

    /// Access the combined dashboard interface.
    pub fn dashboard(&self) -> queries::DashboardQuery<'_> {
        queries::DashboardQuery::new(self.source.as_ref())
    }

    /// Return a reference to the underlying record source.
    pub fn source(&self) -> &dyn RecordSource {
        self.source.as_ref()
    }
}

impl fmt::Display for SalesInsights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SalesInsights(source={})", self.label)
    }
}
