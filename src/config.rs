use std::env;
use std::time::Duration;

use crate::error::{InsightsError, Result};

pub const FIRESTORE_BASE: &str = "https://firestore.googleapis.com/v1";
pub const DEFAULT_DATABASE: &str = "(default)";
pub const DEFAULT_COLLECTION: &str = "transactions";
pub const DEFAULT_PAGE_SIZE: u32 = 300;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const PROJECT_ID_VAR: &str = "FIREBASE_PROJECT_ID";
pub const BASE_URL_VAR: &str = "FIRESTORE_BASE_URL";

/// Month value meaning "every month, no filtering".
pub const ALL_MONTHS: u8 = 13;
pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;
pub const PRICE_BUCKET_WIDTH: f64 = 100.0;

/// Connection settings for the Firestore record source.
///
/// Built explicitly and handed to [`FirestoreSource`](crate::source::FirestoreSource);
/// nothing in the query engine looks at the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceConfig {
    pub project_id: String,
    pub base_url: String,
    pub database: String,
    pub collection: String,
    pub timeout: Duration,
    pub page_size: u32,
}

impl SourceConfig {
    /// Settings for `project_id` with every other field at its default.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            base_url: FIRESTORE_BASE.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            timeout: DEFAULT_TIMEOUT,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Read `FIREBASE_PROJECT_ID` (required) and `FIRESTORE_BASE_URL`
    /// (optional) from the process environment.
    pub fn from_env() -> Result<Self> {
        let project_id = env::var(PROJECT_ID_VAR).map_err(|_| {
            InsightsError::InvalidArgument(format!("{} must be set", PROJECT_ID_VAR))
        })?;
        let mut config = Self::new(project_id);
        if let Ok(base_url) = env::var(BASE_URL_VAR) {
            config = config.base_url(base_url);
        }
        Ok(config)
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    pub fn collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Documents requested per list call. Clamped to at least 1.
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// URL of the collection's list-documents endpoint.
    pub fn documents_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/{}/documents/{}",
            self.base_url, self.project_id, self.database, self.collection
        )
    }
}
