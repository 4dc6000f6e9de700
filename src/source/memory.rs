use serde_json::Value;

use super::{apply_order, FetchOrder, RecordSource};
use crate::error::Result;
use crate::models::Transaction;

/// A snapshot held in memory. Each fetch hands out a copy.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<Value>,
}

impl MemorySource {
    pub fn new(records: Vec<Value>) -> Self {
        Self { records }
    }

    /// Build a source from already-canonical transactions.
    pub fn from_transactions(transactions: &[Transaction]) -> Result<Self> {
        let records = transactions
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordSource for MemorySource {
    fn fetch(&self, order: FetchOrder) -> Result<Vec<Value>> {
        Ok(apply_order(self.records.clone(), order))
    }
}
