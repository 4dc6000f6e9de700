use serde::{Deserialize, Serialize};

use super::transaction::Transaction;

// ---------------------------------------------------------------------------
// TransactionPage — One page of the month-filtered listing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPage {
    pub transactions: Vec<Transaction>,
    pub total_pages: usize,
}

// ---------------------------------------------------------------------------
// SaleStatistics — Revenue and sold/unsold counts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleStatistics {
    pub total_sale: f64,
    pub total_items_sold: u64,
    pub total_items_not_sold: u64,
}

// ---------------------------------------------------------------------------
// PriceHistogram — Counts per 100-unit price bucket
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub range: String,
    pub count: u64,
}

impl PriceRange {
    /// Lower bound parsed back out of the `"{start}-{end}"` label.
    pub fn start(&self) -> Option<i64> {
        let label = self.range.as_str();
        // A negative start carries its own leading '-'.
        let split_at = label
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c == '-')
            .map(|(i, _)| i)?;
        label[..split_at].parse().ok()
    }
}

/// Buckets are listed in the order their first record was seen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceHistogram {
    pub price_ranges: Vec<PriceRange>,
}

impl PriceHistogram {
    /// Copy of the histogram with buckets in ascending price order, for
    /// consumers that chart the ranges left to right.
    pub fn sorted_by_range_start(&self) -> PriceHistogram {
        let mut price_ranges = self.price_ranges.clone();
        price_ranges.sort_by_key(|r| r.start().unwrap_or(i64::MAX));
        PriceHistogram { price_ranges }
    }

    /// Sum of all bucket counts.
    pub fn total(&self) -> u64 {
        self.price_ranges.iter().map(|r| r.count).sum()
    }
}

// ---------------------------------------------------------------------------
// CategoryDistribution — Counts per category label
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryDistribution {
    pub categories: Vec<CategoryCount>,
}

impl CategoryDistribution {
    pub fn total(&self) -> u64 {
        self.categories.iter().map(|c| c.count).sum()
    }
}

// ---------------------------------------------------------------------------
// Dashboard — Statistics, histogram and categories for one month
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub statistics: SaleStatistics,
    pub bar_chart: PriceHistogram,
    pub pie_chart: CategoryDistribution,
}
