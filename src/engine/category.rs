use super::FirstSeenCounter;
use crate::models::{CategoryCount, CategoryDistribution, Transaction};

/// Count records per category, in order of first occurrence.
///
/// Records with an empty category are skipped entirely.
pub fn categorize(records: &[Transaction]) -> CategoryDistribution {
    let mut counter = FirstSeenCounter::default();
    for transaction in records.iter().filter(|t| !t.category.is_empty()) {
        counter.add(&transaction.category);
    }

    CategoryDistribution {
        categories: counter
            .into_entries()
            .into_iter()
            .map(|(category, count)| CategoryCount { category, count })
            .collect(),
    }
}
