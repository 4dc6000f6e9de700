//! Price-range histogram.
//!
//! Buckets are 100 units wide and derived from the prices present: a range
//! with no records gets no entry.

use super::FirstSeenCounter;
use crate::config::PRICE_BUCKET_WIDTH;
use crate::models::{PriceHistogram, PriceRange, Transaction};

/// Label of the bucket holding `price`, e.g. `150.0` -> `"100-199"`.
///
/// Bounds stay in `f64`, so prices beyond the `i64` range still get a label
/// (their upper bound may round to the lower one).
pub fn bucket_label(price: f64) -> String {
    // Adding 0.0 turns -0.0 into 0.0.
    let start = (price / PRICE_BUCKET_WIDTH).floor() * PRICE_BUCKET_WIDTH + 0.0;
    let end = start + (PRICE_BUCKET_WIDTH - 1.0);
    format!("{}-{}", start, end)
}

/// Count records per price bucket, in order of first occurrence.
///
/// Records without a numeric price are left out of every bucket.
pub fn histogram(records: &[Transaction]) -> PriceHistogram {
    let mut counter = FirstSeenCounter::default();
    for price in records.iter().filter_map(|t| t.price) {
        counter.add(&bucket_label(price));
    }

    PriceHistogram {
        price_ranges: counter
            .into_entries()
            .into_iter()
            .map(|(range, count)| PriceRange { range, count })
            .collect(),
    }
}
