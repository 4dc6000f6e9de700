//! Live smoke test against a real Firestore project.
//!
//! Run with:
//! ```sh
//! FIREBASE_PROJECT_ID=my-project cargo test --test smoke_test -- --ignored --nocapture
//! ```

use sales_insights_sdk::{ListParams, MonthSelector, SalesInsights, SourceConfig};

#[test]
#[ignore]
fn smoke_test() {
    let config = SourceConfig::from_env().expect("FIREBASE_PROJECT_ID must be set");
    let sdk = SalesInsights::builder().firestore(config).build().unwrap();
    eprintln!("{sdk}");

    let all = sdk.transactions().all(MonthSelector::All).unwrap();
    eprintln!("  {} transactions in the collection", all.len());

    let page = sdk.transactions().list(&ListParams::default()).unwrap();
    assert!(page.transactions.len() <= 10);
    assert_eq!(page.total_pages, all.len().div_ceil(10));
    let ids: Vec<i64> = page.transactions.iter().map(|t| t.item_id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted, "listing should come back in itemId order");

    let mut month_total = 0;
    for m in 1..=12 {
        let stats = sdk.statistics().get(MonthSelector::Month(m)).unwrap();
        let count = stats.total_items_sold + stats.total_items_not_sold;
        eprintln!(
            "  month {:>2}: {:>3} records, {:.2} sold",
            m, count, stats.total_sale
        );
        month_total += count;
    }
    assert!(month_total <= all.len() as u64);

    let dashboard = sdk.dashboard().get(MonthSelector::All).unwrap();
    assert_eq!(
        dashboard.statistics.total_items_sold + dashboard.statistics.total_items_not_sold,
        all.len() as u64
    );
    for range in &dashboard.bar_chart.sorted_by_range_start().price_ranges {
        eprintln!("  {:>11}: {}", range.range, range.count);
    }
    for category in &dashboard.pie_chart.categories {
        eprintln!("  {:>20}: {}", category.category, category.count);
    }
}
