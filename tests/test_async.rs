//! Async client tests. Run with `--features async`.

#![cfg(feature = "async")]

mod common;

use sales_insights_sdk::{
    AsyncSalesInsights, FetchOrder, InsightsError, ListParams, MonthSelector, RecordSource,
    SalesInsights,
};
use serde_json::Value;

fn async_sdk(records: Vec<Value>) -> AsyncSalesInsights {
    AsyncSalesInsights::new(common::sdk_with(records))
}

#[tokio::test(flavor = "multi_thread")]
async fn dashboard_combines_three_sub_queries() {
    let sdk = async_sdk(common::scenario_records());
    let dashboard = sdk.dashboard(MonthSelector::Month(3)).await.unwrap();

    assert_eq!(dashboard.statistics.total_sale, 150.0);
    assert_eq!(dashboard.bar_chart.price_ranges[0].range, "100-199");
    assert_eq!(dashboard.pie_chart.categories[0].category, "Electronics");
}

#[tokio::test(flavor = "multi_thread")]
async fn typed_helpers_match_sync_queries() {
    let sdk = async_sdk(common::sample_documents());
    let sync_sdk = common::sdk_with(common::sample_documents());
    let month = MonthSelector::Month(3);

    assert_eq!(
        sdk.statistics(month).await.unwrap(),
        sync_sdk.statistics().get(month).unwrap()
    );
    assert_eq!(
        sdk.price_ranges(month).await.unwrap(),
        sync_sdk.price_ranges().get(month).unwrap()
    );
    assert_eq!(
        sdk.categories(month).await.unwrap(),
        sync_sdk.categories().get(month).unwrap()
    );

    let page = sdk
        .transactions(ListParams::default().month(month).limit(2))
        .await
        .unwrap();
    assert_eq!(page.total_pages, 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn run_executes_arbitrary_queries() {
    let sdk = async_sdk(common::numbered_records(12));
    let all = sdk
        .run(|s| s.transactions().all(MonthSelector::All))
        .await
        .unwrap();
    assert_eq!(all.len(), 12);
}

/// Fails only for unordered fetches, which the chart sub-queries use.
struct FlakySource;

impl RecordSource for FlakySource {
    fn fetch(&self, order: FetchOrder) -> sales_insights_sdk::Result<Vec<Value>> {
        match order {
            FetchOrder::ByItemId => Ok(common::scenario_records()),
            FetchOrder::Unordered => Err(InsightsError::SourceUnavailable {
                status: 500,
                details: "boom".into(),
            }),
        }
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn failing_sub_query_fails_the_dashboard_only() {
    let sdk = AsyncSalesInsights::new(SalesInsights::with_source(FlakySource));

    let err = sdk.dashboard(MonthSelector::All).await.unwrap_err();
    assert!(matches!(err, InsightsError::SourceUnavailable { status: 500, .. }));

    // Other queries on the same client are unaffected.
    let page = sdk.transactions(ListParams::default()).await.unwrap();
    assert_eq!(page.transactions.len(), 2);
}
