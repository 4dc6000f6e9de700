use crate::models::{SaleStatistics, Transaction};

/// Total revenue of sold items plus sold and unsold counts.
///
/// A sold record without a numeric price is still counted as sold but adds
/// nothing to `total_sale`. No rounding is applied.
pub fn summarize(records: &[Transaction]) -> SaleStatistics {
    records
        .iter()
        .fold(SaleStatistics::default(), |mut stats, transaction| {
            if transaction.sold {
                if let Some(price) = transaction.price {
                    stats.total_sale += price;
                }
                stats.total_items_sold += 1;
            } else {
                stats.total_items_not_sold += 1;
            }
            stats
        })
}
