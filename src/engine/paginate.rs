use crate::models::{Transaction, TransactionPage};

/// Cut page `page` (1-indexed) of `limit` records out of `records`.
///
/// Pages past the end are empty rather than an error. `total_pages` is
/// zero exactly when there are no records. A zero `page` or `limit` is read
/// as 1.
pub fn paginate(records: Vec<Transaction>, page: usize, limit: usize) -> TransactionPage {
    let page = page.max(1);
    let limit = limit.max(1);

    let total_pages = records.len().div_ceil(limit);
    let start = (page - 1).saturating_mul(limit);

    let transactions = records.into_iter().skip(start).take(limit).collect();

    TransactionPage {
        transactions,
        total_pages,
    }
}
