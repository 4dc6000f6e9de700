//! Calendar-month filtering.

use crate::models::Transaction;
use crate::params::MonthSelector;

/// Whether `transaction` was sold in the selected month.
///
/// [`MonthSelector::All`] matches everything, including records whose date
/// cannot be read. A specific month only matches when the `MM` segment of
/// the date equals the zero-padded month.
pub fn matches_month(transaction: &Transaction, month: &MonthSelector) -> bool {
    match month.token() {
        None => true,
        Some(token) => transaction.sale_month() == Some(token.as_str()),
    }
}

/// Keep the records sold in `month`, in their original order.
pub fn filter_by_month(mut records: Vec<Transaction>, month: MonthSelector) -> Vec<Transaction> {
    if month != MonthSelector::All {
        records.retain(|t| matches_month(t, &month));
    }
    records
}
