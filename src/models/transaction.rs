use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Transaction — Canonical sales record (post-normalization)
// ---------------------------------------------------------------------------

/// A single product sale with every field populated.
///
/// `price` is `None` only when the source supplied a price that could not be
/// read as a number; a missing price is `Some(0.0)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub item_id: i64,
    pub title: String,
    pub price: Option<f64>,
    pub description: String,
    pub category: String,
    pub image: String,
    pub sold: bool,
    pub date_of_sale: String,
}

impl Default for Transaction {
    fn default() -> Self {
        Self {
            item_id: 0,
            title: String::new(),
            price: Some(0.0),
            description: String::new(),
            category: String::new(),
            image: String::new(),
            sold: false,
            date_of_sale: String::new(),
        }
    }
}

impl Transaction {
    /// The `MM` segment of the `YYYY-MM-DD` prefix of `date_of_sale`.
    ///
    /// Anything from the first `T` onwards is ignored. Returns `None` when
    /// the date has fewer than two `-`-delimited segments.
    pub fn sale_month(&self) -> Option<&str> {
        let date = self
            .date_of_sale
            .split('T')
            .next()
            .unwrap_or(self.date_of_sale.as_str());
        date.split('-').nth(1)
    }
}
