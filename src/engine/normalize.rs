//! Raw document to [`Transaction`] conversion.
//!
//! Accepts Firestore REST documents, where every field is wrapped in a type
//! tag (`{"fields": {"price": {"doubleValue": 12.5}}}`), as well as plain
//! objects in the shape of the seed dataset. Normalization is total: any
//! missing or mistyped field takes its default.

use serde_json::{Map, Value};

use crate::models::Transaction;

/// Firestore value tags, in the order they are preferred when a field
/// carries more than one.
const VALUE_TAGS: &[&str] = &[
    "doubleValue",
    "integerValue",
    "stringValue",
    "booleanValue",
    "timestampValue",
    "nullValue",
];

/// Convert one raw record into a canonical [`Transaction`].
pub fn normalize(raw: &Value) -> Transaction {
    let Some(fields) = field_map(raw) else {
        return Transaction::default();
    };

    let item_id = field(fields, "itemId")
        .or_else(|| field(fields, "id"))
        .map(read_integer)
        .unwrap_or(0);

    Transaction {
        item_id,
        title: read_string(field(fields, "title")),
        price: read_price_field(fields),
        description: read_string(field(fields, "description")),
        category: read_string(field(fields, "category")),
        image: read_string(field(fields, "image")),
        sold: matches!(field(fields, "sold"), Some(Value::Bool(true))),
        date_of_sale: read_string(field(fields, "dateOfSale")),
    }
}

/// Normalize a whole snapshot, preserving order.
pub fn normalize_all(raw: &[Value]) -> Vec<Transaction> {
    raw.iter().map(normalize).collect()
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn field_map(raw: &Value) -> Option<&Map<String, Value>> {
    let object = raw.as_object()?;
    match object.get("fields") {
        Some(Value::Object(fields)) => Some(fields),
        _ => Some(object),
    }
}

/// Look up `key` and strip its type tag, if any. Absent and `nullValue`
/// fields both read as `None`.
fn field<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    let value = fields.get(key)?;
    let inner = match value {
        Value::Object(tagged) => VALUE_TAGS
            .iter()
            .find_map(|tag| tagged.get(*tag))
            .unwrap_or(value),
        _ => value,
    };
    match inner {
        Value::Null => None,
        _ => Some(inner),
    }
}

fn read_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

// Firestore sends integerValue as a decimal string.
fn read_integer(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// A bare `null` price is how a serialized [`Transaction`] spells "no
/// numeric price". Only an absent field or a Firestore `nullValue` reads as 0.
fn read_price_field(fields: &Map<String, Value>) -> Option<f64> {
    match fields.get("price") {
        Some(Value::Null) => None,
        _ => field(fields, "price").map_or(Some(0.0), read_price),
    }
}

fn read_price(value: &Value) -> Option<f64> {
    let price = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    price.is_finite().then_some(price)
}
