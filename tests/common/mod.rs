//! Shared test fixtures for the sales insights SDK integration tests.
//!
//! Provides Firestore-shaped and plain sample records, an SDK over an
//! in-memory source, and a tiny HTTP server for exercising the Firestore
//! source without network access.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use sales_insights_sdk::{MemorySource, SalesInsights};
use serde_json::{json, Value};

/// A Firestore REST document with the given field values.
///
/// `itemId` is encoded as a string, the way Firestore sends `integerValue`.
pub fn firestore_doc(
    item_id: i64,
    title: &str,
    price: Value,
    category: &str,
    sold: bool,
    date_of_sale: &str,
) -> Value {
    json!({
        "name": format!("projects/demo/databases/(default)/documents/transactions/{item_id}"),
        "fields": {
            "itemId": { "integerValue": item_id.to_string() },
            "title": { "stringValue": title },
            "price": price,
            "description": { "stringValue": format!("{title} description") },
            "category": { "stringValue": category },
            "image": { "stringValue": format!("https://example.com/{item_id}.jpg") },
            "sold": { "booleanValue": sold },
            "dateOfSale": { "stringValue": date_of_sale }
        },
        "createTime": "2024-01-01T00:00:00.000000Z",
        "updateTime": "2024-01-01T00:00:00.000000Z"
    })
}

pub fn double(price: f64) -> Value {
    json!({ "doubleValue": price })
}

pub fn integer(price: i64) -> Value {
    json!({ "integerValue": price.to_string() })
}

/// Six documents spread over March, April and November, out of id order.
pub fn sample_documents() -> Vec<Value> {
    vec![
        firestore_doc(
            3,
            "Backpack",
            double(109.95),
            "men's clothing",
            true,
            "2021-03-27T20:29:54+05:30",
        ),
        firestore_doc(1, "Laptop", integer(850), "electronics", false, "2021-11-27T20:29:54+05:30"),
        firestore_doc(
            2,
            "T-shirt",
            double(22.3),
            "men's clothing",
            true,
            "2021-03-03T20:29:54+05:30",
        ),
        firestore_doc(5, "Ring", double(695.0), "jewelery", false, "2021-04-27T20:29:54+05:30"),
        firestore_doc(4, "Jacket", double(155.99), "", true, "2021-03-12T20:29:54+05:30"),
        firestore_doc(6, "Monitor", integer(199), "electronics", true, "2021-04-01T20:29:54+05:30"),
    ]
}

/// The two records of the reference scenario: one March sale, one April
/// listing that did not sell.
pub fn scenario_records() -> Vec<Value> {
    vec![
        json!({
            "itemId": 1,
            "price": 150,
            "sold": true,
            "dateOfSale": "2023-03-05",
            "category": "Electronics"
        }),
        json!({
            "itemId": 2,
            "price": 50,
            "sold": false,
            "dateOfSale": "2023-04-01",
            "category": "Books"
        }),
    ]
}

/// `count` plain records numbered from 1, all sold in January.
pub fn numbered_records(count: i64) -> Vec<Value> {
    (1..=count)
        .map(|i| {
            json!({
                "itemId": i,
                "title": format!("Item {i}"),
                "price": i as f64 * 10.0,
                "category": "misc",
                "sold": i % 2 == 0,
                "dateOfSale": "2022-01-15T10:00:00Z"
            })
        })
        .collect()
}

pub fn sdk_with(records: Vec<Value>) -> SalesInsights {
    SalesInsights::with_source(MemorySource::new(records))
}

/// Serve each `(status, body)` pair to one incoming connection, in order.
///
/// Returns the base URL to point a client at and a handle yielding the
/// request lines that were received.
pub fn serve_responses(responses: Vec<(u16, String)>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let mut request_lines = Vec::new();
        for (status, body) in responses {
            let (mut stream, _) = listener.accept().unwrap();

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let request = String::from_utf8_lossy(&request);
            request_lines.push(request.lines().next().unwrap_or("").to_string());

            let reason = if status == 200 { "OK" } else { "Error" };
            let response = format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
        }
        request_lines
    });

    (base_url, handle)
}
