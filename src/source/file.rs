//! Snapshot files on local disk.
//!
//! Accepts either a saved Firestore list-documents response
//! (`{"documents": [...]}`) or a bare JSON array of records, optionally
//! gzip-compressed (`.gz` extension).

use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use serde_json::Value;

use super::{apply_order, FetchOrder, RecordSource};
use crate::error::{InsightsError, Result};

/// Reads the whole snapshot file again on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_contents(&self) -> Result<String> {
        if self.path.extension().and_then(|e| e.to_str()) == Some("gz") {
            let file = fs::File::open(&self.path)?;
            let mut reader = BufReader::new(GzDecoder::new(BufReader::new(file)));
            let mut contents = String::new();
            reader.read_to_string(&mut contents)?;
            Ok(contents)
        } else {
            Ok(fs::read_to_string(&self.path)?)
        }
    }
}

impl RecordSource for JsonFileSource {
    fn fetch(&self, order: FetchOrder) -> Result<Vec<Value>> {
        let contents = self.read_contents()?;
        let records = match serde_json::from_str::<Value>(&contents)? {
            Value::Array(records) => records,
            Value::Object(mut body) => match body.remove("documents") {
                Some(Value::Array(documents)) => documents,
                None | Some(Value::Null) => Vec::new(),
                Some(_) => {
                    return Err(InsightsError::MalformedSnapshot(format!(
                        "\"documents\" in {} is not an array",
                        self.path.display()
                    )))
                }
            },
            _ => {
                return Err(InsightsError::MalformedSnapshot(format!(
                    "{} holds neither a record array nor a documents object",
                    self.path.display()
                )))
            }
        };
        tracing::debug!("read {} records from {}", records.len(), self.path.display());
        Ok(apply_order(records, order))
    }
}
