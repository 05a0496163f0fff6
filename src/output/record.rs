use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::OutputError;
use crate::http::FuzzResponse;

/// Persisted form of a reported response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub input: String,
    pub status: i64,
    pub length: u64,
    pub words: u64,
}

impl From<&FuzzResponse> for ResultRecord {
    fn from(response: &FuzzResponse) -> Self {
        Self {
            input: response.request.input_lossy(),
            status: response.status,
            length: response.content_length,
            words: response.words,
        }
    }
}

/// Writes `records` to `path` as a single JSON array, replacing the file.
///
/// # Errors
///
/// Returns an error when serialization or the file write fails.
pub fn write_records(path: &Path, records: &[ResultRecord]) -> Result<(), OutputError> {
    let json =
        serde_json::to_vec(records).map_err(|err| OutputError::SerializeJson { source: err })?;
    std::fs::write(path, json).map_err(|err| OutputError::WriteFile {
        path: path.to_path_buf(),
        source: err,
    })
}
