use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize results: {source}")]
    SerializeJson {
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to write results to '{path}': {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
