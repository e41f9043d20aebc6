use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse seed file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Load records from a JSON array file.
///
/// A missing file is not an error: it is logged and yields `None` so a
/// service can start without seed data.
///
/// # Errors
/// * `Io` - File exists but could not be read
/// * `Parse` - Content is not a JSON array of `T`
pub async fn read_seed_file<T: DeserializeOwned>(path: &Path) -> Result<Option<Vec<T>>, SeedError> {
    let path_text = path.display().to_string();

    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path_text, "Seed file not found, skipping");
            return Ok(None);
        }
        Err(source) => {
            return Err(SeedError::Io {
                path: path_text,
                source,
            })
        }
    };

    let records: Vec<T> = serde_json::from_str(&content).map_err(|source| SeedError::Parse {
        path: path_text.clone(),
        source,
    })?;

    tracing::info!(path = %path_text, records = records.len(), "Seed file loaded");
    Ok(Some(records))
}
