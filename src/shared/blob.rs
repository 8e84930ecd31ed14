//! JSON Blob Helpers
//!
//! Schedule and delivery sub-documents are persisted as JSON-encoded byte
//! blobs and decoded into typed arrays on read.

use serde::{de::DeserializeOwned, Serialize};

use super::error::AppError;

/// Encode a sub-document list into its stored form.
pub fn encode<T: Serialize>(items: &[T]) -> Result<Vec<u8>, AppError> {
    Ok(serde_json::to_vec(items)?)
}

/// Decode a stored blob. Missing or undecodable blobs read as an empty list.
pub fn decode<T: DeserializeOwned>(blob: Option<&[u8]>, column: &str) -> Vec<T> {
    let Some(bytes) = blob else {
        return Vec::new();
    };

    match serde_json::from_slice::<Option<Vec<T>>>(bytes) {
        Ok(items) => items.unwrap_or_default(),
        Err(e) => {
            tracing::warn!(column, error = %e, "Discarding undecodable blob");
            Vec::new()
        }
    }
}
