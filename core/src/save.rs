//! Writing payloads to disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::ApiError;

/// Write `content` as pretty-printed UTF-8 JSON (two-space indent) to `path`,
/// replacing any existing file, and return the path written.
pub fn save_to_json<T, P>(content: &T, path: P) -> Result<PathBuf, ApiError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref().to_path_buf();
    let json = serde_json::to_string_pretty(content)
        .map_err(|e| ApiError::Serialization(e.to_string()))?;
    fs::write(&path, json)?;
    tracing::info!(path = %path.display(), "saved payload");
    Ok(path)
}
