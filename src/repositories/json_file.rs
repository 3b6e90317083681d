use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tokio::fs;

use crate::errors::{AppError, AppResult};

/// Read a JSON record, falling back to the default when the file is missing
/// or cannot be parsed.
pub async fn read_or_default<T>(path: &Path) -> AppResult<T>
where
    T: DeserializeOwned + Default,
{
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
        Err(err) => {
            return Err(AppError::StorageError(format!(
                "Failed to read {}: {}",
                path.display(),
                err
            )))
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(value) => Ok(value),
        Err(err) => {
            log::warn!(
                "Ignoring unreadable record at {}: {}",
                path.display(),
                err
            );
            Ok(T::default())
        }
    }
}

/// Serialize the whole record to a sibling temp file and rename it over the
/// target, so readers see either the old or the new record.
pub async fn write_atomic<T>(path: &Path, value: &T) -> AppResult<()>
where
    T: Serialize,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }

    let body = serde_json::to_vec_pretty(value)?;
    let tmp = temp_path(path);

    fs::write(&tmp, &body).await.map_err(|err| {
        AppError::StorageError(format!("Failed to write {}: {}", tmp.display(), err))
    })?;
    if let Err(err) = fs::rename(&tmp, path).await {
        if let Err(cleanup) = fs::remove_file(&tmp).await {
            log::warn!("Failed to remove {}: {}", tmp.display(), cleanup);
        }
        return Err(AppError::StorageError(format!(
            "Failed to replace {}: {}",
            path.display(),
            err
        )));
    }

    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(format!(".{}.tmp", uuid::Uuid::new_v4()));
    path.with_file_name(name)
}
