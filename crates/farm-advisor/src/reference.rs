use std::path::PathBuf;

/// Failures raised while loading the read-only reference tables (scheme catalog, crop schedules).
#[derive(Debug, thiserror::Error)]
pub enum ReferenceDataError {
    #[error("failed to read reference data from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON reference data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid CSV reference data: {0}")]
    Csv(#[from] csv::Error),
    #[error("{table} contains no entries")]
    Empty { table: &'static str },
    #[error("{table} lists '{key}' more than once")]
    Duplicate { table: &'static str, key: String },
    #[error("crop schedule table has no entry for default crop '{0}'")]
    MissingDefaultCrop(String),
    #[error("scheme '{scheme}' is invalid: {reason}")]
    InvalidScheme { scheme: String, reason: String },
}

pub(crate) fn read_file(path: &std::path::Path) -> Result<std::fs::File, ReferenceDataError> {
    std::fs::File::open(path).map_err(|source| ReferenceDataError::Io {
        path: path.to_path_buf(),
        source,
    })
}
