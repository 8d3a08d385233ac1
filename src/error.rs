use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Project root does not exist or is not a directory: {0}")]
    InvalidProjectRoot(String),

    #[error("Failed to write report: {path}")]
    ReportWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScanError>;
