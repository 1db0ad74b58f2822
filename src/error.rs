use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum FetchError {
    #[error("failed to read manifest at {0}")]
    ManifestRead(PathBuf),

    #[error("failed to parse manifest {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    #[error("invalid source url: {0:?}")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Http(String),

    #[error("server returned status {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("failed to read config file at {0}")]
    ConfigRead(PathBuf),

    #[error("failed to parse JSON config: {0}")]
    ConfigParse(String),

    #[error("filesystem error: {0}")]
    Filesystem(String),
}
