//! Error types for regen
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::StoreError;

/// Result type alias for regen operations
pub type RegenResult<T> = Result<T, RegenError>;

/// Main error type for regen operations
#[derive(Error, Debug)]
pub enum RegenError {
    /// Discovery found no generator units at all
    #[error("no generators found under {root} - is the generators directory missing?")]
    NoGenerators { root: PathBuf },

    /// Invalid configuration file or value
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// I/O failure tied to a specific path
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fingerprint store could not be loaded or saved
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A generator exited unsuccessfully
    #[error("generator {unit} failed with {}", describe_exit(.exit_code))]
    GeneratorFailed {
        unit: String,
        exit_code: Option<i32>,
    },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl RegenError {
    /// Build an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Stable machine-readable error category, used by JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            RegenError::NoGenerators { .. } | RegenError::Config { .. } => "config",
            RegenError::Io { .. } => "io",
            RegenError::Store(_) => "store",
            RegenError::GeneratorFailed { .. } => "generator",
        }
    }
}
