//! Crate-level error type and `Result` alias.
//! Converts underlying I/O and JSON errors, and provides semantic variants
//! for argument validation, empty input and malformed issue records.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Exit status for a normal run (or `--help`).
pub const EXIT_OK: i32 = 0;
/// Exit status for fatal failures: missing arguments, unreadable input, I/O.
pub const EXIT_FAILURE: i32 = 1;
/// Exit status for argument syntax errors (same as clap's usage errors).
pub const EXIT_USAGE: i32 = 2;
/// Exit status when the input parsed to `null` or an empty array.
pub const EXIT_NO_ISSUES: i32 = 3;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("failed to load issues json: {path}")]
    NoIssues { path: String },

    #[error("Malformed issue at index {index}: {source}")]
    MalformedIssue {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid createdAt timestamp {value:?}: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("createdAt timestamp {value:?} is out of range after the +8h shift")]
    DateOutOfRange { value: String },
}

impl Error {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::NoIssues { .. } => EXIT_NO_ISSUES,
            _ => EXIT_FAILURE,
        }
    }
}
