use issue2post::Error as ConvertError;
use issue2post::error::{EXIT_FAILURE, EXIT_OK, EXIT_USAGE};
use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    /// Required flags absent or unusable; reported together with the usage.
    #[error("{0}")]
    Config(#[source] ConvertError),

    #[error(transparent)]
    Run(#[from] ConvertError),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Config(_) => EXIT_FAILURE,
            AppError::Run(e) => e.exit_code(),
        }
    }

    pub fn shows_usage(&self) -> bool {
        matches!(self, AppError::Config(_))
    }
}

/// Exit status for a clap parse error: 0 for `--help`/`--version`, 2 otherwise.
pub fn clap_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() { EXIT_USAGE } else { EXIT_OK }
}
