//! Command Line Interface (CLI) layer.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`). Library users should call
//! `issue2post::generate_posts` instead.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use errors::{AppError, clap_exit_code};
pub use runner::run;
