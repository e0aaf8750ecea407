//! I/O layer: reading the issue export and (re)creating the post directory.
pub mod issues;
pub use issues::load_issues;

pub mod output_dir;
pub use output_dir::prepare_output_dir;
