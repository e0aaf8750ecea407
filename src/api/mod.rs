//! High-level library API: turn an issue export into a directory of posts,
//! or render a single post in memory. Prefer these entrypoints over the
//! low-level `core` and `io` modules when embedding the converter.
use std::collections::BTreeSet;
use std::path::Path;

use tracing::info;

use crate::core::params::SiteParams;
use crate::core::render::save_post;
use crate::error::Result;
use crate::io::{load_issues, prepare_output_dir};
use crate::types::{Issue, RawIssue};

pub use crate::core::render::{post_file_name, render_post};

/// Outcome of a conversion run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PostReport {
    /// Posts written, one per input record.
    pub written: usize,
    /// Distinct file names produced. Lower than `written` when titles collide.
    pub files: usize,
}

/// Load the export named by `params`, recreate the output directory and
/// write one post per issue, in input order.
///
/// Stops at the first record that fails to decode or render; posts written
/// before it stay on disk.
pub fn generate_posts(params: &SiteParams) -> Result<PostReport> {
    let issues = load_issues(&params.input_file)?;
    write_posts(&params.owner, &params.repo, &issues, &params.output_dir)
}

/// Recreate `output_dir` and write one post per raw record.
pub fn write_posts(
    owner: &str,
    repo: &str,
    issues: &[RawIssue],
    output_dir: &Path,
) -> Result<PostReport> {
    prepare_output_dir(output_dir)?;

    let mut names = BTreeSet::new();
    let mut report = PostReport::default();
    for (index, raw) in issues.iter().enumerate() {
        let issue = Issue::from_raw(raw, index)?;
        save_post(output_dir, owner, repo, &issue)?;
        names.insert(post_file_name(&issue));
        report.written += 1;
    }
    report.files = names.len();

    info!(
        "Wrote {} posts ({} files) to {:?}",
        report.written, report.files, output_dir
    );
    Ok(report)
}
