use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::types::RawIssue;

/// Read the top-level JSON array of issues from `path`.
///
/// Records are returned undecoded and in file order. A `null` document or an
/// empty array is reported as [`Error::NoIssues`].
pub fn load_issues(path: &Path) -> Result<Vec<RawIssue>> {
    let reader = BufReader::new(File::open(path)?);
    let issues: Option<Vec<RawIssue>> = serde_json::from_reader(reader)?;

    match issues {
        Some(issues) if !issues.is_empty() => {
            info!("Loaded {} issues from {:?}", issues.len(), path);
            Ok(issues)
        }
        _ => Err(Error::NoIssues {
            path: path.display().to_string(),
        }),
    }
}
