use std::path::PathBuf;

use crate::error::{Error, Result};

/// Sentinel some upstream tooling substitutes for an unset value.
const UNDEFINED: &str = "undefined";

/// Run parameters: the repository hosting the comments, the issue export to
/// read and the post directory to (re)create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteParams {
    pub owner: String,
    pub repo: String,
    pub input_file: PathBuf,
    pub output_dir: PathBuf,
}

impl SiteParams {
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        input_file: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            input_file: input_file.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Build parameters from optional parts, failing on the first one unset.
    /// Checked in the order owner/repo, input file, output directory.
    pub fn from_options(
        owner: Option<String>,
        repo: Option<String>,
        input_file: Option<PathBuf>,
        output_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let (Some(owner), Some(repo)) = (owner, repo) else {
            return Err(missing("-r/--repo OWNER/REPO"));
        };
        let input_file = input_file.ok_or_else(|| missing("-f/--file FILE"))?;
        let output_dir = output_dir.ok_or_else(|| missing("-d/--dir POST_DIR"))?;
        Ok(Self {
            owner,
            repo,
            input_file,
            output_dir,
        })
    }

    /// `owner/repo` as used by the comment widget.
    pub fn repo_slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// Split an `OWNER/REPO` value. Anything other than exactly two parts leaves
/// both halves unset; a part that is empty or `undefined` is unset on its own.
pub fn parse_repo(value: &str) -> (Option<String>, Option<String>) {
    let parts: Vec<&str> = value.split('/').collect();
    match parts.as_slice() {
        [owner, repo] => (present(owner), present(repo)),
        _ => (None, None),
    }
}

fn missing(arg: &str) -> Error {
    Error::MissingArgument {
        arg: arg.to_string(),
    }
}

fn present(part: &str) -> Option<String> {
    if part.is_empty() || part == UNDEFINED {
        None
    } else {
        Some(part.to_string())
    }
}

/// Treat an empty string as an unset path.
pub fn non_empty_path(value: Option<String>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}
