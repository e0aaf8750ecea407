//! Post rendering: filename normalization, the front-matter/body blocks and
//! the comments widget, plus the per-issue file writer that stitches them.
pub mod comments;
pub mod date;
pub mod front_matter;
pub mod title;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::types::Issue;

pub use comments::write_comments;
pub use date::front_matter_date;
pub use front_matter::{write_body, write_front_matter};
pub use title::{escape_title, normalize_title};

/// `{number}_{normalized title}.md`
pub fn post_file_name(issue: &Issue) -> String {
    format!("{}_{}.md", issue.number, normalize_title(&issue.title))
}

/// Render a full post into any writer.
///
/// Nothing is written when `created_at` is malformed.
pub fn write_post<W: Write>(out: &mut W, owner: &str, repo: &str, issue: &Issue) -> Result<()> {
    let date = front_matter_date(&issue.created_at)?;
    write_front_matter(out, issue, &date)?;
    write_body(out, issue)?;
    write_comments(out, owner, repo, issue)?;
    Ok(())
}

/// Render a full post to a string.
pub fn render_post(owner: &str, repo: &str, issue: &Issue) -> Result<String> {
    let mut buf = Vec::new();
    write_post(&mut buf, owner, repo, issue)?;
    let text = String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(text)
}

/// Write the post for `issue` into `output_dir`, replacing any file of the
/// same name. Returns the path written.
pub fn save_post(output_dir: &Path, owner: &str, repo: &str, issue: &Issue) -> Result<PathBuf> {
    let text = render_post(owner, repo, issue)?;
    let path = output_dir.join(post_file_name(issue));

    let mut file = BufWriter::new(File::create(&path)?);
    file.write_all(text.as_bytes())?;
    file.flush()?;

    debug!("Wrote post #{} -> {:?}", issue.number, path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(number: u64, title: &str) -> Issue {
        Issue {
            number,
            title: title.to_string(),
            body: "Body text".to_string(),
            created_at: "2021-06-01T00:00:00Z".to_string(),
            labels: vec!["a".to_string()],
            url: format!("https://github.com/o/r/issues/{number}"),
        }
    }

    #[test]
    fn file_name_uses_number_and_normalized_title() {
        assert_eq!(post_file_name(&issue(42, "Fix/bug: crash")), "42_Fix_bug: crash.md");
        assert_eq!(post_file_name(&issue(3, " Done. ")), "3_Done.md");
    }

    #[test]
    fn render_post_orders_blocks() {
        let text = render_post("o", "r", &issue(5, "Title")).unwrap();

        let front = text.find("slug: 5").unwrap();
        let body = text.find("Body text\n\n").unwrap();
        let comments = text.find("<hr").unwrap();
        assert!(text.starts_with("---\ntitle: \"Title\"\ndate: 2021-06-01T08:00:00+08:00\n"));
        assert!(front < body && body < comments);
        assert!(text.contains("repo=\"o/r\"\n        issue-number=\"5\""));
        assert!(text.ends_with("</script>\n"));
    }

    #[test]
    fn bad_date_writes_nothing() {
        let mut broken = issue(1, "x");
        broken.created_at = "not a date".to_string();
        let mut buf = Vec::new();

        assert!(write_post(&mut buf, "o", "r", &broken).is_err());
        assert!(buf.is_empty());
    }
}
