use std::io::{self, Write};

use crate::types::Issue;

/// utterances client script.
pub const WIDGET_SCRIPT_URL: &str = "https://utteranc.es/client.js";
/// utterances theme.
pub const WIDGET_THEME: &str = "github-light";

/// Write the comments section: a rule, a heading linking the issue and the
/// utterances script tag. utterances matches comments to the page by the
/// `repo` and `issue-number` attributes, so the markup must stay byte-exact.
pub fn write_comments<W: Write>(
    out: &mut W,
    owner: &str,
    repo: &str,
    issue: &Issue,
) -> io::Result<()> {
    write!(out, "<hr style=\"width: 100%\"/>\n\n")?;
    write!(
        out,
        "<h1 style=\"font-size: 1.5em;color:#555;font-weight: bold;\">Comments: (on <a href=\"{}\">github issue)</a></h1>\n\n",
        issue.url
    )?;
    write!(
        out,
        "\n<script src=\"{}\"\n        repo=\"{}/{}\"\n        issue-number=\"{}\"\n        theme=\"{}\"\n        crossorigin=\"anonymous\"\n        async>\n</script>\n",
        WIDGET_SCRIPT_URL, owner, repo, issue.number, WIDGET_THEME
    )
}
