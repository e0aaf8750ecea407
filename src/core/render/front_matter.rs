use std::io::{self, Write};

use crate::types::Issue;

/// Write the Hugo front-matter block: title, date, slug and, when the issue
/// has labels, tags. `date` is the already formatted front-matter date.
pub fn write_front_matter<W: Write>(out: &mut W, issue: &Issue, date: &str) -> io::Result<()> {
    writeln!(out, "---")?;
    writeln!(out, "title: \"{}\"", super::title::escape_title(&issue.title))?;
    writeln!(out, "date: {}", date)?;
    writeln!(out, "slug: {}", issue.number)?;
    if !issue.labels.is_empty() {
        writeln!(out, "tags: [")?;
        for label in &issue.labels {
            writeln!(out, "    \"{}\",", label)?;
        }
        writeln!(out, "]")?;
    }
    write!(out, "---\n\n")
}

/// Raw body followed by a blank line.
pub fn write_body<W: Write>(out: &mut W, issue: &Issue) -> io::Result<()> {
    write!(out, "{}\n\n", issue.body)
}
