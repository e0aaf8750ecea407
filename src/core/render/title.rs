/// Characters trimmed from both ends of a title before it becomes a filename.
const TRIM_CHARS: [char; 3] = ['.', ',', ' '];

/// Turn an issue title into the filename-safe part of a post name.
///
/// Path separators become `_` and stray dots, commas and spaces are trimmed
/// from both ends. Nothing else is escaped.
pub fn normalize_title(title: &str) -> String {
    title.replace('/', "_").trim_matches(&TRIM_CHARS[..]).to_string()
}

/// Escape a title for a double-quoted front-matter value.
pub fn escape_title(title: &str) -> String {
    title.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_slashes() {
        assert_eq!(normalize_title("Fix/bug: crash"), "Fix_bug: crash");
        assert_eq!(normalize_title("a/b/c"), "a_b_c");
    }

    #[test]
    fn trims_punctuation_and_spaces() {
        assert_eq!(normalize_title(" Done. "), "Done");
        assert_eq!(normalize_title(",.,hello world.,. "), "hello world");
        assert_eq!(normalize_title("v1.0 release"), "v1.0 release");
    }

    #[test]
    fn normalization_is_idempotent() {
        for title in [" Done. ", "Fix/bug: crash", "/./", "..., ", "plain", "./a/."] {
            let once = normalize_title(title);
            assert_eq!(normalize_title(&once), once, "title {title:?}");
        }
    }

    #[test]
    fn slash_at_edge_survives_as_underscore() {
        assert_eq!(normalize_title("/etc/"), "_etc_");
    }

    #[test]
    fn escapes_double_quotes_only() {
        assert_eq!(escape_title(r#"Say "hi""#), r#"Say \"hi\""#);
        assert_eq!(escape_title("it's fine"), "it's fine");
    }
}
