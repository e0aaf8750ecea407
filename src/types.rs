//! Shared types: the `Issue` record read from the export and the raw JSON
//! value it is decoded from.
use serde::Deserialize;

use crate::error::{Error, Result};

/// Undecoded issue as it appears in the input array. Records are only
/// decoded into [`Issue`] when they are rendered.
pub type RawIssue = serde_json::Value;

/// One issue from the export. Unknown fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub body: String,
    /// `YYYY-MM-DDTHH:MM:SSZ`, UTC.
    pub created_at: String,
    pub labels: Vec<String>,
    pub url: String,
}

impl Issue {
    /// Decode the record at position `index` of the input array.
    pub fn from_raw(raw: &RawIssue, index: usize) -> Result<Self> {
        Issue::deserialize(raw).map_err(|source| Error::MalformedIssue { index, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_camel_case_fields_and_ignores_extras() {
        let raw = json!({
            "number": 7,
            "title": "Hello",
            "body": "",
            "createdAt": "2021-06-01T00:00:00Z",
            "labels": ["rust"],
            "url": "https://github.com/o/r/issues/7",
            "author": "someone"
        });

        let issue = Issue::from_raw(&raw, 0).unwrap();
        assert_eq!(issue.number, 7);
        assert_eq!(issue.created_at, "2021-06-01T00:00:00Z");
        assert_eq!(issue.labels, vec!["rust".to_string()]);
    }

    #[test]
    fn missing_field_reports_index() {
        let raw = json!({ "number": 1, "title": "no body" });

        match Issue::from_raw(&raw, 4) {
            Err(Error::MalformedIssue { index, .. }) => assert_eq!(index, 4),
            other => panic!("expected MalformedIssue, got {other:?}"),
        }
    }
}
