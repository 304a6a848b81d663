//! Issue date handling for forecast rows.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The date a forecast was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IssueDate(pub NaiveDate);

impl IssueDate {
    /// Parse the `time` column of a forecast row.
    ///
    /// Accepts a bare date (`2024-06-01`), an RFC 3339 timestamp, or a
    /// naive `YYYY-MM-DD HH:MM:SS` / `YYYY-MM-DDTHH:MM:SS` timestamp.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();

        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Some(Self(date));
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(Self(dt.date_naive()));
        }

        for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
            if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Some(Self(ndt.date()));
            }
        }

        None
    }

    /// Human-readable label, e.g. `01 Jun 2024`.
    pub fn label(&self) -> String {
        self.0.format("%d %b %Y").to_string()
    }
}

impl fmt::Display for IssueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Display label for a raw `time` cell; unparseable values pass through.
pub fn issue_label(raw: &str) -> String {
    IssueDate::parse(raw)
        .map(|d| d.label())
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(IssueDate::parse("2024-06-01").unwrap().0, expected);
        assert_eq!(IssueDate::parse("2024-06-01T00:00:00Z").unwrap().0, expected);
        assert_eq!(IssueDate::parse("2024-06-01 12:30:00").unwrap().0, expected);
        assert_eq!(IssueDate::parse("2024-06-01T12:30:00").unwrap().0, expected);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(IssueDate::parse("June 1st").is_none());
        assert!(IssueDate::parse("").is_none());
    }

    #[test]
    fn test_labels() {
        let date = IssueDate::parse("2024-06-01").unwrap();
        assert_eq!(date.label(), "01 Jun 2024");
        assert_eq!(date.to_string(), "2024-06-01");
        assert_eq!(issue_label("week of monsoon"), "week of monsoon");
    }
}
