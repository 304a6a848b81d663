//! Period labels produced by onset classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::OnsetError;

/// The time window holding the dominant onset probability for a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PeriodLabel {
    /// Week 1 alone reaches the threshold
    #[serde(rename = "just_week1")]
    JustWeek1,
    #[serde(rename = "weeks12")]
    Weeks12,
    #[serde(rename = "weeks23")]
    Weeks23,
    #[serde(rename = "weeks34")]
    Weeks34,
    #[serde(rename = "weeks4later")]
    Weeks4Later,
    /// Week 5 or beyond alone reaches the threshold
    #[serde(rename = "later")]
    Later,
    /// No window reaches the threshold
    #[serde(rename = "none")]
    None,
}

impl PeriodLabel {
    /// All labels in legend order.
    pub const ALL: [PeriodLabel; 7] = [
        PeriodLabel::JustWeek1,
        PeriodLabel::Weeks12,
        PeriodLabel::Weeks23,
        PeriodLabel::Weeks34,
        PeriodLabel::Weeks4Later,
        PeriodLabel::Later,
        PeriodLabel::None,
    ];

    /// Canonical string key, as used in palettes and reports.
    pub fn key(&self) -> &'static str {
        match self {
            PeriodLabel::JustWeek1 => "just_week1",
            PeriodLabel::Weeks12 => "weeks12",
            PeriodLabel::Weeks23 => "weeks23",
            PeriodLabel::Weeks34 => "weeks34",
            PeriodLabel::Weeks4Later => "weeks4later",
            PeriodLabel::Later => "later",
            PeriodLabel::None => "none",
        }
    }

    /// Whether this label identifies an onset window at all.
    pub fn is_onset(&self) -> bool {
        !matches!(self, PeriodLabel::None)
    }
}

impl fmt::Display for PeriodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PeriodLabel {
    type Err = OnsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PeriodLabel::ALL
            .iter()
            .copied()
            .find(|label| label.key() == s.trim())
            .ok_or_else(|| OnsetError::InvalidLabel(s.to_string()))
    }
}
