//! Per-label counts over a classified batch.

use std::collections::BTreeMap;

use onset_common::PeriodLabel;
use serde::{Deserialize, Serialize};

use crate::Classification;

/// How many cells fell into each period.
///
/// Every label is present, including those with a zero count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub counts: BTreeMap<PeriodLabel, usize>,
    pub total: usize,
}

impl Default for PeriodSummary {
    fn default() -> Self {
        Self {
            counts: PeriodLabel::ALL.iter().map(|&label| (label, 0)).collect(),
            total: 0,
        }
    }
}

impl PeriodSummary {
    pub fn from_classifications<'a>(
        classifications: impl IntoIterator<Item = &'a Classification>,
    ) -> Self {
        let mut summary = Self::default();
        for c in classifications {
            summary.record(c.label);
        }
        summary
    }

    pub fn record(&mut self, label: PeriodLabel) {
        *self.counts.entry(label).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn count(&self, label: PeriodLabel) -> usize {
        self.counts.get(&label).copied().unwrap_or(0)
    }

    /// Cells with any onset period, i.e. everything but `none`.
    pub fn onset_count(&self) -> usize {
        self.counts
            .iter()
            .filter(|(label, _)| label.is_onset())
            .map(|(_, count)| count)
            .sum()
    }

    /// Share of cells with the given label, as a percentage.
    pub fn percentage(&self, label: PeriodLabel) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(label) as f64 / self.total as f64 * 100.0
    }

    /// Labels in legend order with their counts.
    pub fn iter(&self) -> impl Iterator<Item = (PeriodLabel, usize)> + '_ {
        PeriodLabel::ALL.iter().map(move |&label| (label, self.count(label)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary_lists_all_labels() {
        let summary = PeriodSummary::default();
        assert_eq!(summary.counts.len(), 7);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.percentage(PeriodLabel::None), 0.0);
        assert_eq!(summary.onset_count(), 0);
    }

    #[test]
    fn test_counts_and_percentages() {
        let results = [
            Classification { label: PeriodLabel::Weeks12, mass: 0.6 },
            Classification { label: PeriodLabel::Weeks12, mass: 0.7 },
            Classification { label: PeriodLabel::None, mass: 0.2 },
            Classification { label: PeriodLabel::Later, mass: 0.5 },
        ];
        let summary = PeriodSummary::from_classifications(&results);

        assert_eq!(summary.total, 4);
        assert_eq!(summary.count(PeriodLabel::Weeks12), 2);
        assert_eq!(summary.count(PeriodLabel::Weeks34), 0);
        assert_eq!(summary.percentage(PeriodLabel::Weeks12), 50.0);
        assert_eq!(summary.onset_count(), 3);

        let order: Vec<_> = summary.iter().map(|(label, _)| label).collect();
        assert_eq!(order, PeriodLabel::ALL.to_vec());
    }
}
