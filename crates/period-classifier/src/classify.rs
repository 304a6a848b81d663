//! The period classification rule.

use onset_common::{ForecastRow, PeriodLabel};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Probability a window must reach to be reported as the onset period.
pub const ONSET_THRESHOLD: f64 = 0.5;

/// Labels of the adjacent two-week windows, in scan order.
const PAIR_LABELS: [PeriodLabel; 4] = [
    PeriodLabel::Weeks12,
    PeriodLabel::Weeks23,
    PeriodLabel::Weeks34,
    PeriodLabel::Weeks4Later,
];

/// Result of classifying one row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: PeriodLabel,
    /// Probability that decided the label: the single field for
    /// `just_week1`/`later`, otherwise the best adjacent-pair sum.
    pub mass: f64,
}

impl Classification {
    fn new(label: PeriodLabel, mass: f64) -> Self {
        Self { label, mass }
    }
}

/// Classify a forecast row.
///
/// Check order, first match wins:
/// 1. week 1 alone reaches the threshold -> `just_week1`
/// 2. week 5+ alone reaches the threshold -> `later`
/// 3. the largest adjacent-pair sum (first maximum on ties) reaches the
///    threshold -> that pair's label
/// 4. otherwise `none`
///
/// Missing and non-finite probabilities count as 0. Values are not
/// clamped, so out-of-range input goes through the same arithmetic.
pub fn classify(row: Option<&ForecastRow>) -> Classification {
    let Some(row) = row else {
        return Classification::new(PeriodLabel::None, 0.0);
    };

    let vf = row.probability_vector();

    if vf[0] >= ONSET_THRESHOLD {
        return Classification::new(PeriodLabel::JustWeek1, vf[0]);
    }
    if vf[4] >= ONSET_THRESHOLD {
        return Classification::new(PeriodLabel::Later, vf[4]);
    }

    let sums = [vf[0] + vf[1], vf[1] + vf[2], vf[2] + vf[3], vf[3] + vf[4]];

    // Strict `>` keeps the first maximum.
    let best = sums
        .iter()
        .enumerate()
        .skip(1)
        .fold(0, |best, (i, &sum)| if sum > sums[best] { i } else { best });

    if sums[best] >= ONSET_THRESHOLD {
        Classification::new(PAIR_LABELS[best], sums[best])
    } else {
        Classification::new(PeriodLabel::None, sums[best])
    }
}

/// Classify a row and return only its label.
pub fn period_of(row: Option<&ForecastRow>) -> PeriodLabel {
    classify(row).label
}

/// Classify a batch of rows in parallel, preserving input order.
pub fn classify_all(rows: &[ForecastRow]) -> Vec<Classification> {
    let results: Vec<Classification> = rows.par_iter().map(|row| classify(Some(row))).collect();
    debug!(rows = rows.len(), "Classified forecast rows");
    results
}
