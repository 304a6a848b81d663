//! Onset period classification.
//!
//! Labels a forecast grid cell by the time window holding the dominant
//! onset probability. The rule is pure and total: every row, including a
//! missing one, maps to exactly one [`PeriodLabel`].
//!
//! ```
//! use onset_common::{ForecastRow, PeriodLabel};
//! use period_classifier::classify;
//!
//! let row = ForecastRow::default().with_probabilities([0.3, 0.3, 0.0, 0.0], 0.0);
//! assert_eq!(classify(Some(&row)).label, PeriodLabel::Weeks12);
//! ```

pub mod classify;
pub mod summary;

pub use classify::{classify, classify_all, period_of, Classification, ONSET_THRESHOLD};
pub use summary::PeriodSummary;

pub use onset_common::PeriodLabel;
