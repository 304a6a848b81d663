//! Common types shared across the monsoon onset workspace.

pub mod cell;
pub mod error;
pub mod format;
pub mod forecast;
pub mod period;
pub mod time;

pub use cell::{BoundingBox, GridCell, CELL_HALF_WIDTH};
pub use error::{OnsetError, OnsetResult};
pub use forecast::ForecastRow;
pub use format::{format_probability, PROBABILITY_COLUMNS};
pub use period::PeriodLabel;
pub use time::IssueDate;
