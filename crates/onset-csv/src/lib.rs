//! Forecast table loading.
//!
//! Reads the header-named onset summary table into [`ForecastRow`]s for
//! classification, and into [`DisplayRow`]s for the table view.
//!
//! [`ForecastRow`]: onset_common::ForecastRow

pub mod columns;
pub mod display;
pub mod reader;

pub use columns::{Column, ColumnMap};
pub use display::DisplayRow;
pub use reader::{filter_usable, ForecastReader, ForecastTable};
