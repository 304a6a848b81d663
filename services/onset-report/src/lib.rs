//! Reports over monsoon onset forecast tables.
//!
//! Loads a forecast table, classifies its cells and renders the results
//! as console tables, JSON or CSV.

pub mod config;
pub mod report;
pub mod views;

use onset_common::OnsetError;

pub use config::{InputSource, ReportConfig};
pub use report::{OutputFormat, Tabular};
pub use views::{find_cell, CellDetail, ClassifiedCell, LegendRow, SummaryRow};

/// Process exit status for a failed report.
///
/// Bad input (malformed tables, palettes, parameters, points outside the
/// grid) exits with 2; anything else, such as unreadable files, with 1.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    let user_error = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<OnsetError>())
        .is_some_and(OnsetError::is_user_error);
    if user_error {
        2
    } else {
        1
    }
}
