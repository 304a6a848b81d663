//! Display rows for the forecast table view.

use csv::StringRecord;
use onset_common::format::format_cell;
use serde::Serialize;

use crate::columns::{Column, ColumnMap};

/// One table row as shown to a reader: coordinates and time verbatim,
/// probabilities with two decimals where the cell is numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub lat: String,
    pub lon: String,
    pub time: String,
    pub week1: String,
    pub week2: String,
    pub week3: String,
    pub week4: String,
    pub later: String,
}

impl DisplayRow {
    pub(crate) fn from_record(columns: &ColumnMap, record: &StringRecord) -> Self {
        let cell = |column: Column| format_cell(column.name(), columns.get(record, column));

        Self {
            lat: cell(Column::Lat),
            lon: cell(Column::Lon),
            time: cell(Column::Time),
            week1: cell(Column::Week1),
            week2: cell(Column::Week2),
            week3: cell(Column::Week3),
            week4: cell(Column::Week4),
            later: cell(Column::Later),
        }
    }

    /// Header names in display order.
    pub fn header() -> Vec<&'static str> {
        Column::ALL.iter().map(|c| c.name()).collect()
    }

    /// Cells in display order.
    pub fn cells(&self) -> [&str; 8] {
        [
            self.lat.as_str(),
            self.lon.as_str(),
            self.time.as_str(),
            self.week1.as_str(),
            self.week2.as_str(),
            self.week3.as_str(),
            self.week4.as_str(),
            self.later.as_str(),
        ]
    }
}
