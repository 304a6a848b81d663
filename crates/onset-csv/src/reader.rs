//! CSV reader for onset summary tables.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use onset_common::{ForecastRow, OnsetError, OnsetResult};
use tracing::{debug, warn};

use crate::columns::{Column, ColumnMap};
use crate::display::DisplayRow;

/// Reads a forecast table from any byte source.
pub struct ForecastReader<R: Read> {
    inner: csv::Reader<R>,
}

impl ForecastReader<BufReader<File>> {
    /// Open a forecast table on disk.
    pub fn from_path(path: impl AsRef<Path>) -> OnsetResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| OnsetError::Io(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "Opened forecast table");
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: Read> ForecastReader<R> {
    /// Wrap a reader. The first record must be the header row.
    ///
    /// Blank lines are skipped, fields are trimmed, and records may have
    /// fewer or more fields than the header. A line of separators only,
    /// such as `,,,`, is a record of empty cells and is kept.
    pub fn from_reader(reader: R) -> Self {
        let inner = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);
        Self { inner }
    }

    /// Read the whole table, keeping the raw cell text.
    pub fn read_table(mut self) -> OnsetResult<ForecastTable> {
        let headers = self.inner.headers()?.clone();
        let columns = ColumnMap::from_headers(&headers);

        let missing = columns.missing();
        if !missing.is_empty() {
            warn!(columns = ?missing, "Forecast table is missing columns");
        }

        let records = self
            .inner
            .records()
            .collect::<Result<Vec<StringRecord>, csv::Error>>()?;

        debug!(records = records.len(), "Read forecast table");
        Ok(ForecastTable { columns, records })
    }

    /// Read and decode every row of the table.
    pub fn read_rows(self) -> OnsetResult<Vec<ForecastRow>> {
        Ok(self.read_table()?.rows())
    }
}

/// A forecast table as read from CSV, before decoding.
#[derive(Debug, Clone)]
pub struct ForecastTable {
    columns: ColumnMap,
    records: Vec<StringRecord>,
}

impl ForecastTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Decode every record into a forecast row.
    pub fn rows(&self) -> Vec<ForecastRow> {
        self.records
            .iter()
            .map(|record| decode_record(&self.columns, record))
            .collect()
    }

    /// Display-formatted rows in column order, one per record.
    pub fn display_rows(&self) -> Vec<DisplayRow> {
        self.records
            .iter()
            .map(|record| DisplayRow::from_record(&self.columns, record))
            .collect()
    }
}

fn decode_record(columns: &ColumnMap, record: &StringRecord) -> ForecastRow {
    let number = |column| parse_number(columns.get(record, column));
    let time = columns.get(record, Column::Time);

    ForecastRow {
        lat: number(Column::Lat),
        lon: number(Column::Lon),
        time: (!time.is_empty()).then(|| time.to_string()),
        week1: number(Column::Week1),
        week2: number(Column::Week2),
        week3: number(Column::Week3),
        week4: number(Column::Week4),
        later: number(Column::Later),
    }
}

/// Decode a numeric cell. Empty, unparseable and non-finite text is absent.
fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Keep rows with usable coordinates and issue time, in order.
pub fn filter_usable(rows: Vec<ForecastRow>) -> Vec<ForecastRow> {
    let before = rows.len();
    let usable: Vec<ForecastRow> = rows.into_iter().filter(ForecastRow::is_usable).collect();

    let dropped = before - usable.len();
    if dropped > 0 {
        debug!(dropped, kept = usable.len(), "Dropped rows without coordinates or time");
    }
    usable
}
