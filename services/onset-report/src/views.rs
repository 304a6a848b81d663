//! Report rows built from classified forecasts.
//!
//! Classification and presentation meet here: each view takes the label
//! from the classifier and looks up its color and legend in the palette.

use onset_common::format::{format_fixed, format_optional};
use onset_common::time::issue_label;
use onset_common::{BoundingBox, ForecastRow, OnsetError, OnsetResult, PeriodLabel};
use onset_csv::DisplayRow;
use onset_style::{Color, Palette};
use period_classifier::{classify, classify_all, Classification, PeriodSummary};
use serde::Serialize;
use tracing::debug;

use crate::report::Tabular;

/// A classified grid cell with its presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedCell {
    pub lat: f64,
    pub lon: f64,
    pub issued: String,
    pub label: PeriodLabel,
    pub mass: f64,
    pub color: String,
    pub legend: String,
    pub bounds: BoundingBox,
}

impl ClassifiedCell {
    fn new(row: &ForecastRow, classification: Classification, palette: &Palette) -> Option<Self> {
        let cell = row.cell()?;
        let style = palette.style_for(classification.label);

        Some(Self {
            lat: cell.lat,
            lon: cell.lon,
            issued: issue_label(row.time.as_deref().unwrap_or_default()),
            label: classification.label,
            mass: classification.mass,
            color: color_text(&style.color),
            legend: style.legend,
            bounds: cell.bounds(),
        })
    }

    /// Classify usable rows and attach their presentation.
    ///
    /// Callers are expected to have filtered the rows already; a row
    /// without coordinates is skipped.
    pub fn build_all(rows: &[ForecastRow], palette: &Palette) -> Vec<Self> {
        let cells: Vec<Self> = rows
            .iter()
            .zip(classify_all(rows))
            .filter_map(|(row, c)| Self::new(row, c, palette))
            .collect();
        debug!(cells = cells.len(), "Built classified cells");
        cells
    }
}

impl Tabular for ClassifiedCell {
    fn headers() -> Vec<&'static str> {
        vec!["lat", "lon", "issued", "period", "mass", "color", "legend"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.lat.to_string(),
            self.lon.to_string(),
            self.issued.clone(),
            self.label.to_string(),
            format_fixed(self.mass),
            self.color.clone(),
            self.legend.clone(),
        ]]
    }
}

impl Tabular for DisplayRow {
    fn headers() -> Vec<&'static str> {
        DisplayRow::header()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        vec![self.cells().iter().map(|c| c.to_string()).collect()]
    }
}

/// Palette colors are shown in normalized hex form; named colors such as
/// `lightgray` become `#d3d3d3`.
fn color_text(color: &Color) -> String {
    color.to_hex().unwrap_or_else(|| color.to_string())
}

/// One legend entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendRow {
    pub label: PeriodLabel,
    pub color: String,
    pub legend: String,
}

impl LegendRow {
    pub fn from_palette(palette: &Palette) -> Vec<Self> {
        palette
            .legend_entries()
            .into_iter()
            .map(|(label, style)| Self {
                label,
                color: color_text(&style.color),
                legend: style.legend,
            })
            .collect()
    }
}

impl Tabular for LegendRow {
    fn headers() -> Vec<&'static str> {
        vec!["period", "color", "legend"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        vec![vec![self.label.to_string(), self.color.clone(), self.legend.clone()]]
    }
}

/// Cell count for one period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub label: PeriodLabel,
    pub legend: String,
    pub cells: usize,
    pub percent: f64,
}

impl SummaryRow {
    pub fn from_summary(summary: &PeriodSummary, palette: &Palette) -> Vec<Self> {
        summary
            .iter()
            .map(|(label, count)| Self {
                label,
                legend: palette.style_for(label).legend,
                cells: count,
                percent: summary.percentage(label),
            })
            .collect()
    }
}

impl Tabular for SummaryRow {
    fn headers() -> Vec<&'static str> {
        vec!["period", "legend", "cells", "percent"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.label.to_string(),
            self.legend.clone(),
            self.cells.to_string(),
            format!("{:.1}", self.percent),
        ]]
    }
}

/// Per-week probabilities of a single cell, with its classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellDetail {
    pub cell: ClassifiedCell,
    /// `(window, probability)` in window order; absent values stay `None`.
    pub probabilities: Vec<(&'static str, Option<f64>)>,
}

impl CellDetail {
    pub fn new(row: &ForecastRow, palette: &Palette) -> OnsetResult<Self> {
        let cell = ClassifiedCell::new(row, classify(Some(row)), palette).ok_or_else(|| {
            OnsetError::InvalidParameter {
                param: "row".to_string(),
                message: "forecast row has no coordinates".to_string(),
            }
        })?;

        let windows = ["week1", "week2", "week3", "week4", "later"];
        let probabilities = windows.into_iter().zip(row.probabilities()).collect();

        Ok(Self {
            cell,
            probabilities,
        })
    }
}

impl Tabular for CellDetail {
    fn headers() -> Vec<&'static str> {
        vec!["window", "probability"]
    }

    /// One row per forecast window.
    fn rows(&self) -> Vec<Vec<String>> {
        self.probabilities
            .iter()
            .map(|(window, p)| vec![window.to_string(), format_optional(*p)])
            .collect()
    }
}

/// Find the usable row whose cell contains a point.
///
/// Neighbouring cells share edges, so when several contain the point the
/// one whose center is closest wins (the earlier row on an exact tie).
pub fn find_cell(rows: &[ForecastRow], lat: f64, lon: f64) -> OnsetResult<&ForecastRow> {
    if !lat.is_finite() || !lon.is_finite() {
        return Err(OnsetError::InvalidParameter {
            param: "lat/lon".to_string(),
            message: format!("coordinates must be finite, got {}, {}", lat, lon),
        });
    }

    let mut best: Option<(&ForecastRow, f64)> = None;
    for row in rows.iter().filter(|r| r.is_usable()) {
        let Some(cell) = row.cell() else { continue };
        if !cell.contains(lat, lon) {
            continue;
        }
        let distance = cell.center_distance(lat, lon);
        if best.map(|(_, d)| distance < d).unwrap_or(true) {
            best = Some((row, distance));
        }
    }

    best.map(|(row, _)| row)
        .ok_or(OnsetError::CellNotFound { lat, lon })
}
