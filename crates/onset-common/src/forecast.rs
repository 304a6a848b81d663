//! Forecast rows: one grid cell's onset probabilities at issue time.

use serde::{Deserialize, Serialize};

use crate::cell::GridCell;

/// One grid cell's forecast as decoded from the source table.
///
/// Every field is optional. Absent or non-finite probabilities contribute
/// nothing to classification; they are never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastRow {
    /// Cell center latitude (degrees)
    pub lat: Option<f64>,
    /// Cell center longitude (degrees)
    pub lon: Option<f64>,
    /// Issuance date as written in the source
    pub time: Option<String>,
    pub week1: Option<f64>,
    pub week2: Option<f64>,
    pub week3: Option<f64>,
    pub week4: Option<f64>,
    /// Probability of onset in week 5 or beyond
    pub later: Option<f64>,
}

impl ForecastRow {
    /// Create a row located at a cell center, with no probabilities.
    pub fn at(lat: f64, lon: f64, time: impl Into<String>) -> Self {
        Self {
            lat: Some(lat),
            lon: Some(lon),
            time: Some(time.into()),
            ..Default::default()
        }
    }

    /// Set all five probabilities at once.
    pub fn with_probabilities(mut self, weeks: [f64; 4], later: f64) -> Self {
        self.week1 = Some(weeks[0]);
        self.week2 = Some(weeks[1]);
        self.week3 = Some(weeks[2]);
        self.week4 = Some(weeks[3]);
        self.later = Some(later);
        self
    }

    /// The five probability fields in window order, as given.
    pub fn probabilities(&self) -> [Option<f64>; 5] {
        [self.week1, self.week2, self.week3, self.week4, self.later]
    }

    /// The five probability fields with missing or non-finite values as 0.
    pub fn probability_vector(&self) -> [f64; 5] {
        self.probabilities()
            .map(|p| p.filter(|v| v.is_finite()).unwrap_or(0.0))
    }

    /// Whether the row has coordinates and an issue time callers can place.
    pub fn is_usable(&self) -> bool {
        let finite = |v: Option<f64>| v.map(f64::is_finite).unwrap_or(false);
        let has_time = self
            .time
            .as_deref()
            .map(|t| !t.trim().is_empty())
            .unwrap_or(false);

        finite(self.lat) && finite(self.lon) && has_time
    }

    /// The grid cell this row describes, if it has finite coordinates.
    pub fn cell(&self) -> Option<GridCell> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => {
                Some(GridCell::new(lat, lon))
            }
            _ => None,
        }
    }
}
