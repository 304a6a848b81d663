//! Grid cell geometry.
//!
//! Forecast cells are fixed squares of ±1 degree around their center.

use serde::{Deserialize, Serialize};

/// Half the side length of a forecast cell, in degrees.
pub const CELL_HALF_WIDTH: f64 = 1.0;

/// A geographic bounding box in degrees (x = longitude, y = latitude).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Width of the bounding box in degrees.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the bounding box in degrees.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Check if a point is contained within this bbox (edges inclusive).
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

/// A forecast grid cell centered on a lat/lon pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub lat: f64,
    pub lon: f64,
}

impl GridCell {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Cell center as (lat, lon).
    pub fn center(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }

    /// Spatial extent of the cell.
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(
            self.lon - CELL_HALF_WIDTH,
            self.lat - CELL_HALF_WIDTH,
            self.lon + CELL_HALF_WIDTH,
            self.lat + CELL_HALF_WIDTH,
        )
    }

    /// Whether a lat/lon point falls inside this cell.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        self.bounds().contains_point(lon, lat)
    }

    /// Distance from the cell center to a point, in degrees.
    pub fn center_distance(&self, lat: f64, lon: f64) -> f64 {
        ((self.lat - lat).powi(2) + (self.lon - lon).powi(2)).sqrt()
    }
}
