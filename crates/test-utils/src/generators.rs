//! Generators for synthetic forecast grids.
//!
//! These produce predictable probability patterns so tests can check
//! classification over many cells without hand-written tables.

/// A generated cell: `(lat, lon, [week1, week2, week3, week4, later])`.
pub type GeneratedCell = (f64, f64, [f64; 5]);

/// Creates a regular 2-degree grid whose onset moves later with latitude.
///
/// Rows are ordered south to north, west to east. The southernmost row
/// peaks in week 1 and each following row shifts the peak one window
/// later, wrapping after the `later` window. Every vector sums to 1.
///
/// # Example
///
/// ```
/// use test_utils::create_onset_grid;
///
/// let grid = create_onset_grid(3, 2, 8.0, 70.0);
/// assert_eq!(grid.len(), 6);
/// assert_eq!(grid[0].2[0], 0.6); // southern row peaks in week 1
/// ```
pub fn create_onset_grid(rows: usize, cols: usize, south: f64, west: f64) -> Vec<GeneratedCell> {
    let mut cells = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        let peak = row % 5;
        let mut probs = [0.1; 5];
        probs[peak] = 0.6;
        for col in 0..cols {
            let lat = south + row as f64 * 2.0;
            let lon = west + col as f64 * 2.0;
            cells.push((lat, lon, probs));
        }
    }
    cells
}

/// Renders generated cells as a forecast CSV table with a header.
pub fn cells_to_csv(cells: &[GeneratedCell], time: &str) -> String {
    let mut out = String::from(crate::fixtures::csv::HEADER);
    out.push('\n');
    for (lat, lon, p) in cells {
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{}\n",
            lat, lon, time, p[0], p[1], p[2], p[3], p[4]
        ));
    }
    out
}
