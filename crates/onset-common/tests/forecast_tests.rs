//! Tests for forecast rows, cells and display formatting together.

use onset_common::format::{format_cell, DISPLAY_COLUMNS};
use onset_common::time::issue_label;
use onset_common::{ForecastRow, GridCell, IssueDate, PeriodLabel};
use test_utils::{assert_approx_eq, create_onset_grid, fixtures};

// ============================================================================
// Rows and cells
// ============================================================================

#[test]
fn test_generated_grid_cells_tile_without_overlap() {
    let grid = create_onset_grid(3, 3, 8.0, 72.0);
    let cells: Vec<GridCell> = grid
        .iter()
        .map(|(lat, lon, p)| {
            ForecastRow::at(*lat, *lon, fixtures::time::ISSUE_DATE)
                .with_probabilities([p[0], p[1], p[2], p[3]], p[4])
                .cell()
                .unwrap()
        })
        .collect();

    // A point strictly inside one cell lies in no other cell.
    let inside = cells.iter().filter(|c| c.contains(10.5, 74.5)).count();
    assert_eq!(inside, 1);

    let bounds = cells[0].bounds();
    assert_approx_eq!(bounds.min_x, 71.0, 1e-12);
    assert_approx_eq!(bounds.max_y, 9.0, 1e-12);
}

#[test]
fn test_probability_vector_matches_fixture_order() {
    for scenario in fixtures::SCENARIOS {
        let p = scenario.probabilities;
        let row = ForecastRow {
            week1: p[0],
            week2: p[1],
            week3: p[2],
            week4: p[3],
            later: p[4],
            ..Default::default()
        };
        let vector = row.probability_vector();
        for i in 0..5 {
            assert_eq!(vector[i], p[i].unwrap_or(0.0), "{}", scenario.name);
        }
    }
}

#[test]
fn test_row_json_shape() {
    let row = ForecastRow::at(8.0, 76.0, "2024-05-27");
    let json = serde_json::to_value(&row).unwrap();
    assert_eq!(json["lat"], 8.0);
    assert!(json["week1"].is_null());
}

// ============================================================================
// Labels
// ============================================================================

#[test]
fn test_fixture_labels_parse() {
    for scenario in fixtures::SCENARIOS {
        let label: PeriodLabel = scenario.expected.parse().unwrap();
        assert_eq!(label.key(), scenario.expected);
    }
}

// ============================================================================
// Display
// ============================================================================

#[test]
fn test_format_every_display_column() {
    let raw = ["8.125", "76", "2024-05-27", "0.456", "", "n/a", "0", "1.005e-1"];
    let shown: Vec<String> = DISPLAY_COLUMNS
        .iter()
        .zip(raw)
        .map(|(column, value)| format_cell(column, value))
        .collect();

    assert_eq!(
        shown,
        vec!["8.125", "76", "2024-05-27", "0.46", "", "n/a", "0.00", "0.10"]
    );
}

#[test]
fn test_issue_labels() {
    assert_eq!(issue_label(fixtures::time::ISSUE_DATE), fixtures::time::ISSUE_LABEL);
    assert!(IssueDate::parse(fixtures::time::ISSUE_DATE).is_some());
}
