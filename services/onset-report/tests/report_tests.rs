//! End-to-end report rendering over the sample tables.

use onset_common::PeriodLabel;
use onset_csv::{filter_usable, ForecastReader, ForecastTable};
use onset_report::report::{format_csv, render};
use onset_report::{find_cell, CellDetail, ClassifiedCell, LegendRow, OutputFormat, SummaryRow};
use onset_style::{Palette, PeriodStyle};
use period_classifier::{classify_all, PeriodSummary};
use test_utils::fixtures;

fn table(text: &str) -> ForecastTable {
    ForecastReader::from_reader(text.as_bytes())
        .read_table()
        .unwrap()
}

#[test]
fn test_table_view_csv_formats_probabilities() {
    let display = table(fixtures::csv::MESSY_TABLE).display_rows();
    let csv = format_csv(&display).unwrap();
    let lines: Vec<_> = csv.lines().collect();

    assert_eq!(lines[0], fixtures::csv::HEADER);
    assert_eq!(lines[1], "14.0,74.0,2024-05-27,,0.60,0.00,0.00,0.00");
    assert_eq!(lines[2], "16.0,74.0,2024-05-27,n/a,0.20,0.20,0.20,0.20");
    assert_eq!(lines.len(), 5);
}

#[test]
fn test_classify_view_json() {
    let rows = filter_usable(table(fixtures::csv::SMALL_TABLE).rows());
    let cells = ClassifiedCell::build_all(&rows, &Palette::default());
    let json = render(&cells, OutputFormat::Json, "").unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.as_array().unwrap().len(), 5);
    assert_eq!(parsed[0]["label"], "just_week1");
    assert_eq!(parsed[0]["color"], "#d73027");
    assert_eq!(parsed[3]["label"], "later");
    assert_eq!(parsed[4]["label"], "none");
    assert_eq!(parsed[0]["bounds"]["min_x"], 75.0);
    assert_eq!(parsed[0]["issued"], fixtures::time::ISSUE_LABEL);
}

#[test]
fn test_custom_palette_only_changes_presentation() {
    let rows = filter_usable(table(fixtures::csv::SMALL_TABLE).rows());

    let mut palette = Palette::empty();
    palette.set(PeriodLabel::None, PeriodStyle::new("white", "Unstyled"));

    let default_cells = ClassifiedCell::build_all(&rows, &Palette::default());
    let custom_cells = ClassifiedCell::build_all(&rows, &palette);

    for (a, b) in default_cells.iter().zip(&custom_cells) {
        assert_eq!(a.label, b.label);
        assert_eq!(a.mass, b.mass);
        assert_eq!(b.legend, "Unstyled");
    }
}

#[test]
fn test_summary_view() {
    let rows = filter_usable(table(fixtures::csv::SMALL_TABLE).rows());
    let summary = PeriodSummary::from_classifications(&classify_all(&rows));
    let view = SummaryRow::from_summary(&summary, &Palette::default());

    let counts: Vec<_> = view.iter().map(|r| (r.label, r.cells)).collect();
    assert_eq!(
        counts,
        vec![
            (PeriodLabel::JustWeek1, 1),
            (PeriodLabel::Weeks12, 1),
            (PeriodLabel::Weeks23, 0),
            (PeriodLabel::Weeks34, 1),
            (PeriodLabel::Weeks4Later, 0),
            (PeriodLabel::Later, 1),
            (PeriodLabel::None, 1),
        ]
    );
    assert_eq!(view[0].percent, 20.0);
}

#[test]
fn test_cell_lookup_and_detail() {
    let rows = table(fixtures::csv::SMALL_TABLE).rows();
    let row = find_cell(&rows, 19.5, 80.5).unwrap();
    let detail = CellDetail::new(row, &Palette::default()).unwrap();

    assert_eq!(detail.cell.label, PeriodLabel::Later);
    assert_eq!(detail.probabilities[4], ("later", Some(0.8)));

    let out = render(std::slice::from_ref(&detail), OutputFormat::Csv, "").unwrap();
    assert!(out.starts_with("window,probability\nweek1,0.02\n"));
}

#[test]
fn test_cell_lookup_skips_unusable_rows() {
    // Row at (?, 76.0) has no latitude; (18, 76) has no time.
    let rows = table(fixtures::csv::MESSY_TABLE).rows();
    assert!(find_cell(&rows, 18.0, 76.0).is_err());
    assert!(find_cell(&rows, 14.5, 74.5).is_ok());
}

#[test]
fn test_legend_table() {
    let legend = LegendRow::from_palette(&Palette::default());
    let out = render(&legend, OutputFormat::Table, "Legend").unwrap();
    assert!(out.starts_with("Legend\n"));
    for label in PeriodLabel::ALL {
        assert!(out.contains(label.key()));
    }
}
