//! Palette loading from files.

use onset_common::PeriodLabel;
use onset_style::{Palette, PeriodStyle};
use test_utils::temp_test_dir;

#[test]
fn test_palette_from_file() {
    let dir = temp_test_dir();
    let path = dir.path().join("palette.yaml");
    std::fs::write(
        &path,
        "just_week1:\n  color: \"#112233\"\n  legend: First week\nlater:\n  color: purple\n  legend: Late\n",
    )
    .unwrap();

    let palette = Palette::from_file(&path).unwrap();
    assert_eq!(
        palette.style_for(PeriodLabel::JustWeek1),
        PeriodStyle::new("#112233", "First week")
    );
    assert!(!palette.contains(PeriodLabel::None));
    // No `none` entry: falls back to the built-in one.
    assert_eq!(
        palette.style_for(PeriodLabel::Weeks23),
        Palette::default().style_for(PeriodLabel::None)
    );
}

#[test]
fn test_missing_palette_file() {
    let err = Palette::from_file("/nonexistent/palette.yaml").unwrap_err();
    assert_eq!(err.code(), "io");
}

#[test]
fn test_default_palette_yaml_roundtrip() {
    let yaml = serde_yaml::to_string(&Palette::default()).unwrap();
    assert!(yaml.contains("weeks4later"));
    assert_eq!(Palette::from_yaml(&yaml).unwrap(), Palette::default());
}

#[test]
fn test_legend_order_and_override() {
    let mut palette = Palette::default();
    palette.set(PeriodLabel::None, PeriodStyle::new("white", "Quiet"));

    let entries = palette.legend_entries();
    let labels: Vec<_> = entries.iter().map(|(label, _)| *label).collect();
    assert_eq!(labels, PeriodLabel::ALL.to_vec());
    assert_eq!(entries[6].1.legend, "Quiet");
}
