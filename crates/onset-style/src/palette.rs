//! Label to color/legend mapping.
//!
//! A palette may be partial. Any label it does not cover is drawn with the
//! `none` style, and if the palette has no `none` entry either, with the
//! built-in `none` style.

use std::collections::BTreeMap;
use std::path::Path;

use onset_common::{OnsetError, OnsetResult, PeriodLabel};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Color;

/// How one period label is presented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodStyle {
    pub color: Color,
    /// Legend text
    pub legend: String,
}

impl PeriodStyle {
    pub fn new(color: impl Into<Color>, legend: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            legend: legend.into(),
        }
    }
}

/// Presentation settings for every period label.
///
/// Serialized as a YAML mapping from label key to style:
///
/// ```yaml
/// just_week1:
///   color: "#d73027"
///   legend: Week 1
/// none:
///   color: lightgray
///   legend: No clear onset
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    styles: BTreeMap<PeriodLabel, PeriodStyle>,
}

impl Default for Palette {
    fn default() -> Self {
        let styles = PeriodLabel::ALL
            .iter()
            .map(|&label| (label, builtin_style(label)))
            .collect();
        Self { styles }
    }
}

fn builtin_style(label: PeriodLabel) -> PeriodStyle {
    match label {
        PeriodLabel::JustWeek1 => PeriodStyle::new("#d73027", "Week 1"),
        PeriodLabel::Weeks12 => PeriodStyle::new("#fc8d59", "Weeks 1-2"),
        PeriodLabel::Weeks23 => PeriodStyle::new("#fee08b", "Weeks 2-3"),
        PeriodLabel::Weeks34 => PeriodStyle::new("#d9ef8b", "Weeks 3-4"),
        PeriodLabel::Weeks4Later => PeriodStyle::new("#91cf60", "Week 4 or later"),
        PeriodLabel::Later => PeriodStyle::new("#1a9850", "Week 5 or later"),
        PeriodLabel::None => PeriodStyle::new("#bdbdbd", "No clear onset signal"),
    }
}

impl Palette {
    /// A palette with no entries; every label falls back to the built-in `none`.
    pub fn empty() -> Self {
        Self {
            styles: BTreeMap::new(),
        }
    }

    /// Load a palette from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> OnsetResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| OnsetError::Io(format!("{}: {}", path.display(), e)))?;
        let palette = Self::from_yaml(&content)?;
        debug!(path = %path.display(), entries = palette.styles.len(), "Loaded palette");
        Ok(palette)
    }

    /// Parse and validate a palette from YAML.
    pub fn from_yaml(yaml: &str) -> OnsetResult<Self> {
        let palette: Palette =
            serde_yaml::from_str(yaml).map_err(|e| OnsetError::Palette(e.to_string()))?;
        palette.validate()?;
        Ok(palette)
    }

    /// Check that every configured color is recognized.
    pub fn validate(&self) -> OnsetResult<()> {
        for (label, style) in &self.styles {
            if !style.color.is_valid() {
                return Err(OnsetError::Palette(format!(
                    "{}: unrecognized color '{}'",
                    label, style.color
                )));
            }
        }
        Ok(())
    }

    /// Set or replace the style of one label.
    pub fn set(&mut self, label: PeriodLabel, style: PeriodStyle) {
        self.styles.insert(label, style);
    }

    /// Whether the palette itself configures this label.
    pub fn contains(&self, label: PeriodLabel) -> bool {
        self.styles.contains_key(&label)
    }

    /// Style for a label, falling back to the `none` style.
    pub fn style_for(&self, label: PeriodLabel) -> PeriodStyle {
        self.styles
            .get(&label)
            .or_else(|| self.styles.get(&PeriodLabel::None))
            .cloned()
            .unwrap_or_else(|| builtin_style(PeriodLabel::None))
    }

    /// Legend entries in legend order.
    pub fn legend_entries(&self) -> Vec<(PeriodLabel, PeriodStyle)> {
        PeriodLabel::ALL
            .iter()
            .map(|&label| (label, self.style_for(label)))
            .collect()
    }
}
