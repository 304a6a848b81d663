//! Report configuration.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use onset_common::OnsetResult;
use onset_csv::{ForecastReader, ForecastTable};
use onset_style::Palette;
use tracing::info;

use crate::report::OutputFormat;

/// Where the forecast table is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Path(PathBuf),
    Stdin,
}

impl InputSource {
    /// `-` means stdin; anything else is a file path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            InputSource::Stdin
        } else {
            InputSource::Path(PathBuf::from(arg))
        }
    }

    /// Read the forecast table from this source.
    pub fn read_table(&self) -> OnsetResult<ForecastTable> {
        match self {
            InputSource::Path(path) => ForecastReader::from_path(path)?.read_table(),
            InputSource::Stdin => {
                let mut buf = Vec::new();
                io::stdin().lock().read_to_end(&mut buf)?;
                ForecastReader::from_reader(buf.as_slice()).read_table()
            }
        }
    }
}

/// Settings shared by every report command.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub palette: Palette,
    pub format: OutputFormat,
}

impl ReportConfig {
    /// Build the configuration, loading the palette file when one is given.
    pub fn load(palette_path: Option<&Path>, format: OutputFormat) -> OnsetResult<Self> {
        let palette = match palette_path {
            Some(path) => {
                let palette = Palette::from_file(path)?;
                info!(path = %path.display(), "Using custom palette");
                palette
            }
            None => Palette::default(),
        };

        Ok(Self { palette, format })
    }
}
