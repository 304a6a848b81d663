//! Error types for the onset forecast crates.

use thiserror::Error;

/// Result type alias using OnsetError.
pub type OnsetResult<T> = Result<T, OnsetError>;

/// Primary error type for loading, styling and reporting forecasts.
///
/// Classification itself never fails; these errors come from the
/// collaborators around it.
#[derive(Debug, Error)]
pub enum OnsetError {
    // === Input Errors ===
    #[error("Failed to read input: {0}")]
    Io(String),

    #[error("Malformed CSV: {0}")]
    Csv(String),

    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    // === Presentation Errors ===
    #[error("Invalid palette: {0}")]
    Palette(String),

    #[error("Unknown period label: {0}")]
    InvalidLabel(String),

    // === Lookup Errors ===
    #[error("No forecast cell contains lat={lat}, lon={lon}")]
    CellNotFound { lat: f64, lon: f64 },
}

impl OnsetError {
    /// Short machine-readable code, used as a structured log field.
    pub fn code(&self) -> &'static str {
        match self {
            OnsetError::Io(_) => "io",
            OnsetError::Csv(_) => "csv",
            OnsetError::InvalidParameter { .. } => "invalid_parameter",
            OnsetError::Palette(_) => "palette",
            OnsetError::InvalidLabel(_) => "invalid_label",
            OnsetError::CellNotFound { .. } => "cell_not_found",
        }
    }

    /// Whether the error was caused by user input rather than the environment.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, OnsetError::Io(_))
    }
}

impl From<std::io::Error> for OnsetError {
    fn from(err: std::io::Error) -> Self {
        OnsetError::Io(err.to_string())
    }
}

impl From<csv::Error> for OnsetError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            return OnsetError::Io(err.to_string());
        }
        OnsetError::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for OnsetError {
    fn from(err: serde_json::Error) -> Self {
        OnsetError::Io(format!("JSON error: {}", err))
    }
}
