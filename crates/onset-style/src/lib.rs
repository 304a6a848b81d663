//! Presentation of onset period labels.
//!
//! Maps each [`PeriodLabel`] to a display color and legend text. The
//! classifier never sees this mapping; the label is the only thing passed
//! between them.
//!
//! [`PeriodLabel`]: onset_common::PeriodLabel

pub mod color;
pub mod palette;

pub use color::Color;
pub use palette::{Palette, PeriodStyle};
