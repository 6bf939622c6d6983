//! Length units at the I/O boundary.

use serde::{Deserialize, Serialize};

/// Unit of the coordinates in a mesh file.
///
/// The core always works in millimeters; meter-based files are scaled on
/// read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Coordinates are millimeters, used as-is.
    #[default]
    Millimeters,
    /// Coordinates are meters, scaled by 1000 on read.
    Meters,
}

impl Unit {
    /// Factor converting file coordinates to millimeters.
    #[must_use]
    pub const fn scale_to_mm(self) -> f64 {
        match self {
            Self::Millimeters => 1.0,
            Self::Meters => 1000.0,
        }
    }
}
