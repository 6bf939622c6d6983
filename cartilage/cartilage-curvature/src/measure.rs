//! Curvature measure selection.

use serde::{Deserialize, Serialize};

/// Which scalar curvature to evaluate.
///
/// Selected per joint in the pipeline configuration: the femoral head grows
/// its region under a `Minimum`-curvature gate, other sites differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurvatureMeasure {
    /// Gaussian curvature, the product of the principal curvatures.
    Gaussian,
    /// Mean curvature, the average of the principal curvatures.
    Mean,
    /// Smaller principal curvature.
    Minimum,
    /// Larger principal curvature.
    Maximum,
}
