//! Per-joint pipeline parameters.

use cartilage_curvature::CurvatureMeasure;
use cartilage_field::BlendOrder;
use serde::{Deserialize, Serialize};

/// Parameters shared by every extruded layer build.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerParams {
    /// Inner erosion depth (rings) fixing the interior thickness
    /// constraints; the blend fills the annulus between this erosion and
    /// the rim band.
    pub anchor_trimming_iterations: usize,
    /// Width of the rim taper band in millimeters of geodesic distance.
    pub bandwidth: f64,
    /// Order of the boundary-value blend.
    pub blend_order: BlendOrder,
    /// Fraction of the local joint space assigned as thickness when the
    /// opposing layers should leave a synovial gap.
    pub with_gap_thickness_factor: f64,
    /// Fraction assigned when the opposing layers should meet.
    pub without_gap_thickness_factor: f64,
}

impl Default for LayerParams {
    fn default() -> Self {
        Self {
            anchor_trimming_iterations: 4,
            bandwidth: 4.0,
            blend_order: BlendOrder::Biharmonic,
            with_gap_thickness_factor: 0.4,
            without_gap_thickness_factor: 0.5,
        }
    }
}

/// Parameters for the hip pipelines (acetabular and femoral layers).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct HipParams {
    /// Joint-space threshold for interface seeding, millimeters.
    pub gap_distance: f64,
    /// Rim rings peeled off the raw acetabular seed.
    pub trimming_iterations: usize,
    /// Rim rings peeled off the femoral seed before growth.
    pub femoral_trimming_iterations: usize,
    /// Curvature measure gating femoral growth.
    pub curvature_measure: CurvatureMeasure,
    /// Lower (exclusive) curvature bound for growth, 1/mm.
    pub min_curvature: f64,
    /// Upper (exclusive) curvature bound for growth, 1/mm.
    pub max_curvature: f64,
    /// Iteration cap for femoral growth.
    pub growth_cap: usize,
    /// Iteration cap for ear removal.
    pub ear_removal_cap: usize,
    /// Boundary smoothing blend factor.
    pub smoothing_factor: f64,
    /// Boundary smoothing passes.
    pub smoothing_iterations: usize,
    /// Fold repair retry cap.
    pub repair_cap: usize,
    /// Repair folded rims after smoothing.
    pub fix_boundary: bool,
    /// Cap the fovea with a cylinder of this uniform thickness, if set.
    pub fovea_thickness: Option<f64>,
    /// Shared layer-build parameters.
    pub layer: LayerParams,
}

impl Default for HipParams {
    fn default() -> Self {
        Self {
            gap_distance: 3.0,
            trimming_iterations: 3,
            femoral_trimming_iterations: 2,
            curvature_measure: CurvatureMeasure::Minimum,
            min_curvature: 0.0,
            max_curvature: 0.5,
            growth_cap: 200,
            ear_removal_cap: 30,
            smoothing_factor: 0.5,
            smoothing_iterations: 3,
            repair_cap: 10,
            fix_boundary: true,
            fovea_thickness: None,
            layer: LayerParams::default(),
        }
    }
}

/// Parameters for the seam joints (sacroiliac and pubic), where the two
/// refined bone patches themselves become the shell sheets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SeamJointParams {
    /// Joint-space threshold for interface seeding, millimeters.
    pub gap_distance: f64,
    /// Rim rings peeled off the primary-side region.
    pub trimming_iterations: usize,
    /// Rim rings peeled off the secondary-side region.
    pub secondary_trimming_iterations: usize,
    /// Iteration cap for ear removal.
    pub ear_removal_cap: usize,
    /// Fill enclosed holes in both regions.
    pub fill_gaps: bool,
    /// Boundary smoothing blend factor.
    pub smoothing_factor: f64,
    /// Boundary smoothing passes.
    pub smoothing_iterations: usize,
    /// Fold repair retry cap.
    pub repair_cap: usize,
    /// Midpoint subdivision passes on the merged shell.
    pub upsampling_iterations: usize,
}

impl Default for SeamJointParams {
    fn default() -> Self {
        Self {
            gap_distance: 4.0,
            trimming_iterations: 1,
            secondary_trimming_iterations: 1,
            ear_removal_cap: 30,
            fill_gaps: true,
            smoothing_factor: 0.5,
            smoothing_iterations: 3,
            repair_cap: 10,
            upsampling_iterations: 1,
        }
    }
}
