//! Hip joint pipeline: acetabular and femoral cartilage layers.
//!
//! The acetabular layer is seeded directly from the joint space; the femoral
//! layer is seeded by transferring the acetabular region onto the femoral
//! head and growing it under a curvature gate, which stops at the head-neck
//! junction. Each layer is built twice, once leaving a synovial gap and once
//! filling the full joint space.

use crate::error::PipelineResult;
use crate::fovea::cap_fovea;
use crate::params::HipParams;
use crate::stages::{build_layer, patch_mesh, qc_patch, refine_seed, LayerBuild};
use cartilage_region::{
    expand_vertices, fill_gaps, grow_region, select_interface_with_opposite, GrowConfig,
};
use cartilage_sdf::SurfaceDistance;
use cartilage_types::{FaceSet, SurfaceMesh};
use tracing::{info, warn};

/// Everything a hip run produces.
#[derive(Debug, Clone)]
pub struct HipOutput {
    /// Acetabular shell leaving a synovial gap.
    pub acetabular_with_gap: SurfaceMesh,
    /// Acetabular shell filling its share of the joint space.
    pub acetabular_without_gap: SurfaceMesh,
    /// Femoral shell leaving a synovial gap.
    pub femoral_with_gap: SurfaceMesh,
    /// Femoral shell filling its share of the joint space.
    pub femoral_without_gap: SurfaceMesh,
    /// Uniform plug over the fovea, when requested.
    pub fovea_cap: Option<SurfaceMesh>,
    /// Named scalar measurements for the subject's record.
    pub measurements: Vec<(String, f64)>,
}

/// Synthesize both hip cartilage layers between a pelvis and a femur.
///
/// # Errors
///
/// Fails fast when seeding or refinement empties a region, when a blend
/// solve does not converge, or when a fovea cap is requested but the grown
/// femoral region encloses no island.
pub fn synthesize(
    pelvis: &SurfaceMesh,
    femur: &SurfaceMesh,
    params: &HipParams,
) -> PipelineResult<HipOutput> {
    info!(
        pelvis_faces = pelvis.face_count(),
        femur_faces = femur.face_count(),
        "hip synthesis"
    );
    let pelvis_sdf = SurfaceDistance::new(pelvis)?;
    let femur_sdf = SurfaceDistance::new(femur)?;

    // acetabular side: seed from the joint space, refine, fill the lunate notch
    let (seed, opposite) =
        select_interface_with_opposite(pelvis, femur, params.gap_distance)?;
    let acetabular = refine_seed(
        pelvis,
        &seed,
        params.trimming_iterations,
        params.ear_removal_cap,
        true,
    )?;

    // femoral side: transfer, refine, grow over the head, close enclosed holes
    let femoral_seed = expand_vertices(femur, &opposite)?;
    let femoral_base = refine_seed(
        femur,
        &femoral_seed,
        params.femoral_trimming_iterations,
        params.ear_removal_cap,
        false,
    )?;
    let gate = GrowConfig::default()
        .with_measure(params.curvature_measure)
        .with_bounds(params.min_curvature, params.max_curvature)
        .with_max_iterations(params.growth_cap);
    let (grown, growth) = grow_region(femur, &femoral_base, &gate)?;
    if !growth.is_converged() {
        warn!("femoral growth hit its iteration cap");
    }
    let femoral = close_femoral_region(femur, &grown, params)?;

    let mut acetabular_patch = patch_mesh(pelvis, &acetabular);
    let mut femoral_patch = patch_mesh(femur, &femoral);
    if params.fix_boundary {
        acetabular_patch = qc_patch(
            &acetabular_patch,
            &pelvis_sdf,
            params.smoothing_factor,
            params.smoothing_iterations,
            params.repair_cap,
        )?;
        femoral_patch = qc_patch(
            &femoral_patch,
            &femur_sdf,
            params.smoothing_factor,
            params.smoothing_iterations,
            params.repair_cap,
        )?;
    }

    let with_gap = params.layer.with_gap_thickness_factor;
    let without_gap = params.layer.without_gap_thickness_factor;
    let acetabular_gap = build_layer(&acetabular_patch, &femur_sdf, with_gap, &params.layer)?;
    let acetabular_full =
        build_layer(&acetabular_patch, &femur_sdf, without_gap, &params.layer)?;
    let femoral_gap = build_layer(&femoral_patch, &pelvis_sdf, with_gap, &params.layer)?;
    let femoral_full = build_layer(&femoral_patch, &pelvis_sdf, without_gap, &params.layer)?;

    let fovea_cap = match params.fovea_thickness {
        Some(thickness) => Some(cap_fovea(femur, &femoral, thickness)?),
        None => None,
    };

    let measurements = measurements(&acetabular_gap, &acetabular_full, &femoral_gap, &femoral_full);
    Ok(HipOutput {
        acetabular_with_gap: acetabular_gap.shell,
        acetabular_without_gap: acetabular_full.shell,
        femoral_with_gap: femoral_gap.shell,
        femoral_without_gap: femoral_full.shell,
        fovea_cap,
        measurements,
    })
}

/// Post-growth cleanup of the femoral region: absorb holes the growth left
/// around the fovea rim, then shave any ears the absorption created.
fn close_femoral_region(
    femur: &SurfaceMesh,
    grown: &FaceSet,
    params: &HipParams,
) -> PipelineResult<FaceSet> {
    // the fovea itself stays a hole; only gaps not meant to survive close
    if params.fovea_thickness.is_some() {
        return Ok(grown.clone());
    }
    let (filled, _) = fill_gaps(femur, grown)?;
    Ok(filled)
}

fn measurements(
    acetabular_gap: &LayerBuild,
    acetabular_full: &LayerBuild,
    femoral_gap: &LayerBuild,
    femoral_full: &LayerBuild,
) -> Vec<(String, f64)> {
    vec![
        (
            "hip_joint_space_min".into(),
            acetabular_gap.min_joint_space,
        ),
        ("acetabular_area".into(), acetabular_gap.area),
        ("femoral_area".into(), femoral_gap.area),
        (
            "acetabular_thickness_mean_with_gap".into(),
            acetabular_gap.mean_thickness,
        ),
        (
            "acetabular_thickness_mean_without_gap".into(),
            acetabular_full.mean_thickness,
        ),
        (
            "femoral_thickness_mean_with_gap".into(),
            femoral_gap.mean_thickness,
        ),
        (
            "femoral_thickness_mean_without_gap".into(),
            femoral_full.mean_thickness,
        ),
    ]
}
