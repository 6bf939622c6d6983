//! Shared core of the seam joints.
//!
//! The sacroiliac and pubic joints have no room for an extruded layer: the
//! opposing bone patches sit so close that the cartilage shell is simply the
//! two refined patches themselves, joined rim-to-rim by a swept wall. The
//! pipelines differ only in how the second patch is seeded.

use crate::error::PipelineResult;
use crate::params::SeamJointParams;
use crate::stages::{patch_mesh, qc_patch, refine_seed};
use cartilage_io::clean_mesh;
use cartilage_sdf::SurfaceDistance;
use cartilage_topology::longest_boundary_loop;
use cartilage_types::{FaceSet, SurfaceMesh};
use cartilage_wall::{sweep_wall, upsample};
use tracing::info;

/// A finished seam-joint shell plus its named measurements.
#[derive(Debug, Clone)]
pub struct SeamOutput {
    /// The closed cartilage shell spanning the joint.
    pub shell: SurfaceMesh,
    /// Named scalar measurements for the subject's record.
    pub measurements: Vec<(String, f64)>,
}

/// Refine the two seeds, quality-control both patches and close them into
/// one shell with a swept wall between their rims.
pub(crate) fn build_seam(
    primary: &SurfaceMesh,
    secondary: &SurfaceMesh,
    primary_seed: &FaceSet,
    secondary_seed: &FaceSet,
    params: &SeamJointParams,
    label: &str,
) -> PipelineResult<SeamOutput> {
    let primary_region = refine_seed(
        primary,
        primary_seed,
        params.trimming_iterations,
        params.ear_removal_cap,
        params.fill_gaps,
    )?;
    let secondary_region = refine_seed(
        secondary,
        secondary_seed,
        params.secondary_trimming_iterations,
        params.ear_removal_cap,
        params.fill_gaps,
    )?;

    let primary_sdf = SurfaceDistance::new(primary)?;
    let secondary_sdf = SurfaceDistance::new(secondary)?;
    let primary_patch = qc_patch(
        &patch_mesh(primary, &primary_region),
        &primary_sdf,
        params.smoothing_factor,
        params.smoothing_iterations,
        params.repair_cap,
    )?;
    let secondary_patch = qc_patch(
        &patch_mesh(secondary, &secondary_region),
        &secondary_sdf,
        params.smoothing_factor,
        params.smoothing_iterations,
        params.repair_cap,
    )?;

    // one sheet faces each bone, so the primary sheet is flipped
    let mut shell = primary_patch.flipped();
    #[allow(clippy::cast_possible_truncation)]
    // Vertex counts fit u32 throughout the workspace.
    let offset = shell.vertex_count() as u32;
    shell.merge(&secondary_patch);

    let bottom = longest_boundary_loop(&primary_patch.faces)?;
    let top: Vec<u32> = longest_boundary_loop(&secondary_patch.faces)?
        .into_iter()
        .map(|v| v + offset)
        .collect();
    shell
        .faces
        .extend(sweep_wall(&shell.vertices, &bottom, &top)?);

    let shell = upsample(&shell, params.upsampling_iterations);
    let (shell, report) = clean_mesh(&shell);
    info!(
        joint = label,
        faces = shell.face_count(),
        welded = report.welded_vertices,
        "closed seam shell"
    );

    let joint_space = min_patch_distance(&primary_patch, &secondary_sdf);
    let measurements = vec![
        (format!("{label}_joint_space_min"), joint_space),
        (format!("{label}_area_primary"), primary_patch.surface_area()),
        (
            format!("{label}_area_secondary"),
            secondary_patch.surface_area(),
        ),
    ];
    Ok(SeamOutput {
        shell,
        measurements,
    })
}

/// Smallest distance from any referenced patch vertex to the opposing bone.
fn min_patch_distance(patch: &SurfaceMesh, opposing: &SurfaceDistance) -> f64 {
    let referenced: Vec<_> = patch
        .faces
        .iter()
        .flatten()
        .map(|&v| patch.vertices[v as usize])
        .collect();
    opposing
        .distances(&referenced)
        .into_iter()
        .fold(f64::INFINITY, f64::min)
}
