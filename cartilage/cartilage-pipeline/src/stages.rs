//! Shared pipeline stages composed by the joint pipelines.

use crate::error::PipelineResult;
use crate::params::LayerParams;
use cartilage_extrude::extrude_along_normals;
use cartilage_field::{assign_thickness, blend_field, clamp_field, taper_ramp};
use cartilage_io::clean_mesh;
use cartilage_quality::{
    repair_folds, smooth_boundary, SmoothConfig, DEFAULT_FOLD_THRESHOLD,
};
use cartilage_region::{fill_gaps, keep_largest, remove_ears, trim_boundary};
use cartilage_sdf::SurfaceDistance;
use cartilage_topology::{boundary_vertices, longest_boundary_loop};
use cartilage_types::{FaceSet, SurfaceMesh};
use tracing::{info, warn};

/// A raw seed refined into a usable base region: rim rings trimmed, stray
/// islands dropped, ears shaved to a fixed point, and optionally enclosed
/// holes filled back in.
///
/// # Errors
///
/// Any refinement step that empties the region fails fast.
pub fn refine_seed(
    mesh: &SurfaceMesh,
    seed: &FaceSet,
    trim_iterations: usize,
    ear_cap: usize,
    fill: bool,
) -> PipelineResult<FaceSet> {
    let trimmed = trim_boundary(mesh, seed, trim_iterations)?;
    let largest = keep_largest(mesh, &trimmed)?;
    let (shaved, ear_status) = remove_ears(mesh, &largest, ear_cap)?;
    if !ear_status.is_converged() {
        warn!("ear removal hit its iteration cap");
    }
    let region = if fill {
        let (filled, _) = fill_gaps(mesh, &shaved)?;
        filled
    } else {
        shaved
    };
    info!(
        seed = seed.len(),
        refined = region.len(),
        "refined seed region"
    );
    Ok(region)
}

/// A region lifted into a standalone patch mesh.
///
/// The parent vertex array is kept whole so region indices, fields and
/// boundary loops all stay valid; cleanup at the end of a pipeline compacts
/// the unused vertices away.
#[must_use]
pub fn patch_mesh(mesh: &SurfaceMesh, region: &FaceSet) -> SurfaceMesh {
    SurfaceMesh::from_parts(mesh.vertices.clone(), mesh.gather_faces(region))
}

/// Smooth a patch rim against its bone surface, then repair any folds the
/// smoothing could not remove.
///
/// # Errors
///
/// Propagates smoothing failures; a repair cap hit is logged, not fatal.
pub fn qc_patch(
    patch: &SurfaceMesh,
    snap_to: &SurfaceDistance,
    factor: f64,
    iterations: usize,
    repair_cap: usize,
) -> PipelineResult<SurfaceMesh> {
    let config = SmoothConfig::default()
        .with_factor(factor)
        .with_iterations(iterations);
    let vertices = smooth_boundary(&patch.vertices, &patch.faces, snap_to, &config)?;
    let (faces, status) =
        repair_folds(&vertices, &patch.faces, DEFAULT_FOLD_THRESHOLD, repair_cap);
    if !status.is_converged() {
        warn!("fold repair hit its retry cap, rim may stay folded");
    }
    Ok(SurfaceMesh::from_parts(vertices, faces))
}

/// Close the volume between a base patch and its extruded twin.
///
/// The base is flipped so its normals face away from the extrusion, the two
/// sheets are merged, their shared rim loop is bridged with a uniform wall,
/// and the result is cleaned. Where the extrusion height reaches zero at the
/// rim the wall collapses and welding closes the seam instead.
///
/// # Errors
///
/// Fails if the patch has no boundary loop or the loop is degenerate.
pub fn close_extruded_shell(
    patch: &SurfaceMesh,
    extruded: &SurfaceMesh,
) -> PipelineResult<SurfaceMesh> {
    let rim = longest_boundary_loop(&patch.faces)?;
    #[allow(clippy::cast_possible_truncation)]
    // Vertex counts fit u32 throughout the workspace.
    let offset = patch.vertex_count() as u32;

    let mut shell = patch.flipped();
    shell.merge(extruded);
    shell
        .faces
        .extend(cartilage_wall::uniform_wall(&rim, offset)?);
    let (shell, report) = clean_mesh(&shell);
    info!(
        faces = shell.face_count(),
        welded = report.welded_vertices,
        "closed extruded shell"
    );
    Ok(shell)
}

/// A finished extruded layer plus the figures the measurement table wants.
#[derive(Debug, Clone)]
pub struct LayerBuild {
    /// The closed cartilage shell.
    pub shell: SurfaceMesh,
    /// Blended per-vertex extrusion field over the patch vertex array.
    pub field: Vec<f64>,
    /// Patch area in square millimeters.
    pub area: f64,
    /// Smallest sampled joint space in millimeters.
    pub min_joint_space: f64,
    /// Mean extrusion height over the patch vertices, millimeters.
    pub mean_thickness: f64,
}

/// Build one extruded cartilage layer from a base patch.
///
/// The interior of the patch (eroded by `anchor_trimming_iterations` rings)
/// is pinned to a share of the measured joint space, the rim band is pinned
/// to a quarter-sine taper that reaches zero on the rim itself, and a
/// harmonic or biharmonic blend fills the annulus in between. The blended
/// field is clamped to the largest sampled thickness, extruded, and closed
/// into a watertight shell.
///
/// # Errors
///
/// Empty regions, failed solves and degenerate rims all fail fast.
pub fn build_layer(
    patch: &SurfaceMesh,
    opposing: &SurfaceDistance,
    thickness_factor: f64,
    params: &LayerParams,
) -> PipelineResult<LayerBuild> {
    let all = FaceSet::from_indices(0..patch.face_count());
    let eroded = trim_boundary(patch, &all, params.anchor_trimming_iterations)?;
    let anchors = patch.subset_vertices(&eroded);

    let profile = assign_thickness(patch, opposing, &anchors, thickness_factor)?;
    let min_thickness = profile.min_assigned().unwrap_or(0.0);

    let rim = boundary_vertices(&patch.faces);
    let (band, taper) = taper_ramp(patch, &rim, min_thickness, params.bandwidth)?;

    let mut constraints: Vec<(u32, f64)> = band.iter().copied().zip(taper).collect();
    for &v in &anchors {
        if !band.contains(&v) {
            constraints.push((v, profile.get(v)));
        }
    }

    let field = blend_field(
        &patch.vertices,
        &patch.faces,
        &constraints,
        params.blend_order,
    )?;
    let field = clamp_field(&field, profile.max_assigned());

    let extruded = extrude_along_normals(patch, &field)?;
    let shell = close_extruded_shell(patch, &extruded)?;

    let patch_vertices = patch.subset_vertices(&all);
    #[allow(clippy::cast_precision_loss)]
    // Patch vertex counts are far below f64 mantissa range.
    let mean_thickness = patch_vertices
        .iter()
        .map(|&v| field[v as usize])
        .sum::<f64>()
        / patch_vertices.len().max(1) as f64;

    Ok(LayerBuild {
        shell,
        field,
        area: patch.surface_area(),
        min_joint_space: if thickness_factor > 0.0 {
            min_thickness / thickness_factor
        } else {
            0.0
        },
        mean_thickness,
    })
}
