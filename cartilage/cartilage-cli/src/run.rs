//! Subcommand execution: load meshes, run a pipeline, write the results.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use cartilage_io::{read_obj, write_obj, MeasurementTable, Unit};
use cartilage_pipeline::{hip, pubic, sacroiliac};
use cartilage_types::SurfaceMesh;
use tracing::info;

use crate::config::Config;

/// Everything shared by the subcommands.
pub struct Context {
    pub subject: String,
    pub out_dir: PathBuf,
    pub records: Option<PathBuf>,
    pub unit: Unit,
    pub config: Config,
}

pub fn hip(ctx: &Context, pelvis: &Path, femur: &Path) -> Result<()> {
    let pelvis = load(pelvis, ctx.unit)?;
    let femur = load(femur, ctx.unit)?;

    let out = hip::synthesize(&pelvis, &femur, &ctx.config.hip)?;
    save_shell(ctx, "acetabular_with_gap", &out.acetabular_with_gap)?;
    save_shell(ctx, "acetabular_without_gap", &out.acetabular_without_gap)?;
    save_shell(ctx, "femoral_with_gap", &out.femoral_with_gap)?;
    save_shell(ctx, "femoral_without_gap", &out.femoral_without_gap)?;
    if let Some(cap) = &out.fovea_cap {
        save_shell(ctx, "fovea_cap", cap)?;
    }
    save_measurements(ctx, &out.measurements)
}

pub fn sacroiliac(ctx: &Context, sacrum: &Path, ilium: &Path) -> Result<()> {
    let sacrum = load(sacrum, ctx.unit)?;
    let ilium = load(ilium, ctx.unit)?;

    let out = sacroiliac::synthesize(&sacrum, &ilium, &ctx.config.sacroiliac)?;
    save_shell(ctx, "sacroiliac", &out.shell)?;
    save_measurements(ctx, &out.measurements)
}

pub fn pubic(ctx: &Context, left: &Path, right: &Path) -> Result<()> {
    let left = load(left, ctx.unit)?;
    let right = load(right, ctx.unit)?;

    let out = pubic::synthesize(&left, &right, &ctx.config.pubic)?;
    save_shell(ctx, "pubic", &out.shell)?;
    save_measurements(ctx, &out.measurements)
}

fn load(path: &Path, unit: Unit) -> Result<SurfaceMesh> {
    let mesh =
        read_obj(path, unit).with_context(|| format!("reading {}", path.display()))?;
    info!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "loaded surface"
    );
    Ok(mesh)
}

fn save_shell(ctx: &Context, name: &str, shell: &SurfaceMesh) -> Result<()> {
    fs::create_dir_all(&ctx.out_dir)
        .with_context(|| format!("creating {}", ctx.out_dir.display()))?;
    let path = ctx.out_dir.join(format!("{}_{name}.obj", ctx.subject));
    write_obj(&path, shell, ctx.unit)
        .with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), faces = shell.face_count(), "wrote shell");
    Ok(())
}

fn save_measurements(ctx: &Context, measurements: &[(String, f64)]) -> Result<()> {
    let Some(path) = &ctx.records else {
        for (name, value) in measurements {
            info!(name = %name, value = *value, "measurement");
        }
        return Ok(());
    };
    let mut table = MeasurementTable::load(path)
        .with_context(|| format!("loading {}", path.display()))?;
    for (name, value) in measurements {
        table.record(&ctx.subject, name, *value);
    }
    table
        .save(path)
        .with_context(|| format!("saving {}", path.display()))
}
