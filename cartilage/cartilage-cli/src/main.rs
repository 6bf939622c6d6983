//! Cartilage shell synthesis from the command line.
//!
//! One subcommand per joint: each takes two bone surfaces in Wavefront OBJ
//! form, runs the matching pipeline and writes the resulting shells plus a
//! per-subject measurement table.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod config;
mod run;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use cartilage_io::Unit;
use tracing_subscriber::EnvFilter;

/// Subject-specific cartilage synthesis for pelvic joints.
#[derive(Parser)]
#[command(name = "cartilage")]
#[command(about = "Synthesize cartilage shells between bone surfaces", long_about = None)]
#[command(version)]
struct Cli {
    /// Subject identifier used in file names and the measurement table
    #[arg(long, global = true, default_value = "subject")]
    subject: String,

    /// Directory the shells are written into
    #[arg(long, global = true, default_value = "out")]
    out_dir: PathBuf,

    /// JSON parameter file; defaults apply where it is silent
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Measurement table to update, created when missing
    #[arg(long, global = true)]
    records: Option<PathBuf>,

    /// Length unit of the input and output OBJ files
    #[arg(long, global = true, value_enum, default_value_t = UnitArg::Mm)]
    unit: UnitArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Acetabular and femoral layers between a pelvis and a femur
    Hip {
        /// Pelvis surface mesh (OBJ)
        pelvis: PathBuf,
        /// Femur surface mesh (OBJ)
        femur: PathBuf,
    },

    /// Sacroiliac shell between a sacrum and an ilium
    Sacroiliac {
        /// Sacrum surface mesh (OBJ)
        sacrum: PathBuf,
        /// Ilium surface mesh (OBJ)
        ilium: PathBuf,
    },

    /// Interpubic disc between the left and right pubis
    Pubic {
        /// Left pubis surface mesh (OBJ)
        left: PathBuf,
        /// Right pubis surface mesh (OBJ)
        right: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitArg {
    /// Millimeters
    Mm,
    /// Meters
    M,
}

impl From<UnitArg> for Unit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Mm => Unit::Millimeters,
            UnitArg::M => Unit::Meters,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let ctx = run::Context {
        subject: cli.subject,
        out_dir: cli.out_dir,
        records: cli.records,
        unit: cli.unit.into(),
        config: config::Config::load(cli.config.as_deref())?,
    };

    match cli.command {
        Commands::Hip { pelvis, femur } => run::hip(&ctx, &pelvis, &femur),
        Commands::Sacroiliac { sacrum, ilium } => run::sacroiliac(&ctx, &sacrum, &ilium),
        Commands::Pubic { left, right } => run::pubic(&ctx, &left, &right),
    }
}
