//! OBJ mesh I/O, mesh cleaning and measurement records.
//!
//! The synthesis core works exclusively in `f64` millimeters; this crate is
//! the boundary where segmentation exports in meters get scaled on the way
//! in and shells get scaled back on the way out. It also owns the cleanup
//! applied after every merge (vertex welding, duplicate-face removal,
//! compaction) and the per-subject JSON measurement table.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod clean;
mod error;
mod obj;
mod records;
mod unit;

pub use clean::{clean_mesh, clean_mesh_with_epsilon, CleanReport};
pub use error::{IoError, IoResult};
pub use obj::{read_obj, write_obj};
pub use records::MeasurementTable;
pub use unit::Unit;
