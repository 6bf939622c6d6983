//! ASCII OBJ read and write.

use crate::error::{IoError, IoResult};
use crate::unit::Unit;
use cartilage_types::{Point3, SurfaceMesh};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

fn parse_coordinate(token: &str, line: usize) -> IoResult<f64> {
    token.parse().map_err(|_| IoError::Parse {
        line,
        message: format!("bad coordinate `{token}`"),
    })
}

/// Resolve an OBJ vertex reference (`7`, `7/1`, `7//3`, `-1`) to 0-based.
fn resolve_index(token: &str, count: usize, line: usize) -> IoResult<u32> {
    let raw = token.split('/').next().unwrap_or(token);
    let index: i64 = raw.parse().map_err(|_| IoError::Parse {
        line,
        message: format!("bad face reference `{token}`"),
    })?;
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    // OBJ files with more than i64/u32 vertices are out of scope.
    let resolved = if index > 0 {
        index - 1
    } else if index < 0 {
        count as i64 + index
    } else {
        -1
    };
    if resolved < 0 || resolved as usize >= count {
        return Err(IoError::FaceIndexOutOfRange {
            line,
            index,
            count,
        });
    }
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    Ok(resolved as u32)
}

/// Read a triangle mesh from an ASCII OBJ file.
///
/// Vertex positions and faces are honored; normals, texture coordinates,
/// groups and materials are ignored. Polygon faces are fan-triangulated.
/// Coordinates are converted to millimeters per `unit`.
///
/// # Errors
///
/// Filesystem errors, malformed lines, and out-of-range face references.
pub fn read_obj(path: &Path, unit: Unit) -> IoResult<SurfaceMesh> {
    let reader = BufReader::new(File::open(path)?);
    let scale = unit.scale_to_mm();
    let mut mesh = SurfaceMesh::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let number = number + 1;
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => {
                let mut coordinate = |_axis: usize| -> IoResult<f64> {
                    let token = tokens.next().ok_or_else(|| IoError::Parse {
                        line: number,
                        message: "vertex with fewer than 3 coordinates".into(),
                    })?;
                    parse_coordinate(token, number)
                };
                let x = coordinate(0)?;
                let y = coordinate(1)?;
                let z = coordinate(2)?;
                mesh.vertices.push(Point3::new(x, y, z) * scale);
            }
            Some("f") => {
                let refs: Vec<u32> = tokens
                    .map(|t| resolve_index(t, mesh.vertices.len(), number))
                    .collect::<IoResult<_>>()?;
                if refs.len() < 3 {
                    return Err(IoError::Parse {
                        line: number,
                        message: "face with fewer than 3 vertices".into(),
                    });
                }
                for i in 1..refs.len() - 1 {
                    mesh.faces.push([refs[0], refs[i], refs[i + 1]]);
                }
            }
            _ => {}
        }
    }

    info!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "read OBJ"
    );
    Ok(mesh)
}

/// Write a triangle mesh as ASCII OBJ, converting from millimeters to
/// `unit`.
///
/// # Errors
///
/// Filesystem errors.
pub fn write_obj(path: &Path, mesh: &SurfaceMesh, unit: Unit) -> IoResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    let scale = 1.0 / unit.scale_to_mm();

    for v in &mesh.vertices {
        writeln!(writer, "v {} {} {}", v.x * scale, v.y * scale, v.z * scale)?;
    }
    for &[a, b, c] in &mesh.faces {
        writeln!(writer, "f {} {} {}", a + 1, b + 1, c + 1)?;
    }
    writer.flush()?;
    info!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "wrote OBJ"
    );
    Ok(())
}
