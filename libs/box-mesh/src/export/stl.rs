//! STL export, binary and ASCII.
//!
//! Binary layout:
//! - 80 bytes: header
//! - 4 bytes: u32 LE triangle count
//! - Per triangle (50 bytes each):
//!   - 12 bytes: normal vector (3 × f32 LE)
//!   - 36 bytes: 3 vertices (3 × 3 × f32 LE)
//!   - 2 bytes: attribute byte count (0u16)

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::{DEFAULT_STL_SOLID_NAME, STL_HEADER};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Size of the binary header.
const HEADER_LEN: usize = 80;
/// Bytes per binary facet record.
const FACET_LEN: usize = 50;

/// STL flavour to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StlFormat {
    /// Compact little-endian binary.
    #[default]
    Binary,
    /// Human-readable text.
    Ascii,
}

/// Serializes `mesh` in the requested format.
///
/// `name` is written to the binary header or as the ASCII solid name.
///
/// # Errors
///
/// [`MeshError::EmptyMesh`] for a mesh without triangles and
/// [`MeshError::ValidationFailed`] for out-of-range indices.
pub fn export_stl(mesh: &Mesh, format: StlFormat, name: &str) -> Result<Vec<u8>, MeshError> {
    match format {
        StlFormat::Binary => to_stl_binary(mesh, name),
        StlFormat::Ascii => to_stl_ascii(mesh, name).map(String::into_bytes),
    }
}

/// Binary STL bytes for `mesh`.
///
/// # Example
///
/// ```rust
/// use box_mesh::export::to_stl_binary;
/// use box_mesh::primitives::create_cuboid;
/// use glam::DVec3;
///
/// let mesh = create_cuboid(DVec3::ONE, DVec3::ZERO).unwrap();
/// let bytes = to_stl_binary(&mesh, "cube").unwrap();
/// assert_eq!(bytes.len(), 84 + 12 * 50);
/// ```
pub fn to_stl_binary(mesh: &Mesh, name: &str) -> Result<Vec<u8>, MeshError> {
    check_exportable(mesh)?;

    let tri_count = mesh.triangle_count();
    let mut buf = Vec::with_capacity(HEADER_LEN + 4 + tri_count * FACET_LEN);

    let header = if name.is_empty() {
        STL_HEADER.to_string()
    } else {
        format!("{STL_HEADER}: {name}")
    };
    let header_bytes = header.as_bytes();
    buf.extend_from_slice(&header_bytes[..header_bytes.len().min(HEADER_LEN)]);
    buf.resize(HEADER_LEN, 0u8);

    buf.extend_from_slice(&(tri_count as u32).to_le_bytes());

    for i in 0..tri_count {
        let corners = mesh.triangle_positions(i);
        for value in facet_normal(corners).to_array() {
            buf.extend_from_slice(&(value as f32).to_le_bytes());
        }
        for corner in corners {
            for value in corner.to_array() {
                buf.extend_from_slice(&(value as f32).to_le_bytes());
            }
        }
        buf.extend_from_slice(&0u16.to_le_bytes());
    }

    Ok(buf)
}

/// ASCII STL text for `mesh`.
///
/// # Example
///
/// ```rust
/// use box_mesh::export::to_stl_ascii;
/// use box_mesh::primitives::create_cuboid;
/// use glam::DVec3;
///
/// let mesh = create_cuboid(DVec3::ONE, DVec3::ZERO).unwrap();
/// let text = to_stl_ascii(&mesh, "cube").unwrap();
/// assert!(text.starts_with("solid cube\n"));
/// assert!(text.trim_end().ends_with("endsolid cube"));
/// ```
pub fn to_stl_ascii(mesh: &Mesh, name: &str) -> Result<String, MeshError> {
    check_exportable(mesh)?;

    let name = match name.split_whitespace().collect::<Vec<_>>().join("_") {
        name if name.is_empty() => DEFAULT_STL_SOLID_NAME.to_string(),
        name => name,
    };
    let mut out = String::with_capacity(64 + mesh.triangle_count() * 256);
    writeln!(out, "solid {name}")?;
    for i in 0..mesh.triangle_count() {
        let corners = mesh.triangle_positions(i);
        let n = facet_normal(corners);
        writeln!(out, "  facet normal {:e} {:e} {:e}", n.x, n.y, n.z)?;
        writeln!(out, "    outer loop")?;
        for v in corners {
            writeln!(out, "      vertex {:e} {:e} {:e}", v.x, v.y, v.z)?;
        }
        writeln!(out, "    endloop")?;
        writeln!(out, "  endfacet")?;
    }
    writeln!(out, "endsolid {name}")?;
    Ok(out)
}

fn check_exportable(mesh: &Mesh) -> Result<(), MeshError> {
    if mesh.is_empty() {
        return Err(MeshError::EmptyMesh);
    }
    let vertex_count = mesh.vertex_count() as u32;
    if let Some(index) = mesh
        .triangles()
        .iter()
        .flatten()
        .find(|&&index| index >= vertex_count)
    {
        return Err(MeshError::validation(format!(
            "index {index} out of range (vertex count = {vertex_count})"
        )));
    }
    Ok(())
}

/// Unit normal from the winding, zero for degenerate facets.
fn facet_normal([a, b, c]: [DVec3; 3]) -> DVec3 {
    (b - a).cross(c - a).normalize_or_zero()
}
