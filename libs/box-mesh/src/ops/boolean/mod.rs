//! # Boolean Union (CSG)
//!
//! Fuses overlapping closed meshes into one surface using BSP trees.
//!
//! ## Algorithm
//!
//! Based on the csg.js algorithm by Evan Wallace:
//! `A.clipTo(B); B.clipTo(A); B.invert(); B.clipTo(A); B.invert(); combine`.
//! The invert/clip/invert pass removes faces of B that are coplanar with
//! faces of A, so touching cells do not leave internal walls behind.
//!
//! ## Example
//!
//! ```rust
//! use box_mesh::ops::boolean::union;
//! use box_mesh::primitives::create_cuboid;
//! use glam::DVec3;
//!
//! let a = create_cuboid(DVec3::splat(2.0), DVec3::ZERO).unwrap();
//! let b = create_cuboid(DVec3::splat(2.0), DVec3::new(1.0, 0.0, 0.0)).unwrap();
//! let fused = union(&a, &b);
//! let (min, max) = fused.bounding_box().unwrap();
//! assert_eq!(min.x, -1.0);
//! assert_eq!(max.x, 2.0);
//! ```

mod bsp;
mod plane;
mod polygon;
mod weld;

use crate::Mesh;
use bsp::BspNode;
use polygon::Polygon;
use weld::polygons_to_mesh;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Compute the union of two closed meshes.
pub fn union(a: &Mesh, b: &Mesh) -> Mesh {
    let polys_a = mesh_to_polygons(a);
    let polys_b = mesh_to_polygons(b);

    if polys_a.is_empty() {
        return b.clone();
    }
    if polys_b.is_empty() {
        return a.clone();
    }

    polygons_to_mesh(&union_polygons(polys_a, polys_b))
}

/// Compute the union of any number of closed meshes, left to right.
///
/// Intermediate results stay as BSP polygons; vertices are welded once, on
/// the final surface.
pub fn union_all(meshes: &[Mesh]) -> Mesh {
    match meshes {
        [] => Mesh::new(),
        [only] => only.clone(),
        _ => {
            let polygons = meshes
                .iter()
                .map(mesh_to_polygons)
                .fold(Vec::new(), union_polygons);
            polygons_to_mesh(&polygons)
        }
    }
}

// =============================================================================
// CONVERSION HELPERS
// =============================================================================

fn union_polygons(polys_a: Vec<Polygon>, polys_b: Vec<Polygon>) -> Vec<Polygon> {
    if polys_a.is_empty() {
        return polys_b;
    }
    if polys_b.is_empty() {
        return polys_a;
    }

    let mut bsp_a = BspNode::new(polys_a);
    let mut bsp_b = BspNode::new(polys_b);

    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();

    let mut result_polys = bsp_a.all_polygons();
    result_polys.extend(bsp_b.all_polygons());
    result_polys
}

/// Each non-degenerate triangle becomes a polygon.
fn mesh_to_polygons(mesh: &Mesh) -> Vec<Polygon> {
    (0..mesh.triangle_count())
        .filter_map(|i| Polygon::from_vertices(mesh.triangle_positions(i).to_vec()))
        .collect()
}

#[cfg(test)]
mod tests;
