//! # Rounded Cuboid Primitive
//!
//! Minkowski sum of a box and a latitude/longitude sampled ball.
//!
//! The ball is split into four quadrants around Z and two hemispheres. Each
//! quadrant patch is translated to its box corner, so neighbouring patches
//! are joined by flat strips that form the box faces. The result is convex,
//! closed, and its extremes on every axis are exactly the box grown by the
//! radius.
//!
//! ```text
//!   row 0          poles at the four top corners (z = max + r)
//!   ...            upper hemisphere, patch offset to z = max
//!   row n | n+1    equator, vertical strip between z = max and z = min
//!   ...            lower hemisphere, patch offset to z = min
//!   last row       poles at the four bottom corners (z = min - r)
//! ```

use crate::aabb::Aabb;
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::solid::check_round_segments;
use config::constants::EPSILON_TOLERANCE;
use glam::DVec3;
use std::f64::consts::FRAC_PI_2;

/// Creates the mesh of `cell` expanded by a ball of `radius`.
///
/// `segments` samples the full circle and must be a multiple of four; a
/// segment count of four yields an octahedral ball (chamfered edges).
///
/// # Example
///
/// ```rust
/// use box_mesh::primitives::create_rounded_cuboid;
/// use box_mesh::Aabb;
/// use glam::DVec3;
///
/// let cell = Aabb::new(DVec3::ZERO, DVec3::splat(10.0));
/// let mesh = create_rounded_cuboid(&cell, 1.0, 16).unwrap();
/// let (min, max) = mesh.bounding_box().unwrap();
/// assert_eq!(min, DVec3::splat(-1.0));
/// assert_eq!(max, DVec3::splat(11.0));
/// ```
pub fn create_rounded_cuboid(cell: &Aabb, radius: f64, segments: u32) -> Result<Mesh, MeshError> {
    let size = cell.size();
    if !size.is_finite() || size.min_element() <= EPSILON_TOLERANCE {
        return Err(MeshError::degenerate(format!(
            "rounded cuboid size must be positive: {size:?}"
        )));
    }
    if !radius.is_finite() || radius <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "rounding radius must be positive: {radius}"
        )));
    }
    let quarter = (check_round_segments(segments)? / 4) as usize;

    let columns = 4 * (quarter + 1);
    let hemisphere_rows = quarter + 1;
    let rows = 2 * hemisphere_rows;
    let mut mesh = Mesh::with_capacity(rows * columns, 2 * rows * columns + 4);

    let (min, max) = (cell.min, cell.max);
    let corners = [(max.x, max.y), (min.x, max.y), (min.x, min.y), (max.x, min.y)];

    for row in 0..rows {
        // (cos, sin) of the polar angle measured from +Z.
        let (cos_phi, sin_phi, z) = if row < hemisphere_rows {
            let (c, s) = quarter_arc(row, quarter);
            (c, s, max.z)
        } else {
            let (c, s) = quarter_arc(row - hemisphere_rows, quarter);
            (-s, c, min.z)
        };

        for (quadrant, &(x, y)) in corners.iter().enumerate() {
            for step in 0..=quarter {
                let (c, s) = quarter_arc(step, quarter);
                let (cos_theta, sin_theta) = match quadrant {
                    0 => (c, s),
                    1 => (-s, c),
                    2 => (-c, -s),
                    _ => (s, -c),
                };
                let direction = DVec3::new(sin_phi * cos_theta, sin_phi * sin_theta, cos_phi);
                mesh.add_vertex(DVec3::new(x, y, z) + direction * radius);
            }
        }
    }

    let index = |row: usize, column: usize| (row * columns + column % columns) as u32;

    for row in 0..rows - 1 {
        for column in 0..columns {
            let a = index(row, column);
            let b = index(row + 1, column);
            let c = index(row + 1, column + 1);
            let d = index(row, column + 1);
            mesh.add_triangle_checked(a, b, c);
            mesh.add_triangle_checked(a, c, d);
        }
    }

    let pole = |row: usize, quadrant: usize| index(row, quadrant * (quarter + 1));
    let (top, bottom) = (0, rows - 1);
    mesh.add_triangle_checked(pole(top, 0), pole(top, 1), pole(top, 2));
    mesh.add_triangle_checked(pole(top, 0), pole(top, 2), pole(top, 3));
    mesh.add_triangle_checked(pole(bottom, 0), pole(bottom, 2), pole(bottom, 1));
    mesh.add_triangle_checked(pole(bottom, 0), pole(bottom, 3), pole(bottom, 2));

    Ok(mesh)
}

/// `(cos, sin)` of `step / quarter` of a right angle, exact at both ends.
fn quarter_arc(step: usize, quarter: usize) -> (f64, f64) {
    if step == 0 {
        (1.0, 0.0)
    } else if step == quarter {
        (0.0, 1.0)
    } else {
        let (s, c) = (step as f64 / quarter as f64 * FRAC_PI_2).sin_cos();
        (c, s)
    }
}
