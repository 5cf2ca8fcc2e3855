//! # Cuboid Primitive
//!
//! Generates the mesh of a sharp rectangular prism.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::EPSILON_TOLERANCE;
use glam::DVec3;

/// Creates a rectangular prism mesh centered at `center`.
///
/// # Arguments
///
/// * `size` - Dimensions [x, y, z]
/// * `center` - Center point of the prism
///
/// # Returns
///
/// A mesh with 8 vertices and 12 triangles (2 per face).
///
/// # Example
///
/// ```rust
/// use box_mesh::primitives::create_cuboid;
/// use glam::DVec3;
///
/// let mesh = create_cuboid(DVec3::splat(10.0), DVec3::splat(5.0)).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_cuboid(size: DVec3, center: DVec3) -> Result<Mesh, MeshError> {
    if !size.is_finite() || size.min_element() <= EPSILON_TOLERANCE {
        return Err(MeshError::degenerate(format!(
            "cuboid size must be positive: {size:?}"
        )));
    }

    let mut mesh = Mesh::with_capacity(8, 12);
    let half = size / 2.0;
    let (min, max) = (center - half, center + half);

    // Bottom face (z = min.z)
    let v0 = mesh.add_vertex(DVec3::new(min.x, min.y, min.z)); // 0: left-front-bottom
    let v1 = mesh.add_vertex(DVec3::new(max.x, min.y, min.z)); // 1: right-front-bottom
    let v2 = mesh.add_vertex(DVec3::new(max.x, max.y, min.z)); // 2: right-back-bottom
    let v3 = mesh.add_vertex(DVec3::new(min.x, max.y, min.z)); // 3: left-back-bottom

    // Top face (z = max.z)
    let v4 = mesh.add_vertex(DVec3::new(min.x, min.y, max.z)); // 4: left-front-top
    let v5 = mesh.add_vertex(DVec3::new(max.x, min.y, max.z)); // 5: right-front-top
    let v6 = mesh.add_vertex(DVec3::new(max.x, max.y, max.z)); // 6: right-back-top
    let v7 = mesh.add_vertex(DVec3::new(min.x, max.y, max.z)); // 7: left-back-top

    // Counter-clockwise seen from outside.
    let faces = [
        [v0, v2, v1], // bottom
        [v0, v3, v2],
        [v4, v5, v6], // top
        [v4, v6, v7],
        [v0, v1, v5], // front
        [v0, v5, v4],
        [v2, v3, v7], // back
        [v2, v7, v6],
        [v3, v0, v4], // left
        [v3, v4, v7],
        [v1, v2, v6], // right
        [v1, v6, v5],
    ];
    for [a, b, c] in faces {
        mesh.add_triangle(a, b, c);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cuboid_counts() {
        let mesh = create_cuboid(DVec3::splat(10.0), DVec3::ZERO).unwrap();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn test_cuboid_centered_bounds() {
        let mesh = create_cuboid(DVec3::new(10.0, 20.0, 30.0), DVec3::new(0.0, 0.0, 15.0)).unwrap();
        let (min, max) = mesh.bounding_box().unwrap();
        assert_eq!(min, DVec3::new(-5.0, -10.0, 0.0));
        assert_eq!(max, DVec3::new(5.0, 10.0, 30.0));
    }

    #[test]
    fn test_cuboid_faces_point_outward() {
        let center = DVec3::new(1.0, -2.0, 3.0);
        let mesh = create_cuboid(DVec3::new(2.0, 4.0, 6.0), center).unwrap();
        for i in 0..mesh.triangle_count() {
            let [a, b, c] = mesh.triangle_positions(i);
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(normal.dot(centroid - center) > 0.0, "triangle {i} faces inward");
        }
        assert_relative_eq!(mesh.signed_volume(), 48.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cuboid_validates() {
        let mesh = create_cuboid(DVec3::splat(10.0), DVec3::ZERO).unwrap();
        assert!(mesh.validate());
    }

    #[test]
    fn test_cuboid_invalid_size() {
        assert!(create_cuboid(DVec3::new(0.0, 10.0, 10.0), DVec3::ZERO).is_err());
        assert!(create_cuboid(DVec3::new(-5.0, 10.0, 10.0), DVec3::ZERO).is_err());
        assert!(create_cuboid(DVec3::new(f64::NAN, 10.0, 10.0), DVec3::ZERO).is_err());
    }
}
