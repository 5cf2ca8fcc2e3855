//! # Boolean Union Tests

use super::*;
use crate::primitives::create_cuboid;
use approx::assert_relative_eq;
use glam::DVec3;

/// Creates a cube of edge `size` centered at `pos`.
fn cube_at(pos: DVec3, size: f64) -> Mesh {
    create_cuboid(DVec3::splat(size), pos).unwrap()
}

// =============================================================================
// UNION TESTS
// =============================================================================

#[test]
fn test_union_empty_a() {
    let b = cube_at(DVec3::ZERO, 1.0);
    let result = union(&Mesh::new(), &b);
    assert_eq!(result, b);
}

#[test]
fn test_union_empty_b() {
    let a = cube_at(DVec3::ZERO, 1.0);
    let result = union(&a, &Mesh::new());
    assert_eq!(result, a);
}

#[test]
fn test_union_non_overlapping() {
    let a = cube_at(DVec3::new(-5.0, 0.0, 0.0), 1.0);
    let b = cube_at(DVec3::new(5.0, 0.0, 0.0), 1.0);
    let result = union(&a, &b);

    assert_relative_eq!(result.signed_volume(), 2.0, epsilon = 1e-9);
    let (min, max) = result.bounding_box().unwrap();
    assert_relative_eq!(min.x, -5.5);
    assert_relative_eq!(max.x, 5.5);
}

#[test]
fn test_union_overlapping_volume() {
    let a = cube_at(DVec3::ZERO, 2.0);
    let b = cube_at(DVec3::new(1.0, 1.0, 1.0), 2.0);
    let result = union(&a, &b);

    // 8 + 8 - 1 shared unit cube.
    assert_relative_eq!(result.signed_volume(), 15.0, epsilon = 1e-9);
    assert!(result.validate());
}

#[test]
fn test_union_contained_mesh_disappears() {
    let outer = cube_at(DVec3::ZERO, 4.0);
    let inner = cube_at(DVec3::ZERO, 1.0);
    let result = union(&outer, &inner);

    assert_relative_eq!(result.signed_volume(), 64.0, epsilon = 1e-9);
    let (min, max) = result.bounding_box().unwrap();
    assert_eq!(min, DVec3::splat(-2.0));
    assert_eq!(max, DVec3::splat(2.0));
}

#[test]
fn test_union_touching_cells_has_no_internal_faces() {
    // Two unit cubes sharing the x = 0 face.
    let a = cube_at(DVec3::new(-0.5, 0.0, 0.0), 1.0);
    let b = cube_at(DVec3::new(0.5, 0.0, 0.0), 1.0);
    let result = union(&a, &b);

    assert_relative_eq!(result.signed_volume(), 2.0, epsilon = 1e-9);
    // Outer surface of a 2x1x1 box only.
    assert_relative_eq!(result.surface_area(), 10.0, epsilon = 1e-9);
}

#[test]
fn test_union_all_folds_every_mesh() {
    let meshes: Vec<Mesh> = (0..4)
        .map(|i| cube_at(DVec3::new(i as f64, 0.0, 0.0), 1.0))
        .collect();
    let result = union_all(&meshes);

    assert_relative_eq!(result.signed_volume(), 4.0, epsilon = 1e-9);
    assert_relative_eq!(result.surface_area(), 18.0, epsilon = 1e-9);
}

#[test]
fn test_union_all_empty_and_single() {
    assert!(union_all(&[]).is_empty());
    let single = cube_at(DVec3::ZERO, 1.0);
    assert_eq!(union_all(std::slice::from_ref(&single)), single);
}

// =============================================================================
// EDGE MANIFOLD
// =============================================================================

#[test]
fn test_union_of_offset_cubes_is_closed() {
    let a = cube_at(DVec3::ZERO, 2.0);
    let b = cube_at(DVec3::new(1.0, 1.0, 1.0), 2.0);
    assert_eq!(union(&a, &b).open_edge_count(), 0);
}

#[test]
fn test_small_cube_on_large_face_is_closed() {
    // The small cube's face lies inside the large cube's face, so the large
    // face is split around it and its edges meet the small cube's corners.
    let large = cube_at(DVec3::ZERO, 2.0);
    let small = cube_at(DVec3::new(1.5, 0.0, 0.0), 1.0);
    let result = union(&large, &small);

    assert_relative_eq!(result.signed_volume(), 9.0, epsilon = 1e-9);
    assert_eq!(result.open_edge_count(), 0);
}

#[test]
fn test_union_all_of_stacked_slabs_is_closed() {
    // Floor plus two walls of different lengths, as a hollow box decomposes.
    let meshes = vec![
        create_cuboid(DVec3::new(4.0, 4.0, 1.0), DVec3::new(0.0, 0.0, 0.5)).unwrap(),
        create_cuboid(DVec3::new(1.0, 4.0, 3.0), DVec3::new(-1.5, 0.0, 2.5)).unwrap(),
        create_cuboid(DVec3::new(2.0, 1.0, 3.0), DVec3::new(0.0, 1.5, 2.5)).unwrap(),
    ];
    let result = union_all(&meshes);

    assert_relative_eq!(result.signed_volume(), 16.0 + 12.0 + 6.0, epsilon = 1e-9);
    assert_eq!(result.open_edge_count(), 0);
}
