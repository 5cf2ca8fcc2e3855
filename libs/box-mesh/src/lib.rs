//! # Box Mesh
//!
//! Browser-safe CSG engine for box-shaped solids.
//!
//! ## Architecture
//!
//! ```text
//! Solid::cuboid ─┐
//!                ├─ difference (exact cells) ─ expand (Minkowski) ─ to_mesh ─ STL
//! Solid::cuboid ─┘
//! ```
//!
//! ## Algorithms
//!
//! All algorithms are browser-safe (pure Rust, no native dependencies):
//! - **Difference**: box-minus-box slab decomposition
//! - **Expansion**: Minkowski sum per convex cell, distributed over the union
//! - **Tessellation**: rounded cuboid meshes fused by BSP union (csg.js)
//! - **Export**: binary and ASCII STL
//!
//! ## Usage
//!
//! ```rust
//! use box_mesh::{export::StlFormat, CornerStyle, Solid};
//! use glam::DVec3;
//!
//! let outer = Solid::cuboid(DVec3::splat(20.0), DVec3::new(0.0, 0.0, 10.0))?;
//! let cavity = Solid::cuboid(DVec3::new(18.0, 18.0, 19.0), DVec3::new(0.0, 0.0, 10.5))?;
//! let shell = outer.difference(&cavity)?.expand(0.5, CornerStyle::Round, 8)?;
//! let mesh = shell.to_mesh()?;
//! let stl = box_mesh::export::export_stl(&mesh, StlFormat::Binary, "shell")?;
//! assert_eq!(stl.len(), 84 + 50 * mesh.triangle_count());
//! # Ok::<(), box_mesh::MeshError>(())
//! ```

pub mod aabb;
pub mod error;
pub mod export;
pub mod mesh;
pub mod ops;
pub mod primitives;
pub mod solid;

pub use aabb::Aabb;
pub use error::MeshError;
pub use mesh::Mesh;
pub use solid::{CornerStyle, Rounding, Solid};
