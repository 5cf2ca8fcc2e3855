//! # Primitives
//!
//! Mesh generation for the cell shapes a solid tessellates into.

pub mod cuboid;
pub mod rounded_cuboid;

pub use cuboid::create_cuboid;
pub use rounded_cuboid::create_rounded_cuboid;
