//! # Mesh Operations
//!
//! Operations on meshes. Currently the BSP union used to fuse the per-cell
//! meshes of a solid into one surface.

pub mod boolean;

pub use boolean::{union, union_all};
