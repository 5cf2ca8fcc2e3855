//! # Export
//!
//! Serializers for tessellated meshes.

pub mod stl;

pub use stl::{export_stl, to_stl_ascii, to_stl_binary, StlFormat};
