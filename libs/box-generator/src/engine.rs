//! # CSG Engine
//!
//! The three solid-modeling calls the assembler makes. The generator treats
//! the returned solids as opaque and only moves them between calls.

use box_mesh::{CornerStyle, MeshError, Solid};
use glam::DVec3;
use std::fmt;

/// Solid-modeling backend used by the assembler.
pub trait CsgEngine {
    /// Opaque solid handle.
    type Solid;
    /// Engine failure; its message is carried into [`crate::GeometryError`].
    type Error: fmt::Display;

    /// Axis-aligned box of `size` centered at `center`.
    fn cuboid(&self, size: DVec3, center: DVec3) -> Result<Self::Solid, Self::Error>;

    /// Boolean difference `base - tool`. Both operands are consumed.
    fn subtract(&self, base: Self::Solid, tool: Self::Solid) -> Result<Self::Solid, Self::Error>;

    /// Outward offset by `radius`, with edges shaped by `corners` and curved
    /// corners sampled with `segments` steps per full turn.
    fn expand(
        &self,
        solid: Self::Solid,
        radius: f64,
        corners: CornerStyle,
        segments: u32,
    ) -> Result<Self::Solid, Self::Error>;
}

/// [`CsgEngine`] backed by the in-workspace `box-mesh` kernel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeshEngine;

impl CsgEngine for MeshEngine {
    type Solid = Solid;
    type Error = MeshError;

    fn cuboid(&self, size: DVec3, center: DVec3) -> Result<Solid, MeshError> {
        Solid::cuboid(size, center)
    }

    fn subtract(&self, base: Solid, tool: Solid) -> Result<Solid, MeshError> {
        base.difference(&tool)
    }

    fn expand(
        &self,
        solid: Solid,
        radius: f64,
        corners: CornerStyle,
        segments: u32,
    ) -> Result<Solid, MeshError> {
        solid.expand(radius, corners, segments)
    }
}
