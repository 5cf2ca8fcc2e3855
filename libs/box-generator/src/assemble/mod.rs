//! # Geometry Assembler
//!
//! Turns resolved dimensions into an open-top hollow box through a
//! [`CsgEngine`]:
//!
//! ```text
//! cuboid(outer) ─┐
//!                ├─ subtract ─ expand(fillet, Round, segments)? ─ Solid
//! cuboid(cavity) ┘
//! ```
//!
//! The cavity reaches exactly to the top of the outer box, so the
//! difference leaves a floor one wall thick and no lid.

use crate::engine::CsgEngine;
use crate::error::{CsgOperation, GeometryError};
use crate::params::ParameterSet;
use crate::report::DimensionReport;
use crate::resolve::ResolvedDimensions;
use box_mesh::CornerStyle;
use glam::DVec3;
use tracing::debug;

/// Builds the hollow box and its report.
///
/// When `edge_fillet` is zero the expansion call is skipped and the sharp
/// hollow solid is returned.
///
/// # Errors
///
/// Returns [`GeometryError::Engine`] naming the failed call when the engine
/// rejects any step.
pub fn assemble<E: CsgEngine>(
    engine: &E,
    params: &ParameterSet,
    resolved: &ResolvedDimensions,
    segments: u32,
) -> Result<(E::Solid, DimensionReport), GeometryError> {
    let height = resolved.actual_box_height;
    let wall = resolved.wall_thickness;

    let outer = engine
        .cuboid(
            DVec3::new(params.box_width, params.box_depth, height),
            DVec3::new(0.0, 0.0, height / 2.0),
        )
        .map_err(|e| GeometryError::engine(CsgOperation::Cuboid, e))?;

    let cavity = engine
        .cuboid(
            DVec3::new(
                resolved.inner_width,
                resolved.inner_depth,
                resolved.inner_height,
            ),
            DVec3::new(0.0, 0.0, wall + resolved.inner_height / 2.0),
        )
        .map_err(|e| GeometryError::engine(CsgOperation::Cuboid, e))?;

    let hollow = engine
        .subtract(outer, cavity)
        .map_err(|e| GeometryError::engine(CsgOperation::Subtract, e))?;

    let fillet = params.edge_fillet;
    let solid = if fillet > 0.0 {
        debug!(radius = fillet, segments, "rounding edges");
        engine
            .expand(hollow, fillet, CornerStyle::Round, segments)
            .map_err(|e| GeometryError::engine(CsgOperation::Expand, e))?
    } else {
        debug!("edge fillet is zero, keeping sharp edges");
        hollow
    };

    Ok((solid, DimensionReport::new(params, resolved)))
}

#[cfg(test)]
mod tests;
