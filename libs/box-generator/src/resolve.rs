//! # Dimension Resolver
//!
//! Quantizes the requested height to whole print layers and derives the
//! cavity. Only called on parameter sets that passed validation.

use crate::error::GeometryError;
use crate::params::ParameterSet;
use config::constants::LAYER_EPSILON;
use serde::{Deserialize, Serialize};

/// As-built dimensions derived from a valid [`ParameterSet`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDimensions {
    /// Height after dropping the partial top layer.
    pub actual_box_height: f64,
    /// Whole layers in the box.
    pub layer_count: u32,
    /// Cavity X extent.
    pub inner_width: f64,
    /// Cavity Y extent.
    pub inner_depth: f64,
    /// Cavity Z extent, measured from the floor to the open top.
    pub inner_height: f64,
    /// Shell thickness, echoed from the parameters.
    pub wall_thickness: f64,
}

/// Resolves `params` with the default layer tolerance.
///
/// # Errors
///
/// - [`GeometryError::DegenerateHeight`] when no whole layer fits
/// - [`GeometryError::LayerCountOverflow`] when the count is not representable
/// - [`GeometryError::NonPositiveCavity`] when the walls leave no cavity
///
/// # Example
///
/// ```rust
/// use box_generator::{resolve, ParameterSet};
///
/// let resolved = resolve(&ParameterSet::default())?;
/// assert_eq!(resolved.layer_count, 127);
/// assert_eq!(resolved.actual_box_height, 25.4);
/// # Ok::<(), box_generator::GeometryError>(())
/// ```
pub fn resolve(params: &ParameterSet) -> Result<ResolvedDimensions, GeometryError> {
    resolve_with_tolerance(params, LAYER_EPSILON)
}

/// Resolves `params`, treating quotients within `tolerance` layers of an
/// integer as that integer.
///
/// # Errors
///
/// See [`resolve`].
pub fn resolve_with_tolerance(
    params: &ParameterSet,
    tolerance: f64,
) -> Result<ResolvedDimensions, GeometryError> {
    let box_height = params.box_height;
    let layer_height = params.layer_height;

    let layers = (box_height / layer_height + tolerance).floor();
    if !layers.is_finite() || layers > f64::from(u32::MAX) {
        return Err(GeometryError::LayerCountOverflow {
            box_height,
            layer_height,
        });
    }
    if layers < 1.0 {
        return Err(GeometryError::DegenerateHeight {
            box_height,
            layer_height,
        });
    }

    let layer_count = layers as u32;
    let mut actual_box_height = layers * layer_height;
    if (actual_box_height - box_height).abs() <= tolerance * layer_height {
        actual_box_height = box_height;
    }

    let wall = params.wall_thickness;
    let inner_width = params.box_width - 2.0 * wall;
    let inner_depth = params.box_depth - 2.0 * wall;
    let inner_height = actual_box_height - wall;

    let cavity_ok = [inner_width, inner_depth, inner_height]
        .into_iter()
        .all(|extent| extent > 0.0);
    if !cavity_ok {
        return Err(GeometryError::NonPositiveCavity {
            inner_width,
            inner_depth,
            inner_height,
        });
    }

    Ok(ResolvedDimensions {
        actual_box_height,
        layer_count,
        inner_width,
        inner_depth,
        inner_height,
        wall_thickness: wall,
    })
}
