//! As-built dimension report.

use crate::params::ParameterSet;
use crate::resolve::ResolvedDimensions;
use serde::{Deserialize, Serialize};

/// Dimensions of the box that was actually built.
///
/// Consumers (preview, export) read sizes from here rather than from the
/// requested parameters, because the height may have been quantized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionReport {
    /// Outer X extent.
    pub width: f64,
    /// Outer Y extent.
    pub depth: f64,
    /// Outer Z extent after layer quantization.
    pub height: f64,
    /// Shell thickness.
    pub wall_thickness: f64,
    /// Whole print layers.
    pub layer_count: u32,
    /// Cavity X extent.
    pub inner_width: f64,
    /// Cavity Y extent.
    pub inner_depth: f64,
    /// Cavity Z extent.
    pub inner_height: f64,
}

impl DimensionReport {
    /// Combines the requested footprint with the resolved dimensions.
    pub fn new(params: &ParameterSet, resolved: &ResolvedDimensions) -> Self {
        Self {
            width: params.box_width,
            depth: params.box_depth,
            height: resolved.actual_box_height,
            wall_thickness: resolved.wall_thickness,
            layer_count: resolved.layer_count,
            inner_width: resolved.inner_width,
            inner_depth: resolved.inner_depth,
            inner_height: resolved.inner_height,
        }
    }

    /// Dimension annotations for a 2D preview: width, height, depth, wall.
    ///
    /// # Example
    ///
    /// ```rust
    /// use box_generator::{generate, ParameterSet};
    ///
    /// let built = generate(&ParameterSet::default())?;
    /// assert_eq!(
    ///     built.report.preview_labels(),
    ///     ["W: 25.4mm", "H: 25.4mm", "D: 25.4mm", "Wall: 1mm"]
    /// );
    /// # Ok::<(), box_generator::GenerationError>(())
    /// ```
    pub fn preview_labels(&self) -> [String; 4] {
        [
            format!("W: {}mm", self.width),
            format!("H: {}mm", self.height),
            format!("D: {}mm", self.depth),
            format!("Wall: {}mm", self.wall_thickness),
        ]
    }
}
