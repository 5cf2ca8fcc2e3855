//! # Parameter Set
//!
//! The ten user inputs of a hollow box, in millimetres.
//!
//! A [`ParameterSet`] is a plain value: every edit produces a new set
//! ([`ParameterSet::with`]) and dependent fields are brought back into range
//! by the pure [`reclamp`] function rather than by mutating shared state.

use config::constants::{
    DEFAULT_BOX_SIZE, DEFAULT_BUILD_VOLUME, DEFAULT_EDGE_FILLET, DEFAULT_LAYER_HEIGHT,
    DEFAULT_NOZZLE_SIZE, DEFAULT_WALL_THICKNESS,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// AXIS
// =============================================================================

/// One of the three box axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// X extent.
    Width,
    /// Y extent.
    Depth,
    /// Z extent.
    Height,
}

impl Axis {
    /// All axes in X, Y, Z order.
    pub const ALL: [Axis; 3] = [Axis::Width, Axis::Depth, Axis::Height];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::Width => "width",
            Axis::Depth => "depth",
            Axis::Height => "height",
        })
    }
}

// =============================================================================
// FIELD
// =============================================================================

/// Names one field of a [`ParameterSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// Extruder nozzle diameter.
    NozzleSize,
    /// Shell thickness.
    WallThickness,
    /// Print layer pitch.
    LayerHeight,
    /// Edge rounding radius.
    EdgeFillet,
    /// Printer envelope X.
    BuildVolumeWidth,
    /// Printer envelope Y.
    BuildVolumeDepth,
    /// Printer envelope Z.
    BuildVolumeHeight,
    /// Requested outer X.
    BoxWidth,
    /// Requested outer Y.
    BoxDepth,
    /// Requested outer Z.
    BoxHeight,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 10] = [
        Field::NozzleSize,
        Field::WallThickness,
        Field::LayerHeight,
        Field::EdgeFillet,
        Field::BuildVolumeWidth,
        Field::BuildVolumeDepth,
        Field::BuildVolumeHeight,
        Field::BoxWidth,
        Field::BoxDepth,
        Field::BoxHeight,
    ];

    /// Wire name, as used in JSON.
    pub fn key(self) -> &'static str {
        match self {
            Field::NozzleSize => "nozzleSize",
            Field::WallThickness => "wallThickness",
            Field::LayerHeight => "layerHeight",
            Field::EdgeFillet => "edgeFillet",
            Field::BuildVolumeWidth => "buildVolumeWidth",
            Field::BuildVolumeDepth => "buildVolumeDepth",
            Field::BuildVolumeHeight => "buildVolumeHeight",
            Field::BoxWidth => "boxWidth",
            Field::BoxDepth => "boxDepth",
            Field::BoxHeight => "boxHeight",
        }
    }

    /// Human-readable label, as shown next to form inputs.
    pub fn label(self) -> &'static str {
        match self {
            Field::NozzleSize => "Nozzle size",
            Field::WallThickness => "Wall thickness",
            Field::LayerHeight => "Layer height",
            Field::EdgeFillet => "Edge fillet",
            Field::BuildVolumeWidth => "Build volume width",
            Field::BuildVolumeDepth => "Build volume depth",
            Field::BuildVolumeHeight => "Build volume height",
            Field::BoxWidth => "Box width",
            Field::BoxDepth => "Box depth",
            Field::BoxHeight => "Box height",
        }
    }

    /// Outer box field along `axis`.
    pub fn box_extent(axis: Axis) -> Field {
        match axis {
            Axis::Width => Field::BoxWidth,
            Axis::Depth => Field::BoxDepth,
            Axis::Height => Field::BoxHeight,
        }
    }

    /// Build volume field along `axis`.
    pub fn build_volume_extent(axis: Axis) -> Field {
        match axis {
            Axis::Width => Field::BuildVolumeWidth,
            Axis::Depth => Field::BuildVolumeDepth,
            Axis::Height => Field::BuildVolumeHeight,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when parsing an unknown field name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown parameter field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

// =============================================================================
// PARAMETER SET
// =============================================================================

/// User inputs for one hollow box, in millimetres.
///
/// Serialized with camelCase keys; missing keys take the default value.
///
/// # Example
///
/// ```rust
/// use box_generator::{Field, ParameterSet};
///
/// let params = ParameterSet::default().with(Field::BoxWidth, 40.0);
/// assert_eq!(params.box_width, 40.0);
/// assert_eq!(params.get(Field::BoxWidth), 40.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParameterSet {
    /// Extruder nozzle diameter.
    pub nozzle_size: f64,
    /// Shell thickness of walls and floor.
    pub wall_thickness: f64,
    /// Print layer pitch.
    pub layer_height: f64,
    /// Edge rounding radius; 0 disables rounding.
    pub edge_fillet: f64,
    /// Printer envelope X.
    pub build_volume_width: f64,
    /// Printer envelope Y.
    pub build_volume_depth: f64,
    /// Printer envelope Z.
    pub build_volume_height: f64,
    /// Requested outer X.
    pub box_width: f64,
    /// Requested outer Y.
    pub box_depth: f64,
    /// Requested outer Z, before layer quantization.
    pub box_height: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            nozzle_size: DEFAULT_NOZZLE_SIZE,
            wall_thickness: DEFAULT_WALL_THICKNESS,
            layer_height: DEFAULT_LAYER_HEIGHT,
            edge_fillet: DEFAULT_EDGE_FILLET,
            build_volume_width: DEFAULT_BUILD_VOLUME,
            build_volume_depth: DEFAULT_BUILD_VOLUME,
            build_volume_height: DEFAULT_BUILD_VOLUME,
            box_width: DEFAULT_BOX_SIZE,
            box_depth: DEFAULT_BOX_SIZE,
            box_height: DEFAULT_BOX_SIZE,
        }
    }
}

impl ParameterSet {
    /// Reads one field.
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::NozzleSize => self.nozzle_size,
            Field::WallThickness => self.wall_thickness,
            Field::LayerHeight => self.layer_height,
            Field::EdgeFillet => self.edge_fillet,
            Field::BuildVolumeWidth => self.build_volume_width,
            Field::BuildVolumeDepth => self.build_volume_depth,
            Field::BuildVolumeHeight => self.build_volume_height,
            Field::BoxWidth => self.box_width,
            Field::BoxDepth => self.box_depth,
            Field::BoxHeight => self.box_height,
        }
    }

    /// Returns a new set with one field replaced.
    #[must_use]
    pub fn with(mut self, field: Field, value: f64) -> Self {
        let slot = match field {
            Field::NozzleSize => &mut self.nozzle_size,
            Field::WallThickness => &mut self.wall_thickness,
            Field::LayerHeight => &mut self.layer_height,
            Field::EdgeFillet => &mut self.edge_fillet,
            Field::BuildVolumeWidth => &mut self.build_volume_width,
            Field::BuildVolumeDepth => &mut self.build_volume_depth,
            Field::BuildVolumeHeight => &mut self.build_volume_height,
            Field::BoxWidth => &mut self.box_width,
            Field::BoxDepth => &mut self.box_depth,
            Field::BoxHeight => &mut self.box_height,
        };
        *slot = value;
        self
    }

    /// Requested outer extent along `axis`.
    pub fn box_extent(&self, axis: Axis) -> f64 {
        self.get(Field::box_extent(axis))
    }

    /// Build volume extent along `axis`.
    pub fn build_volume_extent(&self, axis: Axis) -> f64 {
        self.get(Field::build_volume_extent(axis))
    }
}

// =============================================================================
// RECLAMP
// =============================================================================

/// Brings dependent fields back into range after an edit.
///
/// The edge fillet is clamped into `[nozzle_size, wall_thickness]`. A fillet
/// of 0 (rounding disabled), a non-finite value, or an empty interval
/// (nozzle wider than the wall) is left untouched for the validator to
/// report.
///
/// # Example
///
/// ```rust
/// use box_generator::{reclamp, Field, ParameterSet};
///
/// let edited = ParameterSet::default().with(Field::WallThickness, 0.8);
/// let edited = edited.with(Field::EdgeFillet, 1.2);
/// assert_eq!(reclamp(&edited).edge_fillet, 0.8);
/// ```
#[must_use]
pub fn reclamp(params: &ParameterSet) -> ParameterSet {
    let (low, high) = (params.nozzle_size, params.wall_thickness);
    let fillet = params.edge_fillet;
    let clampable = fillet != 0.0
        && fillet.is_finite()
        && low.is_finite()
        && high.is_finite()
        && low <= high;

    if clampable {
        params.with(Field::EdgeFillet, fillet.clamp(low, high))
    } else {
        *params
    }
}

#[cfg(test)]
mod tests;
