//! # Validator
//!
//! Decides whether a [`ParameterSet`] describes a printable box.
//!
//! Every check runs; the result lists all violations in a fixed order so
//! callers can show them together and tests can compare them directly.

use crate::params::{Axis, Field, ParameterSet};
use thiserror::Error;

/// Fields that must be strictly positive, in reporting order.
const POSITIVE_FIELDS: [Field; 9] = [
    Field::WallThickness,
    Field::LayerHeight,
    Field::NozzleSize,
    Field::BuildVolumeWidth,
    Field::BuildVolumeDepth,
    Field::BuildVolumeHeight,
    Field::BoxWidth,
    Field::BoxDepth,
    Field::BoxHeight,
];

/// One violated parameter constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    /// A size that must be strictly positive is zero, negative or NaN.
    #[error("{} must be greater than 0", .0.label())]
    NotPositive(Field),

    /// Edge fillet below zero.
    #[error("Edge fillet must not be negative")]
    NegativeFillet,

    /// Two walls do not fit across the box (one wall for height).
    #[error("Wall thickness is too large for box {0}")]
    WallTooLarge(Axis),

    /// The nozzle cannot lay down a wall this thin.
    #[error("Wall thickness must be at least the nozzle size")]
    WallBelowNozzle,

    /// The nozzle cannot trace a fillet this small.
    #[error("Edge fillet must be at least the nozzle size")]
    FilletBelowNozzle,

    /// Fillet would eat through the shell.
    #[error("Edge fillet should not exceed wall thickness")]
    FilletExceedsWall,

    /// The box does not fit in the printer.
    #[error("Box {0} exceeds build volume {0}")]
    ExceedsBuildVolume(Axis),
}

impl Violation {
    /// Parameter field the violation is reported against.
    pub fn field(&self) -> Field {
        match self {
            Violation::NotPositive(field) => *field,
            Violation::NegativeFillet
            | Violation::FilletBelowNozzle
            | Violation::FilletExceedsWall => Field::EdgeFillet,
            Violation::WallTooLarge(_) | Violation::WallBelowNozzle => Field::WallThickness,
            Violation::ExceedsBuildVolume(axis) => Field::box_extent(*axis),
        }
    }
}

/// Strict positivity that also rejects NaN.
fn is_positive(value: f64) -> bool {
    value > 0.0
}

/// Checks every constraint and returns the violations in reporting order.
///
/// An empty result means the set is valid.
///
/// # Example
///
/// ```rust
/// use box_generator::{validate, Field, ParameterSet, Violation};
///
/// assert!(validate(&ParameterSet::default()).is_empty());
///
/// let thick = ParameterSet::default().with(Field::EdgeFillet, 2.0);
/// assert_eq!(validate(&thick), vec![Violation::FilletExceedsWall]);
/// ```
pub fn validate(params: &ParameterSet) -> Vec<Violation> {
    let mut violations: Vec<Violation> = POSITIVE_FIELDS
        .into_iter()
        .filter(|&field| !is_positive(params.get(field)))
        .map(Violation::NotPositive)
        .collect();

    let wall = params.wall_thickness;
    let nozzle = params.nozzle_size;
    let fillet = params.edge_fillet;

    if fillet.is_nan() || fillet < 0.0 {
        violations.push(Violation::NegativeFillet);
    }

    if 2.0 * wall >= params.box_width {
        violations.push(Violation::WallTooLarge(Axis::Width));
    }
    if 2.0 * wall >= params.box_depth {
        violations.push(Violation::WallTooLarge(Axis::Depth));
    }
    if wall >= params.box_height {
        violations.push(Violation::WallTooLarge(Axis::Height));
    }

    if wall < nozzle {
        violations.push(Violation::WallBelowNozzle);
    }
    if fillet < nozzle {
        violations.push(Violation::FilletBelowNozzle);
    }
    if fillet > wall {
        violations.push(Violation::FilletExceedsWall);
    }

    violations.extend(
        Axis::ALL
            .into_iter()
            .filter(|&axis| params.box_extent(axis) > params.build_volume_extent(axis))
            .map(Violation::ExceedsBuildVolume),
    );

    violations
}

#[cfg(test)]
mod tests;
