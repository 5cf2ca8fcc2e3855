//! Error types for box generation.

use crate::validate::Violation;
use std::fmt;
use thiserror::Error;

/// CSG engine call that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CsgOperation {
    /// Axis-aligned box construction.
    Cuboid,
    /// Boolean difference.
    Subtract,
    /// Rounded outward offset.
    Expand,
    /// Conversion of the solid to a triangle mesh.
    Tessellate,
    /// Serialization of the mesh.
    Export,
}

impl fmt::Display for CsgOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CsgOperation::Cuboid => "cuboid",
            CsgOperation::Subtract => "subtract",
            CsgOperation::Expand => "expand",
            CsgOperation::Tessellate => "tessellate",
            CsgOperation::Export => "export",
        })
    }
}

/// Resolved or assembled geometry is unusable.
///
/// Raised after validation has passed, either because layer quantization
/// shrank the box below what the walls need, or because the CSG engine
/// rejected a call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// The requested height holds no complete layer.
    #[error("Box height {box_height} is less than one layer ({layer_height})")]
    DegenerateHeight {
        /// Requested outer height.
        box_height: f64,
        /// Layer pitch.
        layer_height: f64,
    },

    /// The layer count does not fit the report.
    #[error("Layer count for box height {box_height} and layer height {layer_height} is out of range")]
    LayerCountOverflow {
        /// Requested outer height.
        box_height: f64,
        /// Layer pitch.
        layer_height: f64,
    },

    /// The cavity has no volume after quantization.
    #[error("Wall thickness too large for resolved dimensions")]
    NonPositiveCavity {
        /// Cavity X extent.
        inner_width: f64,
        /// Cavity Y extent.
        inner_depth: f64,
        /// Cavity Z extent.
        inner_height: f64,
    },

    /// The CSG engine failed.
    #[error("CSG {operation} failed: {message}")]
    Engine {
        /// Call that failed.
        operation: CsgOperation,
        /// Engine's own description.
        message: String,
    },
}

impl GeometryError {
    /// Wraps an engine error raised by `operation`.
    pub fn engine(operation: CsgOperation, error: impl fmt::Display) -> Self {
        Self::Engine {
            operation,
            message: error.to_string(),
        }
    }
}

/// Why a generation request produced no box.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    /// The parameter set was rejected; the resolver never ran.
    #[error("{} invalid parameter(s)", .0.len())]
    Invalid(Vec<Violation>),

    /// Validation passed but the geometry could not be built.
    #[error("Model generation failed: {0}")]
    Geometry(#[from] GeometryError),
}

impl GenerationError {
    /// User-facing error list: every violation, or the single geometry failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use box_generator::{generate, Field, ParameterSet};
    ///
    /// let params = ParameterSet::default().with(Field::BoxWidth, 400.0);
    /// let err = generate(&params).unwrap_err();
    /// assert_eq!(err.messages(), vec!["Box width exceeds build volume width"]);
    /// ```
    pub fn messages(&self) -> Vec<String> {
        match self {
            GenerationError::Invalid(violations) => {
                violations.iter().map(ToString::to_string).collect()
            }
            GenerationError::Geometry(_) => vec![self.to_string()],
        }
    }

    /// Violations, when the request was rejected by the validator.
    pub fn violations(&self) -> &[Violation] {
        match self {
            GenerationError::Invalid(violations) => violations,
            GenerationError::Geometry(_) => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Axis, Field};

    #[test]
    fn test_invalid_lists_every_violation() {
        let err = GenerationError::Invalid(vec![
            Violation::WallTooLarge(Axis::Width),
            Violation::NotPositive(Field::BoxHeight),
        ]);
        assert_eq!(
            err.messages(),
            vec![
                "Wall thickness is too large for box width",
                "Box height must be greater than 0",
            ]
        );
        assert_eq!(err.violations().len(), 2);
    }

    #[test]
    fn test_geometry_is_a_single_message() {
        let err = GenerationError::from(GeometryError::NonPositiveCavity {
            inner_width: 1.0,
            inner_depth: 1.0,
            inner_height: -0.2,
        });
        assert_eq!(
            err.messages(),
            vec!["Model generation failed: Wall thickness too large for resolved dimensions"]
        );
        assert!(err.violations().is_empty());
    }

    #[test]
    fn test_engine_error_keeps_the_engine_message() {
        let err = GeometryError::engine(CsgOperation::Expand, "segments must be a multiple of 4");
        assert_eq!(
            err.to_string(),
            "CSG expand failed: segments must be a multiple of 4"
        );
    }

    #[test]
    fn test_errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GenerationError>();
    }
}
