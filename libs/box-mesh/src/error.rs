//! # Mesh Errors
//!
//! Error types for solid construction, tessellation and export.

use thiserror::Error;

/// Errors that can occur while building, tessellating or exporting solids.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshError {
    /// Degenerate geometry (zero, negative or non-finite extents)
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry {
        /// What was degenerate.
        message: String,
    },

    /// Segment count unusable for a round kernel
    #[error("Invalid segment count {segments}: expected a multiple of {step} between {min} and {max}")]
    InvalidSegments {
        /// Requested segment count.
        segments: u32,
        /// Required multiple.
        step: u32,
        /// Smallest accepted value.
        min: u32,
        /// Largest accepted value.
        max: u32,
    },

    /// Boolean operation failed
    #[error("Boolean operation failed: {message}")]
    BooleanFailed {
        /// Failure description.
        message: String,
    },

    /// Unsupported operation
    #[error("Unsupported: {message}")]
    Unsupported {
        /// What was requested.
        message: String,
    },

    /// Mesh validation failed
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Failure description.
        message: String,
    },

    /// Export was asked to serialize a mesh without triangles
    #[error("Cannot export an empty mesh")]
    EmptyMesh,

    /// Text formatting failed while writing ASCII output
    #[error("Formatting failed: {0}")]
    Format(#[from] std::fmt::Error),
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates a boolean operation failed error.
    pub fn boolean_failed(message: impl Into<String>) -> Self {
        Self::BooleanFailed {
            message: message.into(),
        }
    }

    /// Creates an unsupported operation error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported {
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}
