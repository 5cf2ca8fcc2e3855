//! Centralized configuration values shared across the hollow-box workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION
// =============================================================================

/// Numerical tolerance used by the box cell arithmetic. Cells thinner than
/// this along any axis are treated as empty.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Tolerance used when classifying points against splitting planes in the
/// BSP boolean engine.
///
/// # Examples
/// ```
/// use config::constants::{PLANE_EPSILON, EPSILON_TOLERANCE};
/// assert!(PLANE_EPSILON > EPSILON_TOLERANCE);
/// ```
pub const PLANE_EPSILON: f64 = 1.0e-5;

/// Tolerance, expressed in layers, applied when quantizing a box height to
/// whole print layers. `25.4 / 0.2` evaluates to `126.99999999999999` in
/// binary floating point and must still count as 127 layers.
///
/// # Examples
/// ```
/// use config::constants::LAYER_EPSILON;
/// let layers = (25.4_f64 / 0.2 + LAYER_EPSILON).floor();
/// assert_eq!(layers, 127.0);
/// ```
pub const LAYER_EPSILON: f64 = 1.0e-9;

/// Triangles with a smaller area are dropped by mesh builders and rejected by
/// mesh validation.
///
/// # Examples
/// ```
/// use config::constants::MIN_TRIANGLE_AREA;
/// let area = 0.5 * 1e-14;
/// assert!(area < MIN_TRIANGLE_AREA);
/// ```
pub const MIN_TRIANGLE_AREA: f64 = 1.0e-12;

/// Vertices of a boolean result closer than this are merged, and a vertex
/// this close to an edge splits it.
///
/// # Examples
/// ```
/// use config::constants::{PLANE_EPSILON, WELD_TOLERANCE};
/// assert!(WELD_TOLERANCE < PLANE_EPSILON);
/// ```
pub const WELD_TOLERANCE: f64 = 1.0e-6;

// =============================================================================
// TESSELLATION
// =============================================================================

/// Segment count used for the rounded edge expansion of the hollow box.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_FILLET_SEGMENTS, MIN_ROUND_SEGMENTS};
/// assert_eq!(DEFAULT_FILLET_SEGMENTS % MIN_ROUND_SEGMENTS, 0);
/// ```
pub const DEFAULT_FILLET_SEGMENTS: u32 = 16;

/// Smallest segment count a rounded expansion accepts. Round kernels are
/// sampled per quadrant, so valid counts are multiples of this value.
///
/// # Examples
/// ```
/// use config::constants::MIN_ROUND_SEGMENTS;
/// assert_eq!(MIN_ROUND_SEGMENTS, 4);
/// ```
pub const MIN_ROUND_SEGMENTS: u32 = 4;

/// Upper bound on segment counts, keeping tessellation memory bounded.
///
/// # Examples
/// ```
/// use config::constants::MAX_ROUND_SEGMENTS;
/// assert!(MAX_ROUND_SEGMENTS >= 64);
/// ```
pub const MAX_ROUND_SEGMENTS: u32 = 256;

/// Bytes of stack that must remain before `stacker` allocates a new segment
/// during BSP recursion.
///
/// # Examples
/// ```
/// use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
/// assert!(STACKER_RED_ZONE_BYTES < STACKER_STACK_SIZE_BYTES);
/// ```
pub const STACKER_RED_ZONE_BYTES: usize = 64 * 1024;

/// Bytes of stack space reserved when growing recursion limits using the
/// `stacker` crate.
///
/// # Examples
/// ```
/// use config::constants::STACKER_STACK_SIZE_BYTES;
/// assert!(STACKER_STACK_SIZE_BYTES >= 1024);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 8 * 1024 * 1024;

// =============================================================================
// EXPORT
// =============================================================================

/// Text written at the start of every binary STL header (padded to 80 bytes).
///
/// # Examples
/// ```
/// use config::constants::STL_HEADER;
/// assert!(STL_HEADER.len() <= 80);
/// ```
pub const STL_HEADER: &str = "hollow-box binary STL";

/// Solid name used by ASCII STL export when the caller supplies none.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_STL_SOLID_NAME;
/// assert!(!DEFAULT_STL_SOLID_NAME.contains(' '));
/// ```
pub const DEFAULT_STL_SOLID_NAME: &str = "hollow_box";

// =============================================================================
// DEFAULT PARAMETERS
// =============================================================================

/// Default extruder nozzle diameter in millimetres.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_NOZZLE_SIZE, DEFAULT_WALL_THICKNESS};
/// assert!(DEFAULT_NOZZLE_SIZE <= DEFAULT_WALL_THICKNESS);
/// ```
pub const DEFAULT_NOZZLE_SIZE: f64 = 0.4;

/// Default wall thickness in millimetres.
pub const DEFAULT_WALL_THICKNESS: f64 = 1.0;

/// Default print layer height in millimetres.
pub const DEFAULT_LAYER_HEIGHT: f64 = 0.2;

/// Default edge fillet radius in millimetres. Matches the nozzle size so the
/// default parameter set is valid.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_EDGE_FILLET, DEFAULT_NOZZLE_SIZE};
/// assert_eq!(DEFAULT_EDGE_FILLET, DEFAULT_NOZZLE_SIZE);
/// ```
pub const DEFAULT_EDGE_FILLET: f64 = 0.4;

/// Default outer box edge length (one inch) in millimetres.
pub const DEFAULT_BOX_SIZE: f64 = 25.4;

/// Default printer build volume edge length in millimetres.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_BOX_SIZE, DEFAULT_BUILD_VOLUME};
/// assert!(DEFAULT_BOX_SIZE < DEFAULT_BUILD_VOLUME);
/// ```
pub const DEFAULT_BUILD_VOLUME: f64 = 220.0;

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// assert_eq!(config.fillet_segments, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Tolerance, in layers, used when quantizing box heights.
    pub tolerance: f64,
    /// Segment count used for the rounded edge expansion.
    pub fillet_segments: u32,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and fillet segments.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 24).expect("valid config");
    /// assert_eq!(cfg.fillet_segments, 24);
    /// ```
    pub fn new(tolerance: f64, fillet_segments: u32) -> Result<Self, ConfigError> {
        if tolerance.is_nan() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if fillet_segments < MIN_ROUND_SEGMENTS
            || fillet_segments > MAX_ROUND_SEGMENTS
            || fillet_segments % MIN_ROUND_SEGMENTS != 0
        {
            return Err(ConfigError::InvalidSegments(fillet_segments));
        }
        Ok(Self {
            tolerance,
            fillet_segments,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: LAYER_EPSILON,
            fillet_segments: DEFAULT_FILLET_SEGMENTS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or NaN.
    InvalidTolerance(f64),
    /// Raised when the segment count is not a multiple of four in range.
    InvalidSegments(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidSegments(value) => {
                write!(
                    f,
                    "fillet_segments must be a multiple of {MIN_ROUND_SEGMENTS} \
                     between {MIN_ROUND_SEGMENTS} and {MAX_ROUND_SEGMENTS}: {value}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
