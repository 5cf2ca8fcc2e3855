//! # Config Crate
//!
//! Centralized configuration constants for the hollow-box workspace.
//! Tolerances, tessellation settings and the default parameter set live
//! here so the generator, the mesh engine and the browser binding agree.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_FILLET_SEGMENTS, EPSILON_TOLERANCE};
//!
//! // Slivers thinner than the tolerance are discarded by the cell arithmetic.
//! let sliver: f64 = 1e-12;
//! assert!(sliver < EPSILON_TOLERANCE);
//!
//! // Rounded edges are always tessellated with the same segment count.
//! assert_eq!(DEFAULT_FILLET_SEGMENTS, 16);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Printer Aware**: Defaults describe a common 0.4 mm nozzle FDM setup

pub mod constants;
