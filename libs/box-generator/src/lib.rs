//! # Box Generator
//!
//! Parametric generator for open-top hollow boxes sized for FDM printing.
//!
//! ## Pipeline
//!
//! ```text
//! ParameterSet ─ validate ─┬─ violations ────────────────► GenerationError::Invalid
//!                          └─ resolve ─ assemble ─ GeneratedBox { solid, report }
//!                               │          │
//!                               └──────────┴─ GeometryError ► GenerationError::Geometry
//! ```
//!
//! - **Validator**: every constraint checked, all violations reported
//! - **Resolver**: height quantized down to whole layers, cavity derived
//! - **Assembler**: outer cuboid minus cavity, then rounded edges, through
//!   a [`CsgEngine`]
//!
//! ## Usage
//!
//! ```rust
//! use box_generator::{generate, reclamp, Field, ParameterSet};
//! use box_mesh::export::StlFormat;
//!
//! // Every edit makes a new set; reclamp keeps the fillet printable.
//! let params = ParameterSet::default()
//!     .with(Field::BoxWidth, 60.0)
//!     .with(Field::WallThickness, 1.2)
//!     .with(Field::EdgeFillet, 2.0);
//! let params = reclamp(&params);
//! assert_eq!(params.edge_fillet, 1.2);
//!
//! let built = generate(&params)?;
//! assert_eq!(built.report.width, 60.0);
//! let stl = built.to_stl(StlFormat::Binary, "tray")?;
//! assert!(!stl.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod assemble;
pub mod engine;
pub mod error;
pub mod export;
pub mod generate;
pub mod params;
pub mod report;
pub mod resolve;
pub mod session;
pub mod validate;

pub use assemble::assemble;
pub use engine::{CsgEngine, MeshEngine};
pub use error::{CsgOperation, GenerationError, GeometryError};
pub use generate::{generate, GeneratedBox, Generator};
pub use params::{reclamp, Axis, Field, ParameterSet, UnknownField};
pub use report::DimensionReport;
pub use resolve::{resolve, resolve_with_tolerance, ResolvedDimensions};
pub use session::{GenerationSession, Ticket};
pub use validate::{validate, Violation};
