//! # Generation Facade
//!
//! Single entry point: validate, then resolve, then assemble. Each call is
//! a complete, independent pass; nothing is cached between calls.

use crate::assemble::assemble;
use crate::engine::{CsgEngine, MeshEngine};
use crate::error::GenerationError;
use crate::params::ParameterSet;
use crate::report::DimensionReport;
use crate::resolve::resolve_with_tolerance;
use crate::validate::validate;
use box_mesh::Solid;
use config::constants::GlobalConfig;
use tracing::{debug, info, instrument, warn};

/// A successfully generated box.
///
/// Owns its solid; the report is the authority on as-built sizes.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedBox<S = Solid> {
    /// Final hollow, open-top solid.
    pub solid: S,
    /// As-built dimensions.
    pub report: DimensionReport,
}

/// Runs the generation pipeline against a [`CsgEngine`].
///
/// # Example
///
/// ```rust
/// use box_generator::{Generator, ParameterSet};
/// use config::constants::GlobalConfig;
///
/// let generator = Generator::new().with_config(GlobalConfig::new(1e-9, 32).unwrap());
/// let built = generator.generate(&ParameterSet::default())?;
/// assert_eq!(built.solid.rounding().map(|r| r.segments), Some(32));
/// # Ok::<(), box_generator::GenerationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Generator<E = MeshEngine> {
    engine: E,
    config: GlobalConfig,
}

impl Generator<MeshEngine> {
    /// Generator over the built-in mesh engine with default settings.
    pub fn new() -> Self {
        Self::with_engine(MeshEngine)
    }
}

impl Default for Generator<MeshEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: CsgEngine> Generator<E> {
    /// Generator over a caller-supplied engine.
    pub fn with_engine(engine: E) -> Self {
        Self {
            engine,
            config: GlobalConfig::default(),
        }
    }

    /// Replaces the layer tolerance and fillet segment count.
    #[must_use]
    pub fn with_config(mut self, config: GlobalConfig) -> Self {
        self.config = config;
        self
    }

    /// Engine in use.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Settings in use.
    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    /// Validates `params` and, if they pass, builds the box.
    ///
    /// # Errors
    ///
    /// - [`GenerationError::Invalid`] with every violation; nothing is resolved
    /// - [`GenerationError::Geometry`] when resolution or the engine fails
    #[instrument(
        skip_all,
        fields(width = params.box_width, depth = params.box_depth, height = params.box_height)
    )]
    pub fn generate(
        &self,
        params: &ParameterSet,
    ) -> Result<GeneratedBox<E::Solid>, GenerationError> {
        let violations = validate(params);
        if !violations.is_empty() {
            warn!(count = violations.len(), "parameters rejected");
            return Err(GenerationError::Invalid(violations));
        }

        let resolved = resolve_with_tolerance(params, self.config.tolerance)?;
        debug!(
            layer_count = resolved.layer_count,
            actual_height = resolved.actual_box_height,
            "dimensions resolved"
        );

        let (solid, report) =
            assemble(&self.engine, params, &resolved, self.config.fillet_segments)?;
        info!(
            height = report.height,
            layer_count = report.layer_count,
            "box generated"
        );

        Ok(GeneratedBox { solid, report })
    }
}

/// Generates a box with the built-in engine and default settings.
///
/// # Errors
///
/// See [`Generator::generate`].
///
/// # Example
///
/// ```rust
/// use box_generator::{generate, ParameterSet};
///
/// let built = generate(&ParameterSet::default())?;
/// assert_eq!(built.report.layer_count, 127);
/// # Ok::<(), box_generator::GenerationError>(())
/// ```
pub fn generate(params: &ParameterSet) -> Result<GeneratedBox, GenerationError> {
    Generator::new().generate(params)
}
