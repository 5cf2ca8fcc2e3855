//! WASM-facing entry points for the hollow-box generator.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Parameters cross the boundary as camelCase JSON. Native
//! tests use the `*_internal` helpers, which return Rust types instead of
//! `JsValue`s.
//!
//! ```
//! let json = box_wasm::default_parameters();
//! let handle = box_wasm::generate_box_internal(&json).unwrap();
//! assert_eq!(handle.layer_count(), 127);
//! ```

use box_generator::{
    generate, reclamp, validate, GenerationError, GenerationSession, ParameterSet, Ticket,
};
use wasm_bindgen::prelude::*;

mod box_handle;
mod diagnostics;

pub use box_handle::BoxHandle;
pub use diagnostics::{Diagnostic, DiagnosticList, Severity};

static SESSION: GenerationSession = GenerationSession::new();

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "box-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the default parameter set as a JSON object string.
///
/// # Examples
/// ```
/// let json = box_wasm::default_parameters();
/// assert!(json.contains("\"wallThickness\":1.0"));
/// ```
#[wasm_bindgen]
pub fn default_parameters() -> String {
    serde_json::to_string(&ParameterSet::default()).unwrap_or_default()
}

/// Brings dependent fields of an edited parameter set back into range.
///
/// # Errors
/// Returns a JavaScript error if the JSON cannot be parsed.
#[wasm_bindgen]
pub fn reclamp_parameters(json: &str) -> Result<String, JsValue> {
    reclamp_parameters_internal(json).map_err(to_js_error)
}

/// Validates a parameter set, returning an empty list when it is printable.
#[wasm_bindgen]
pub fn validate_parameters(json: &str) -> DiagnosticList {
    DiagnosticList::new(validate_parameters_internal(json))
}

/// Generates the hollow box described by a JSON parameter set.
///
/// # Errors
/// Returns a JavaScript error with one message per line when validation or
/// generation fails.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // try {
/// //   const box = generate_box(JSON.stringify(params));
/// //   console.log("Layers:", box.layer_count);
/// // } catch (error) {
/// //   console.error(error);
/// // }
/// ```
#[wasm_bindgen]
pub fn generate_box(json: &str) -> Result<BoxHandle, JsValue> {
    generate_box_internal(json).map_err(to_js_error)
}

/// Registers a new generation request for a background worker and returns
/// its ticket. Every earlier ticket becomes stale.
#[wasm_bindgen]
pub fn begin_generation() -> u64 {
    SESSION.begin().value()
}

/// True if `ticket` is the most recent request, so its result may be shown.
#[wasm_bindgen]
pub fn is_current_generation(ticket: u64) -> bool {
    SESSION.is_current(Ticket::from(ticket))
}

fn to_js_error(diagnostics: Vec<Diagnostic>) -> JsValue {
    let messages: Vec<String> = diagnostics.iter().map(ToString::to_string).collect();
    JsValue::from_str(&messages.join("\n"))
}

/// Parses a JSON parameter set; missing keys take their defaults.
pub fn parse_parameters(json: &str) -> Result<ParameterSet, Vec<Diagnostic>> {
    serde_json::from_str(json)
        .map_err(|err| vec![Diagnostic::error(format!("Invalid parameters: {err}"))])
}

/// Host-only helper behind [`reclamp_parameters`].
///
/// # Examples
/// ```
/// let json = r#"{"wallThickness": 1.0, "nozzleSize": 0.4, "edgeFillet": 3.0}"#;
/// let clamped = box_wasm::reclamp_parameters_internal(json).unwrap();
/// assert!(clamped.contains("\"edgeFillet\":1.0"));
/// ```
pub fn reclamp_parameters_internal(json: &str) -> Result<String, Vec<Diagnostic>> {
    let params = reclamp(&parse_parameters(json)?);
    serde_json::to_string(&params).map_err(|err| vec![Diagnostic::error(err.to_string())])
}

/// Host-only helper behind [`validate_parameters`]. Parse failures are
/// reported as diagnostics too.
pub fn validate_parameters_internal(json: &str) -> Vec<Diagnostic> {
    match parse_parameters(json) {
        Ok(params) => validate(&params).into_iter().map(Diagnostic::from).collect(),
        Err(diagnostics) => diagnostics,
    }
}

/// Host-only helper behind [`generate_box`].
pub fn generate_box_internal(json: &str) -> Result<BoxHandle, Vec<Diagnostic>> {
    let params = parse_parameters(json)?;
    let built = generate(&params).map_err(|err| Diagnostic::from_generation_error(&err))?;
    let mesh = built
        .to_mesh()
        .map_err(|err| Diagnostic::from_generation_error(&GenerationError::from(err)))?;

    let mut notes = Vec::new();
    if built.report.height < params.box_height {
        notes.push(Diagnostic::info(
            format!(
                "Box height reduced to {}mm to fit {} whole layers",
                built.report.height, built.report.layer_count
            ),
            "boxHeight",
        ));
    }

    Ok(BoxHandle::new(built.report, mesh, notes))
}
