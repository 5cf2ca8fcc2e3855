//! WASM-compatible diagnostic types.
//!
//! Validation violations, generation failures and informational notes are
//! all reported to JavaScript as [`Diagnostic`] values.

use box_generator::{GenerationError, Violation};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Diagnostic severity for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// A diagnostic message for JavaScript.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const diag = list.get(0);
/// // console.log(diag.message, diag.field);
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    severity: Severity,
    message: String,
    field: Option<String>,
}

#[wasm_bindgen]
impl Diagnostic {
    /// Returns the severity of the diagnostic.
    #[wasm_bindgen(getter)]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the diagnostic message.
    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }

    /// Returns the camelCase parameter name the diagnostic refers to, if any.
    #[wasm_bindgen(getter)]
    pub fn field(&self) -> Option<String> {
        self.field.clone()
    }

    /// Serializes this diagnostic to a JSON object string.
    ///
    /// Useful for passing data between the worker and main thread, as
    /// wasm-bindgen wrappers cannot be transferred.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl Diagnostic {
    /// Error not tied to a parameter.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            field: None,
        }
    }

    /// Informational note about a parameter.
    pub fn info(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Converts a generation failure to one diagnostic per message.
    pub fn from_generation_error(err: &GenerationError) -> Vec<Self> {
        match err {
            GenerationError::Invalid(violations) => {
                violations.iter().copied().map(Self::from).collect()
            }
            GenerationError::Geometry(_) => vec![Self::error(err.to_string())],
        }
    }
}

impl From<Violation> for Diagnostic {
    fn from(violation: Violation) -> Self {
        Self {
            severity: Severity::Error,
            message: violation.to_string(),
            field: Some(violation.field().key().to_string()),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// A collection of diagnostics.
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct DiagnosticList {
    diagnostics: Vec<Diagnostic>,
}

#[wasm_bindgen]
impl DiagnosticList {
    /// Returns the number of diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns true if there are no diagnostics.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Returns a diagnostic by index.
    pub fn get(&self, index: usize) -> Option<Diagnostic> {
        self.diagnostics.get(index).cloned()
    }

    /// Serializes the list to a JSON array string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.diagnostics).unwrap_or_default()
    }
}

impl DiagnosticList {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }
}
