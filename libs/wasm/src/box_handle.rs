//! # Box Handle
//!
//! WASM-friendly wrapper around one generated box: its dimension report,
//! render buffers and STL export.

use crate::diagnostics::{Diagnostic, DiagnosticList};
use box_generator::DimensionReport;
use box_mesh::export::{to_stl_ascii, to_stl_binary};
use box_mesh::{Mesh, MeshError};
use wasm_bindgen::prelude::*;

/// A generated box that can be accessed from JavaScript.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const handle = generate_box(JSON.stringify(params));
///
/// // Dimension annotations use the as-built report
/// const [w, h, d, wall] = handle.preview_labels();
///
/// // Buffers for Three.js
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(handle.vertices(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(handle.indices(), 1));
///
/// // Download
/// const bytes = handle.stl_binary("hollow_box");
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct BoxHandle {
    report: DimensionReport,
    mesh: Mesh,
    notes: Vec<Diagnostic>,
}

#[wasm_bindgen]
impl BoxHandle {
    /// Outer X extent.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.report.width
    }

    /// Outer Y extent.
    #[wasm_bindgen(getter)]
    pub fn depth(&self) -> f64 {
        self.report.depth
    }

    /// Outer Z extent after layer quantization.
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.report.height
    }

    /// Shell thickness.
    #[wasm_bindgen(getter)]
    pub fn wall_thickness(&self) -> f64 {
        self.report.wall_thickness
    }

    /// Whole print layers.
    #[wasm_bindgen(getter)]
    pub fn layer_count(&self) -> u32 {
        self.report.layer_count
    }

    /// Cavity X extent.
    #[wasm_bindgen(getter)]
    pub fn inner_width(&self) -> f64 {
        self.report.inner_width
    }

    /// Cavity Y extent.
    #[wasm_bindgen(getter)]
    pub fn inner_depth(&self) -> f64 {
        self.report.inner_depth
    }

    /// Cavity Z extent.
    #[wasm_bindgen(getter)]
    pub fn inner_height(&self) -> f64 {
        self.report.inner_height
    }

    /// Full dimension report as a camelCase JSON object string.
    pub fn report_json(&self) -> String {
        serde_json::to_string(&self.report).unwrap_or_default()
    }

    /// Labels for the 2D preview: `W:`, `H:`, `D:` and `Wall:` in millimetres.
    pub fn preview_labels(&self) -> Vec<String> {
        self.report.preview_labels().to_vec()
    }

    /// Non-fatal notes about the build, such as a reduced height.
    pub fn notes(&self) -> DiagnosticList {
        DiagnosticList::new(self.notes.clone())
    }

    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.mesh.vertex_count() as u32
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.mesh.triangle_count() as u32
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Format: [x, y, z, x, y, z, ...]
    pub fn vertices(&self) -> Vec<f32> {
        self.mesh.vertices_f32()
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Format: [i0, i1, i2, i0, i1, i2, ...]
    pub fn indices(&self) -> Vec<u32> {
        self.mesh.indices_u32()
    }

    /// Returns the vertex normals as a Float32Array, if available.
    pub fn normals(&self) -> Option<Vec<f32>> {
        self.mesh.normals_f32()
    }

    /// Binary STL bytes as a Uint8Array.
    ///
    /// # Errors
    /// Returns a JavaScript error if the mesh cannot be serialized.
    pub fn stl_binary(&self, name: &str) -> Result<Vec<u8>, JsValue> {
        self.stl_binary_internal(name)
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// ASCII STL text.
    ///
    /// # Errors
    /// Returns a JavaScript error if the mesh cannot be serialized.
    pub fn stl_ascii(&self, name: &str) -> Result<String, JsValue> {
        self.stl_ascii_internal(name)
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }
}

impl BoxHandle {
    /// Wraps a tessellated box and its report.
    pub fn new(report: DimensionReport, mesh: Mesh, notes: Vec<Diagnostic>) -> Self {
        Self {
            report,
            mesh,
            notes,
        }
    }

    /// As-built dimension report.
    pub fn report(&self) -> &DimensionReport {
        &self.report
    }

    /// Tessellated mesh.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Host-side binary STL export.
    pub fn stl_binary_internal(&self, name: &str) -> Result<Vec<u8>, MeshError> {
        to_stl_binary(&self.mesh, name)
    }

    /// Host-side ASCII STL export.
    pub fn stl_ascii_internal(&self, name: &str) -> Result<String, MeshError> {
        to_stl_ascii(&self.mesh, name)
    }
}
