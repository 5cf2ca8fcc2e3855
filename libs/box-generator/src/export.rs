//! Mesh and STL output for boxes built with the mesh engine.

use crate::error::{CsgOperation, GeometryError};
use crate::generate::GeneratedBox;
use box_mesh::export::{export_stl, StlFormat};
use box_mesh::{Mesh, Solid};

impl GeneratedBox<Solid> {
    /// Tessellates the solid into a triangle mesh with vertex normals.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Engine`] when tessellation fails.
    pub fn to_mesh(&self) -> Result<Mesh, GeometryError> {
        let mut mesh = self
            .solid
            .to_mesh()
            .map_err(|e| GeometryError::engine(CsgOperation::Tessellate, e))?;
        mesh.compute_normals();
        Ok(mesh)
    }

    /// Serializes the solid as STL.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Engine`] when tessellation or serialization
    /// fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use box_generator::{generate, Field, ParameterSet};
    /// use box_mesh::export::StlFormat;
    ///
    /// let params = ParameterSet::default().with(Field::BoxHeight, 10.0);
    /// let built = generate(&params)?;
    /// let stl = built.to_stl(StlFormat::Ascii, "box")?;
    /// assert!(stl.starts_with(b"solid box"));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn to_stl(&self, format: StlFormat, name: &str) -> Result<Vec<u8>, GeometryError> {
        let mesh = self.to_mesh()?;
        export_stl(&mesh, format, name).map_err(|e| GeometryError::engine(CsgOperation::Export, e))
    }
}

#[cfg(test)]
mod tests {
    use crate::assemble::assemble;
    use crate::engine::MeshEngine;
    use crate::generate::{generate, GeneratedBox};
    use crate::params::{Field, ParameterSet};
    use crate::resolve::resolve;
    use approx::assert_relative_eq;
    use box_mesh::export::StlFormat;

    fn assembled(params: &ParameterSet) -> GeneratedBox {
        let resolved = resolve(params).unwrap();
        let (solid, report) = assemble(&MeshEngine, params, &resolved, 16).unwrap();
        GeneratedBox { solid, report }
    }

    #[test]
    fn test_sharp_box_mesh_matches_report() {
        let params = ParameterSet::default()
            .with(Field::BoxWidth, 20.0)
            .with(Field::BoxDepth, 30.0)
            .with(Field::BoxHeight, 10.0)
            .with(Field::EdgeFillet, 0.0);
        let built = assembled(&params);
        let mesh = built.to_mesh().unwrap();

        let (min, max) = mesh.bounding_box().unwrap();
        assert_relative_eq!(max.x - min.x, built.report.width);
        assert_relative_eq!(max.y - min.y, built.report.depth);
        assert_relative_eq!(max.z - min.z, built.report.height);
        assert_eq!(min.z, 0.0);

        let r = &built.report;
        let shell = r.width * r.depth * r.height - r.inner_width * r.inner_depth * r.inner_height;
        assert_relative_eq!(mesh.signed_volume(), shell, epsilon = 1e-6);
        assert!(mesh.normals().is_some());
    }

    #[test]
    fn test_filleted_box_grows_by_the_fillet() {
        let built = generate(&ParameterSet::default()).unwrap();
        let (min, max) = built.to_mesh().unwrap().bounding_box().unwrap();
        assert_relative_eq!(max.x - min.x, 25.4 + 0.8, epsilon = 1e-9);
        assert_relative_eq!(max.z - min.z, 25.4 + 0.8, epsilon = 1e-9);
    }

    #[test]
    fn test_sharp_box_edges_all_have_a_twin() {
        let params = ParameterSet::default().with(Field::EdgeFillet, 0.0);
        let mesh = assembled(&params).to_mesh().unwrap();
        assert_eq!(mesh.open_edge_count(), 0);
    }

    #[test]
    fn test_filleted_box_edges_all_have_a_twin() {
        let mesh = generate(&ParameterSet::default()).unwrap().to_mesh().unwrap();
        assert_eq!(mesh.open_edge_count(), 0);
    }

    #[test]
    fn test_binary_stl_size_matches_triangle_count() {
        let built = generate(&ParameterSet::default()).unwrap();
        let triangles = built.to_mesh().unwrap().triangle_count();
        let stl = built.to_stl(StlFormat::Binary, "box").unwrap();
        assert_eq!(stl.len(), 84 + 50 * triangles);
    }

    #[test]
    fn test_generation_is_repeatable() {
        let params = ParameterSet::default();
        let first = generate(&params).unwrap();
        let second = generate(&params).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.to_stl(StlFormat::Binary, "box").unwrap(),
            second.to_stl(StlFormat::Binary, "box").unwrap()
        );
    }
}
