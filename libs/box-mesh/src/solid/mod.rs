//! # Solid
//!
//! A solid is a union of disjoint axis-aligned cells, optionally expanded
//! by a polyhedral ball (Minkowski sum). Because the Minkowski sum
//! distributes over union, expanding a non-convex solid such as a hollow box
//! is the union of the expanded cells, which keeps the cavity intact.
//!
//! ## Operations
//!
//! - [`Solid::cuboid`]: single cell
//! - [`Solid::difference`]: exact cell arithmetic
//! - [`Solid::expand`]: records the rounding, applied at tessellation
//! - [`Solid::to_mesh`]: per-cell meshes fused by a BSP union

use crate::aabb::Aabb;
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::ops::boolean::union_all;
use crate::primitives::{create_cuboid, create_rounded_cuboid};
use config::constants::{EPSILON_TOLERANCE, MAX_ROUND_SEGMENTS, MIN_ROUND_SEGMENTS};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

// =============================================================================
// CORNER STYLE
// =============================================================================

/// Shape of the ball used when expanding a solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CornerStyle {
    /// Latitude/longitude sampled sphere: rounded edges and corners.
    Round,
    /// Octahedron: 45 degree bevels.
    Chamfer,
    /// Cube: edges stay sharp, faces move outward.
    Edge,
}

/// Expansion recorded on a solid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rounding {
    /// Ball radius.
    pub radius: f64,
    /// Ball shape.
    pub corners: CornerStyle,
    /// Samples around the ball equator. Only meaningful for [`CornerStyle::Round`].
    pub segments: u32,
}

// =============================================================================
// SOLID
// =============================================================================

/// Box-based solid owned by a single holder.
///
/// # Example
///
/// ```rust
/// use box_mesh::{CornerStyle, Solid};
/// use glam::DVec3;
///
/// let outer = Solid::cuboid(DVec3::splat(10.0), DVec3::new(0.0, 0.0, 5.0)).unwrap();
/// let cavity = Solid::cuboid(DVec3::new(8.0, 8.0, 9.0), DVec3::new(0.0, 0.0, 5.5)).unwrap();
/// let shell = outer.difference(&cavity).unwrap();
/// assert_eq!(shell.cells().len(), 5);
///
/// let rounded = shell.expand(0.5, CornerStyle::Round, 16).unwrap();
/// let bounds = rounded.bounding_box().unwrap();
/// assert_eq!(bounds.size(), DVec3::splat(11.0));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Solid {
    cells: Vec<Aabb>,
    rounding: Option<Rounding>,
}

impl Solid {
    /// Creates a cuboid of `size` centered at `center`.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::DegenerateGeometry`] when any size component is not
    /// a positive finite number, or the center is not finite.
    pub fn cuboid(size: DVec3, center: DVec3) -> Result<Self, MeshError> {
        if !size.is_finite() || size.min_element() <= EPSILON_TOLERANCE {
            return Err(MeshError::degenerate(format!(
                "cuboid size must be positive: {size:?}"
            )));
        }
        if !center.is_finite() {
            return Err(MeshError::degenerate(format!(
                "cuboid center must be finite: {center:?}"
            )));
        }
        Ok(Self {
            cells: vec![Aabb::from_center_size(center, size)],
            rounding: None,
        })
    }

    /// Disjoint cells making up the sharp core of the solid.
    pub fn cells(&self) -> &[Aabb] {
        &self.cells
    }

    /// Expansion applied on top of the cells, if any.
    pub fn rounding(&self) -> Option<Rounding> {
        self.rounding
    }

    /// True when the solid encloses no volume.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Removes `tool` from this solid.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::Unsupported`] when either operand has been
    /// expanded; differences are only exact between sharp cell sets.
    #[instrument(skip_all, fields(base_cells = self.cells.len(), tool_cells = tool.cells.len()))]
    pub fn difference(&self, tool: &Solid) -> Result<Solid, MeshError> {
        if self.rounding.is_some() || tool.rounding.is_some() {
            return Err(MeshError::unsupported(
                "difference of expanded solids; subtract before expanding",
            ));
        }

        let cells = tool.cells.iter().fold(self.cells.clone(), |cells, cut| {
            cells
                .iter()
                .flat_map(|cell| cell.subtract(cut, EPSILON_TOLERANCE))
                .collect()
        });
        debug!(cells = cells.len(), "difference decomposed into cells");

        Ok(Solid {
            cells,
            rounding: None,
        })
    }

    /// Expands the solid by a ball of `radius`.
    ///
    /// `segments` is used by [`CornerStyle::Round`] and must be a multiple of
    /// four between 4 and 256. Expanding an expanded solid adds the radii when
    /// the corner styles agree.
    ///
    /// # Errors
    ///
    /// - [`MeshError::DegenerateGeometry`] for a non-positive or non-finite radius
    /// - [`MeshError::InvalidSegments`] for an unusable round segment count
    /// - [`MeshError::Unsupported`] when mixing corner styles
    pub fn expand(
        &self,
        radius: f64,
        corners: CornerStyle,
        segments: u32,
    ) -> Result<Solid, MeshError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(MeshError::degenerate(format!(
                "expansion radius must be positive: {radius}"
            )));
        }
        let segments = match corners {
            CornerStyle::Round => check_round_segments(segments)?,
            CornerStyle::Chamfer | CornerStyle::Edge => MIN_ROUND_SEGMENTS,
        };

        let rounding = match self.rounding {
            None => Rounding {
                radius,
                corners,
                segments,
            },
            Some(previous) if previous.corners == corners => Rounding {
                radius: previous.radius + radius,
                corners,
                segments: previous.segments.max(segments),
            },
            Some(previous) => {
                return Err(MeshError::unsupported(format!(
                    "expanding a {:?} solid with {:?} corners",
                    previous.corners, corners
                )))
            }
        };

        Ok(Solid {
            cells: self.cells.clone(),
            rounding: Some(rounding),
        })
    }

    /// Axis-aligned bounds of the solid including its expansion.
    pub fn bounding_box(&self) -> Option<Aabb> {
        let (first, rest) = self.cells.split_first()?;
        let bounds = rest.iter().fold(*first, |acc, cell| acc.union(cell));
        Some(match self.rounding {
            Some(rounding) => bounds.expanded(rounding.radius),
            None => bounds,
        })
    }

    /// Exact enclosed volume of an unexpanded solid.
    ///
    /// Returns `None` once the solid has been expanded; use the tessellated
    /// mesh for an approximation.
    pub fn volume(&self) -> Option<f64> {
        match self.rounding {
            Some(_) => None,
            None => Some(self.cells.iter().map(Aabb::volume).sum()),
        }
    }

    /// Tessellates the solid into a single closed triangle mesh.
    ///
    /// # Errors
    ///
    /// Propagates primitive construction failures and reports an empty union
    /// of a non-empty solid as [`MeshError::BooleanFailed`].
    #[instrument(skip_all, fields(cells = self.cells.len()))]
    pub fn to_mesh(&self) -> Result<Mesh, MeshError> {
        let pieces = self
            .cells
            .iter()
            .map(|cell| self.tessellate_cell(cell))
            .collect::<Result<Vec<_>, _>>()?;

        let mesh = union_all(&pieces);
        if mesh.is_empty() && !self.cells.is_empty() {
            return Err(MeshError::boolean_failed(
                "union of cell meshes produced no triangles",
            ));
        }
        debug!(
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "tessellated solid"
        );
        Ok(mesh)
    }

    fn tessellate_cell(&self, cell: &Aabb) -> Result<Mesh, MeshError> {
        match self.rounding {
            None => create_cuboid(cell.size(), cell.center()),
            Some(Rounding {
                radius,
                corners: CornerStyle::Edge,
                ..
            }) => {
                let grown = cell.expanded(radius);
                create_cuboid(grown.size(), grown.center())
            }
            Some(Rounding {
                radius,
                corners: CornerStyle::Chamfer,
                ..
            }) => create_rounded_cuboid(cell, radius, MIN_ROUND_SEGMENTS),
            Some(Rounding {
                radius,
                corners: CornerStyle::Round,
                segments,
            }) => create_rounded_cuboid(cell, radius, segments),
        }
    }
}

/// Checks a round kernel segment count.
pub(crate) fn check_round_segments(segments: u32) -> Result<u32, MeshError> {
    if segments < MIN_ROUND_SEGMENTS
        || segments > MAX_ROUND_SEGMENTS
        || segments % MIN_ROUND_SEGMENTS != 0
    {
        return Err(MeshError::InvalidSegments {
            segments,
            step: MIN_ROUND_SEGMENTS,
            min: MIN_ROUND_SEGMENTS,
            max: MAX_ROUND_SEGMENTS,
        });
    }
    Ok(segments)
}
