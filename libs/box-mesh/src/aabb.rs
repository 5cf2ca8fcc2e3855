//! # Axis-Aligned Boxes
//!
//! The cell type of a [`Solid`](crate::Solid). Box-minus-box is exact: the
//! remainder of a cell after removing another box is at most six disjoint
//! slabs, cut along X, then Y, then Z.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned box given by its minimum and maximum corners.
///
/// # Example
///
/// ```rust
/// use box_mesh::Aabb;
/// use glam::DVec3;
///
/// let cell = Aabb::from_center_size(DVec3::new(0.0, 0.0, 5.0), DVec3::splat(10.0));
/// assert_eq!(cell.min, DVec3::new(-5.0, -5.0, 0.0));
/// assert_eq!(cell.volume(), 1000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl Aabb {
    /// Creates a box from its corners.
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Creates a box of `size` centered at `center`.
    pub fn from_center_size(center: DVec3, size: DVec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Edge lengths.
    #[inline]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Enclosed volume.
    #[inline]
    pub fn volume(&self) -> f64 {
        let size = self.size();
        size.x * size.y * size.z
    }

    /// True when any extent is not larger than `tolerance`.
    #[inline]
    pub fn is_thin(&self, tolerance: f64) -> bool {
        self.size().min_element() <= tolerance
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Box grown by `radius` on every side.
    pub fn expanded(&self, radius: f64) -> Aabb {
        Aabb {
            min: self.min - DVec3::splat(radius),
            max: self.max + DVec3::splat(radius),
        }
    }

    /// Overlap of two boxes, or `None` when they share no volume thicker
    /// than `tolerance`.
    pub fn intersection(&self, other: &Aabb, tolerance: f64) -> Option<Aabb> {
        let overlap = Aabb {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        };
        (!overlap.is_thin(tolerance)).then_some(overlap)
    }

    /// Removes `cut` from this box.
    ///
    /// Returns the disjoint remainder pieces. Pieces thinner than `tolerance`
    /// are dropped, so a cut that ends a rounding error short of a face
    /// still opens that face.
    pub fn subtract(&self, cut: &Aabb, tolerance: f64) -> Vec<Aabb> {
        let Some(cut) = self.intersection(cut, tolerance) else {
            return vec![*self];
        };

        let mut pieces = Vec::with_capacity(6);
        let mut rest = *self;
        for axis in 0..3 {
            if cut.min[axis] - rest.min[axis] > tolerance {
                let mut below = rest;
                below.max[axis] = cut.min[axis];
                pieces.push(below);
            }
            if rest.max[axis] - cut.max[axis] > tolerance {
                let mut above = rest;
                above.min[axis] = cut.max[axis];
                pieces.push(above);
            }
            rest.min[axis] = cut.min[axis];
            rest.max[axis] = cut.max[axis];
        }
        pieces
    }
}
