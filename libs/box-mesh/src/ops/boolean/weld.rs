//! # Welding
//!
//! Turns the polygon soup left by the BSP union into an indexed mesh in
//! which neighbouring faces share whole edges.
//!
//! The union splits each face independently, so a vertex created on one
//! side of an edge is usually missing from the polygon on the other side
//! (a T-junction). Vertices closer than [`WELD_TOLERANCE`] are merged first,
//! then every polygon edge is split at the merged vertices lying on it.

use super::polygon::Polygon;
use crate::Mesh;
use config::constants::WELD_TOLERANCE;
use glam::DVec3;
use std::collections::HashMap;

/// Grid cells per axis used when looking for vertices on an edge.
const EDGE_GRID_CELLS: f64 = 64.0;

type CellKey = [i64; 3];

/// Uniform spatial hash over vertex indices.
struct PointGrid {
    cell: f64,
    buckets: HashMap<CellKey, Vec<u32>>,
}

impl PointGrid {
    fn new(cell: f64) -> Self {
        Self {
            cell,
            buckets: HashMap::new(),
        }
    }

    fn key(&self, p: DVec3) -> CellKey {
        let q = (p / self.cell).floor();
        [q.x as i64, q.y as i64, q.z as i64]
    }

    fn insert(&mut self, p: DVec3, index: u32) {
        let key = self.key(p);
        self.buckets.entry(key).or_default().push(index);
    }

    /// Indices stored in the cells overlapping the box `[min, max]`.
    fn query(&self, min: DVec3, max: DVec3) -> impl Iterator<Item = u32> + '_ {
        let [x0, y0, z0] = self.key(min);
        let [x1, y1, z1] = self.key(max);
        (x0..=x1)
            .flat_map(move |x| (y0..=y1).flat_map(move |y| (z0..=z1).map(move |z| [x, y, z])))
            .filter_map(move |key| self.buckets.get(&key))
            .flatten()
            .copied()
    }
}

/// Merges vertices closer than the tolerance. The first position seen wins.
struct Welder {
    tolerance: f64,
    points: Vec<DVec3>,
    grid: PointGrid,
}

impl Welder {
    fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            points: Vec::new(),
            grid: PointGrid::new(tolerance),
        }
    }

    fn intern(&mut self, p: DVec3) -> u32 {
        let reach = DVec3::splat(self.tolerance);
        let tol_sq = self.tolerance * self.tolerance;
        let found = self
            .grid
            .query(p - reach, p + reach)
            .find(|&i| self.points[i as usize].distance_squared(p) <= tol_sq);
        if let Some(index) = found {
            return index;
        }

        let index = self.points.len() as u32;
        self.points.push(p);
        self.grid.insert(p, index);
        index
    }

    /// Welded vertex loop of a polygon, with repeated neighbours removed.
    fn ring(&mut self, polygon: &Polygon) -> Vec<u32> {
        let mut ring: Vec<u32> = Vec::with_capacity(polygon.vertices().len());
        for v in polygon.vertices() {
            let index = self.intern(*v);
            if ring.last() != Some(&index) {
                ring.push(index);
            }
        }
        while ring.len() > 1 && ring.first() == ring.last() {
            ring.pop();
        }
        ring
    }
}

/// Finds the welded vertices lying inside polygon edges.
///
/// Results are cached per undirected edge, so the two faces meeting at an
/// edge always receive the same split vertices in opposite order.
struct EdgeSplitter<'a> {
    points: &'a [DVec3],
    tolerance: f64,
    grid: PointGrid,
    cache: HashMap<(u32, u32), Vec<u32>>,
}

impl<'a> EdgeSplitter<'a> {
    fn new(points: &'a [DVec3], tolerance: f64) -> Self {
        let (min, max) = points.iter().fold(
            (DVec3::splat(f64::INFINITY), DVec3::splat(f64::NEG_INFINITY)),
            |(lo, hi), p| (lo.min(*p), hi.max(*p)),
        );
        let extent = (max - min).max_element();
        let mut grid = PointGrid::new((extent / EDGE_GRID_CELLS).max(tolerance));
        for (i, p) in points.iter().enumerate() {
            grid.insert(*p, i as u32);
        }

        Self {
            points,
            tolerance,
            grid,
            cache: HashMap::new(),
        }
    }

    /// The loop with every edge split at the vertices lying on it.
    fn split_ring(&mut self, ring: &[u32]) -> Vec<u32> {
        let mut out = Vec::with_capacity(ring.len());
        for (i, &a) in ring.iter().enumerate() {
            let b = ring[(i + 1) % ring.len()];
            out.push(a);
            out.extend(self.interior(a, b));
        }
        out
    }

    /// Vertices strictly inside edge `a → b`, ordered from `a` to `b`.
    fn interior(&mut self, a: u32, b: u32) -> Vec<u32> {
        let key = (a.min(b), a.max(b));
        let mut inner = match self.cache.get(&key) {
            Some(found) => found.clone(),
            None => {
                let found = self.search(key.0, key.1);
                self.cache.insert(key, found.clone());
                found
            }
        };
        if a > b {
            inner.reverse();
        }
        inner
    }

    fn search(&self, a: u32, b: u32) -> Vec<u32> {
        let (pa, pb) = (self.points[a as usize], self.points[b as usize]);
        let length = pa.distance(pb);
        if length <= self.tolerance {
            return Vec::new();
        }
        let dir = (pb - pa) / length;
        let reach = DVec3::splat(self.tolerance);
        let tol_sq = self.tolerance * self.tolerance;

        let mut hits: Vec<(f64, u32)> = self
            .grid
            .query(pa.min(pb) - reach, pa.max(pb) + reach)
            .filter(|&i| i != a && i != b)
            .filter_map(|i| {
                let offset = self.points[i as usize] - pa;
                let along = offset.dot(dir);
                let within = along > self.tolerance && along < length - self.tolerance;
                let off_line = (offset - dir * along).length_squared();
                (within && off_line <= tol_sq).then_some((along, i))
            })
            .collect();
        hits.sort_by(|x, y| x.0.total_cmp(&y.0));
        hits.into_iter().map(|(_, i)| i).collect()
    }
}

/// True if `cur` lies within `tolerance` of the line through its neighbours.
fn is_straight(prev: DVec3, cur: DVec3, next: DVec3, tolerance: f64) -> bool {
    let base = next - prev;
    let length = base.length();
    if length <= tolerance {
        return true;
    }
    (cur - prev).cross(base).length() / length <= tolerance
}

/// True if the loop has no width: its area is what a strip one tolerance
/// wide along its longest edge would cover.
fn is_collapsed(corners: &[DVec3], tolerance: f64) -> bool {
    let origin = corners[0];
    let n = corners.len();
    let (twice_area, longest) = (0..n).fold((DVec3::ZERO, 0.0_f64), |(area, longest), k| {
        let (p, q) = (corners[k], corners[(k + 1) % n]);
        (
            area + (p - origin).cross(q - origin),
            longest.max(p.distance(q)),
        )
    });
    twice_area.length() <= tolerance * longest
}

/// Appends triangles for a convex vertex loop.
///
/// A loop with a straight angle (a split vertex) is fanned from its centroid
/// so that no triangle is degenerate.
fn triangulate(mesh: &mut Mesh, ring: &[u32], tolerance: f64) {
    let n = ring.len();
    if n < 3 {
        return;
    }
    let corners: Vec<DVec3> = ring.iter().map(|&i| mesh.vertices()[i as usize]).collect();
    if is_collapsed(&corners, tolerance) {
        return;
    }

    let straight = (0..n).any(|k| {
        is_straight(
            corners[(k + n - 1) % n],
            corners[k],
            corners[(k + 1) % n],
            tolerance,
        )
    });

    let emit = |mesh: &mut Mesh, a: u32, b: u32, c: u32| {
        if a != b && b != c && a != c {
            mesh.add_triangle(a, b, c);
        }
    };

    if straight {
        let centroid = corners.iter().fold(DVec3::ZERO, |acc, p| acc + *p) / n as f64;
        let c = mesh.add_vertex(centroid);
        for k in 0..n {
            emit(mesh, c, ring[k], ring[(k + 1) % n]);
        }
    } else {
        for k in 1..n - 1 {
            emit(mesh, ring[0], ring[k], ring[k + 1]);
        }
    }
}

/// Builds an indexed mesh from convex polygons, welding vertices and
/// splitting edges at T-junctions so that every edge is shared by two faces.
pub(super) fn polygons_to_mesh(polygons: &[Polygon]) -> Mesh {
    let tolerance = WELD_TOLERANCE;
    let mut welder = Welder::new(tolerance);
    let rings: Vec<Vec<u32>> = polygons
        .iter()
        .map(|polygon| welder.ring(polygon))
        .filter(|ring| ring.len() >= 3)
        .collect();
    let points = welder.points;

    let mut splitter = EdgeSplitter::new(&points, tolerance);
    let mut mesh = Mesh::with_capacity(points.len(), rings.len() * 2);
    for p in &points {
        mesh.add_vertex(*p);
    }
    for ring in &rings {
        let ring = splitter.split_ring(ring);
        triangulate(&mut mesh, &ring, tolerance);
    }

    mesh
}
