//! Hexagonal point lattice (axial sweep, unit-distance neighbors).
//!
//! Purpose
//! - Generate the points of a hexagon of radius `r` in a fixed, reproducible
//!   order so that the index of a point is its identifier.
//! - Precompute the geometric neighbor relation once. It never changes; the
//!   mutable connection state lives in `graph::Adjacency`.
//!
//! Model
//! - Sweep `q` then `r` over `[-radius, radius]`, keep `|s| <= radius`.
//! - Cartesian `p = q·e_q + r·e_r` with `e_r = (0, 1)`, `e_q = (cos 30°, 0.5)`.
//! - Neighbors: `| |p_i - p_j| - 1 | < tol`, never `i` itself.
//!
//! Code cross-refs: `graph::HexGraph`, `graph::Adjacency`

mod types;

pub use types::{e_q, e_r, Axial, HexCfg, VertexId};

use nalgebra::Vector2;
use std::collections::BTreeMap;

/// Immutable hexagonal lattice.
///
/// Invariants:
/// - `points.len() == axial.len() == neighbors.len()`.
/// - `neighbors[i]` is sorted ascending and never contains `i`.
/// - The relation is symmetric.
#[derive(Clone, Debug)]
pub struct HexLattice {
    cfg: HexCfg,
    axial: Vec<Axial>,
    points: Vec<Vector2<f64>>,
    neighbors: Vec<Vec<VertexId>>,
}

impl HexLattice {
    /// Negative radii are treated as 0 (a single point).
    pub fn new(cfg: HexCfg) -> Self {
        let cfg = HexCfg {
            radius: cfg.radius.max(0),
            ..cfg
        };
        let axial = sweep_axial(cfg.radius);
        let points: Vec<Vector2<f64>> = axial.iter().map(Axial::to_cartesian).collect();
        let neighbors = unit_neighbors(&points, cfg.tol);
        Self {
            cfg,
            axial,
            points,
            neighbors,
        }
    }

    #[inline]
    pub fn cfg(&self) -> HexCfg {
        self.cfg
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: VertexId) -> bool {
        id.0 < self.points.len()
    }

    /// All identifiers in generation order.
    pub fn ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.points.len()).map(VertexId)
    }

    #[inline]
    pub fn points(&self) -> &[Vector2<f64>] {
        &self.points
    }

    #[inline]
    pub fn point(&self, id: VertexId) -> Option<Vector2<f64>> {
        self.points.get(id.0).copied()
    }

    #[inline]
    pub fn axial(&self, id: VertexId) -> Option<Axial> {
        self.axial.get(id.0).copied()
    }

    /// Geometric neighbors of `id`, ascending. Empty for unknown ids.
    #[inline]
    pub fn neighbor_ids(&self, id: VertexId) -> &[VertexId] {
        self.neighbors.get(id.0).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True iff `a` and `b` are one unit apart.
    pub fn are_adjacent(&self, a: VertexId, b: VertexId) -> bool {
        self.neighbor_ids(a).binary_search(&b).is_ok()
    }

    /// Neighbors of `id` as `id → coordinate`.
    pub fn neighbor_map(&self, id: VertexId) -> BTreeMap<VertexId, Vector2<f64>> {
        self.neighbor_ids(id)
            .iter()
            .map(|&j| (j, self.points[j.0]))
            .collect()
    }

    /// Identifier of the point at the origin (`q = r = 0`).
    ///
    /// The sweep is point-symmetric under `(q, r) ↦ (-q, -r)`, which reverses
    /// generation order, so the origin sits at the middle index.
    #[inline]
    pub fn center(&self) -> VertexId {
        VertexId(self.points.len() / 2)
    }

    /// Number of unordered neighbor pairs.
    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum::<usize>() / 2
    }
}

fn sweep_axial(radius: i32) -> Vec<Axial> {
    let mut out = Vec::new();
    for q in -radius..=radius {
        for r in -radius..=radius {
            let a = Axial::new(q, r);
            // without this the sweep is a sheared rhombus
            if a.s().abs() <= radius {
                out.push(a);
            }
        }
    }
    out
}

fn unit_neighbors(points: &[Vector2<f64>], tol: f64) -> Vec<Vec<VertexId>> {
    let n = points.len();
    let mut out = vec![Vec::new(); n];
    for i in 0..n {
        for j in (i + 1)..n {
            let dist = (points[i] - points[j]).norm();
            if (dist - 1.0).abs() < tol {
                out[i].push(VertexId(j));
                out[j].push(VertexId(i));
            }
        }
    }
    for row in &mut out {
        row.sort_unstable();
    }
    out
}

#[cfg(test)]
mod tests;
