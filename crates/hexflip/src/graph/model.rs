//! `HexGraph`: lattice + mutable adjacency + the flip rule on the core seven.

use nalgebra::Vector2;
use std::collections::BTreeMap;

use super::adjacency::Adjacency;
use super::error::HexError;
use super::removal::initial_removals;
use crate::lattice::{HexCfg, HexLattice, VertexId};

/// Degree at which a core vertex may be flipped.
pub const FLIP_DEGREE: usize = 3;

/// Result of a flip request on a core vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// All lattice edges at the vertex were toggled.
    Flipped,
    /// Vertex was not at degree 3; nothing changed.
    Skipped { degree: usize },
}

impl FlipOutcome {
    #[inline]
    pub fn is_flipped(&self) -> bool {
        matches!(self, FlipOutcome::Flipped)
    }
}

/// Logical state of a core vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexState {
    Flippable,
    Connected { degree: usize },
}

/// Hexagonal graph with a fixed point set and a flip-mutable edge set.
///
/// Invariants:
/// - The adjacency matrix is symmetric with an empty diagonal.
/// - Current edges are a subset of lattice edges.
/// - `core` is derived from lattice geometry only: center first, then its
///   lattice neighbors ascending.
///
/// Error policy: `flip` on a vertex outside the core seven is an error, but
/// `flip` on a core vertex whose degree is not 3 is a silent skip. Callers
/// that need to tell a skip from a flip inspect the returned `FlipOutcome`
/// or call `is_flippable` first.
#[derive(Clone, Debug)]
pub struct HexGraph {
    lattice: HexLattice,
    adj: Adjacency,
    center: VertexId,
    core: Vec<VertexId>,
}

impl HexGraph {
    /// Radius-2 lattice with the fixed initial removals applied.
    pub fn new() -> Self {
        let removals = initial_removals();
        let mut g = Self::full(HexCfg::default());
        for (a, b) in removals {
            g.adj.set(a, b, false);
        }
        g
    }

    /// Every lattice edge present.
    pub fn full(cfg: HexCfg) -> Self {
        let lattice = HexLattice::new(cfg);
        let adj = Adjacency::from_lattice(&lattice);
        let center = lattice.center();
        let mut core = vec![center];
        core.extend_from_slice(lattice.neighbor_ids(center));
        Self {
            lattice,
            adj,
            center,
            core,
        }
    }

    /// Full lattice of `cfg`, then remove each pair in `removals`.
    ///
    /// Pairs must name lattice edges; removing an already absent edge is fine.
    pub fn with_removals(
        cfg: HexCfg,
        removals: &[(VertexId, VertexId)],
    ) -> Result<Self, HexError> {
        let mut g = Self::full(cfg);
        for &(a, b) in removals {
            g.check(a)?;
            g.check(b)?;
            if !g.lattice.are_adjacent(a, b) {
                return Err(HexError::NotLatticeEdge { a, b });
            }
            g.adj.set(a, b, false);
        }
        Ok(g)
    }

    #[inline]
    pub fn lattice(&self) -> &HexLattice {
        &self.lattice
    }

    #[inline]
    pub fn adjacency(&self) -> &Adjacency {
        &self.adj
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lattice.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lattice.is_empty()
    }

    #[inline]
    pub fn center(&self) -> VertexId {
        self.center
    }

    fn check(&self, id: VertexId) -> Result<(), HexError> {
        if self.lattice.contains(id) {
            Ok(())
        } else {
            Err(HexError::UnknownVertex {
                id,
                count: self.lattice.len(),
            })
        }
    }

    /// Coordinate of `id`.
    pub fn point(&self, id: VertexId) -> Result<Vector2<f64>, HexError> {
        self.check(id)?;
        Ok(self.lattice.points()[id.0])
    }

    /// Lattice neighbors of `id` (one unit away), regardless of current edges.
    pub fn neighbors_of(&self, id: VertexId) -> Result<BTreeMap<VertexId, Vector2<f64>>, HexError> {
        self.check(id)?;
        Ok(self.lattice.neighbor_map(id))
    }

    /// Vertices currently joined to `id` by an edge.
    pub fn connected_to(&self, id: VertexId) -> Result<Vec<VertexId>, HexError> {
        self.check(id)?;
        Ok(self.adj.connected(id))
    }

    pub fn is_connected(&self, a: VertexId, b: VertexId) -> Result<bool, HexError> {
        self.check(a)?;
        self.check(b)?;
        Ok(self.adj.get(a, b))
    }

    /// Center plus its lattice neighbors.
    pub fn core_seven(&self) -> BTreeMap<VertexId, Vector2<f64>> {
        self.core
            .iter()
            .map(|&id| (id, self.lattice.points()[id.0]))
            .collect()
    }

    /// Core ids in evaluation order: center first, then neighbors ascending.
    #[inline]
    pub fn core_ids(&self) -> &[VertexId] {
        &self.core
    }

    #[inline]
    pub fn is_core(&self, id: VertexId) -> bool {
        self.core.contains(&id)
    }

    /// Number of current edges at `id`.
    pub fn degree(&self, id: VertexId) -> Result<usize, HexError> {
        self.check(id)?;
        Ok(self.adj.degree(id))
    }

    /// `id` is a core vertex with exactly three current edges.
    pub fn is_flippable(&self, id: VertexId) -> bool {
        self.is_core(id) && self.adj.degree(id) == FLIP_DEGREE
    }

    pub fn vertex_state(&self, id: VertexId) -> Result<VertexState, HexError> {
        self.check(id)?;
        if !self.is_core(id) {
            return Err(HexError::NotCore { id });
        }
        Ok(match self.adj.degree(id) {
            FLIP_DEGREE => VertexState::Flippable,
            degree => VertexState::Connected { degree },
        })
    }

    /// Toggle every lattice edge at `id`.
    ///
    /// Errors for unknown or non-core ids. A core vertex that is not at
    /// degree 3 is left untouched and reported as `Skipped`.
    pub fn flip(&mut self, id: VertexId) -> Result<FlipOutcome, HexError> {
        self.check(id)?;
        if !self.is_core(id) {
            return Err(HexError::NotCore { id });
        }
        let degree = self.adj.degree(id);
        if degree != FLIP_DEGREE {
            tracing::debug!(vertex = id.0, degree, "flip_skipped");
            return Ok(FlipOutcome::Skipped { degree });
        }
        // lattice neighbors, not current connections
        for &j in self.lattice.neighbor_ids(id) {
            self.adj.toggle(id, j);
        }
        tracing::debug!(vertex = id.0, "flipped");
        Ok(FlipOutcome::Flipped)
    }

    /// Core vertices at degree 3 as `(coordinates, ids)`, in `core_ids` order.
    pub fn marked_vertices(&self) -> (Vec<Vector2<f64>>, Vec<VertexId>) {
        let ids = self.marked_ids();
        let coords = ids.iter().map(|id| self.lattice.points()[id.0]).collect();
        (coords, ids)
    }

    pub fn marked_ids(&self) -> Vec<VertexId> {
        self.core
            .iter()
            .copied()
            .filter(|&id| self.adj.degree(id) == FLIP_DEGREE)
            .collect()
    }

    /// Current edges `(i, j)` with `i < j`.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.adj.edges()
    }

    /// Call `draw(p_i, p_j)` once per current edge, `i < j`.
    pub fn connect<F>(&self, mut draw: F)
    where
        F: FnMut(Vector2<f64>, Vector2<f64>),
    {
        let pts = self.lattice.points();
        for (i, j) in self.adj.edges() {
            draw(pts[i.0], pts[j.0]);
        }
    }
}

impl Default for HexGraph {
    fn default() -> Self {
        Self::new()
    }
}
