//! Dense symmetric adjacency matrix.
//!
//! All writes go through `set`/`toggle`, which touch `(i, j)` and `(j, i)`
//! together and refuse the diagonal, so symmetry and the empty diagonal hold
//! for every reachable state.

use nalgebra::DMatrix;

use crate::lattice::{HexLattice, VertexId};

#[derive(Clone, Debug, PartialEq)]
pub struct Adjacency {
    m: DMatrix<bool>,
}

impl Adjacency {
    /// `n × n` matrix with no edges.
    pub fn empty(n: usize) -> Self {
        Self {
            m: DMatrix::from_element(n, n, false),
        }
    }

    /// Connect every lattice-adjacent pair.
    pub fn from_lattice(lattice: &HexLattice) -> Self {
        let mut adj = Self::empty(lattice.len());
        for i in lattice.ids() {
            for &j in lattice.neighbor_ids(i) {
                adj.set(i, j, true);
            }
        }
        adj
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.m.nrows()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.m.nrows() == 0
    }

    #[inline]
    pub fn get(&self, i: VertexId, j: VertexId) -> bool {
        self.m[(i.0, j.0)]
    }

    /// Set both `(i, j)` and `(j, i)`. No-op on the diagonal.
    #[inline]
    pub fn set(&mut self, i: VertexId, j: VertexId, on: bool) {
        if i == j {
            return;
        }
        self.m[(i.0, j.0)] = on;
        self.m[(j.0, i.0)] = on;
    }

    /// Flip both `(i, j)` and `(j, i)`. No-op on the diagonal.
    #[inline]
    pub fn toggle(&mut self, i: VertexId, j: VertexId) {
        let on = !self.get(i, j);
        self.set(i, j, on);
    }

    /// Row sum: number of current edges at `i`.
    pub fn degree(&self, i: VertexId) -> usize {
        self.m.row(i.0).iter().filter(|&&on| on).count()
    }

    /// Currently connected vertices of `i`, ascending.
    pub fn connected(&self, i: VertexId) -> Vec<VertexId> {
        self.m
            .row(i.0)
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(j, _)| VertexId(j))
            .collect()
    }

    /// Upper-triangle edges `(i, j)` with `i < j`, row-major.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        let n = self.len();
        (0..n).flat_map(move |i| {
            ((i + 1)..n)
                .filter(move |&j| self.m[(i, j)])
                .map(move |j| (VertexId(i), VertexId(j)))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    pub fn is_symmetric(&self) -> bool {
        self.m == self.m.transpose()
    }

    pub fn has_empty_diagonal(&self) -> bool {
        self.m.diagonal().iter().all(|&on| !on)
    }

    /// Read-only view of the underlying matrix.
    #[inline]
    pub fn matrix(&self) -> &DMatrix<bool> {
        &self.m
    }
}
