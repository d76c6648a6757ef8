//! Fixed edge removals that carve the starting topology out of the full
//! radius-2 lattice.
//!
//! Kept as data so the starting state can be audited and tested apart from
//! the lattice generator. Pairs are unordered.

use crate::lattice::VertexId;

/// Center `9` loses three of its six edges.
pub const CENTER_DISCONNECTS: [(usize, usize); 3] = [(9, 5), (9, 8), (9, 14)];

/// Outer edges removed from the radius-2 lattice.
pub const OUTER_REMOVALS: [(usize, usize); 9] = [
    (8, 7),
    (4, 3),
    (13, 12),
    (13, 17),
    (14, 18),
    (10, 15),
    (6, 10),
    (2, 5),
    (1, 4),
];

/// Every pair removed by `HexGraph::new`, center disconnects first.
pub fn initial_removals() -> Vec<(VertexId, VertexId)> {
    CENTER_DISCONNECTS
        .iter()
        .chain(OUTER_REMOVALS.iter())
        .map(|&(a, b)| (VertexId(a), VertexId(b)))
        .collect()
}
