//! Hex graph model: adjacency over a hexagonal lattice with a flip rule.
//!
//! Purpose
//! - Start from the unit-distance graph on the radius-2 lattice, remove a
//!   fixed table of edges, then evolve the edge set only through flips.
//! - A flip toggles every lattice edge at a core vertex that currently has
//!   exactly three edges.
//!
//! Two neighbor notions are kept apart:
//! - lattice neighbors (`neighbors_of`, `core_seven`): geometry, immutable;
//! - current connections (`degree`, `connected_to`): the adjacency matrix.
//!
//! Code cross-refs: `lattice::HexLattice`, `walk::{apply_flips, random_walk}`

mod adjacency;
mod error;
mod model;
pub mod removal;

pub use adjacency::Adjacency;
pub use error::HexError;
pub use model::{FlipOutcome, HexGraph, VertexState, FLIP_DEGREE};
