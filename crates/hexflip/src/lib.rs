//! Hexagonal flip graph.
//!
//! A radius-2 hexagonal lattice (19 points), its unit-distance adjacency
//! matrix with a fixed set of edges removed, and the flip rule: a core vertex
//! with exactly three edges may toggle all of its lattice edges at once.
//!
//! Layout
//! - `lattice`: point generation and the immutable neighbor relation.
//! - `graph`: adjacency matrix, removal table, `HexGraph` and its flip rule.
//! - `walk`: scripted and seeded random flip sequences.
//! - `frame`: snapshots handed to renderers.
//! - `shared`: mutex-guarded model for multi-threaded callers.

pub mod frame;
pub mod graph;
pub mod lattice;
pub mod shared;
pub mod walk;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use frame::Frame;
pub use graph::{FlipOutcome, HexError, HexGraph, VertexState};
pub use lattice::{Axial, HexCfg, HexLattice, VertexId};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::frame::Frame;
    pub use crate::graph::{Adjacency, FlipOutcome, HexError, HexGraph, VertexState, FLIP_DEGREE};
    pub use crate::lattice::{Axial, HexCfg, HexLattice, VertexId};
    pub use crate::shared::SharedHexGraph;
    pub use crate::walk::{apply_flips, random_walk, WalkCfg};
    pub use nalgebra::Vector2 as Vec2;
}
