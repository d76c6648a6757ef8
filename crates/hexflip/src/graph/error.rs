use std::fmt;

use crate::lattice::VertexId;

/// Errors surfaced by `HexGraph` queries and flips.
///
/// A flip on a core vertex that is not currently flippable is *not* an
/// error; see `FlipOutcome::Skipped`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    /// Identifier is not in the point set.
    UnknownVertex { id: VertexId, count: usize },
    /// Flip requested on a vertex outside the core seven.
    NotCore { id: VertexId },
    /// A removal pair does not name a lattice edge.
    NotLatticeEdge { a: VertexId, b: VertexId },
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HexError::UnknownVertex { id, count } => {
                write!(f, "vertex {id} is out of range (lattice has {count} points)")
            }
            HexError::NotCore { id } => write!(
                f,
                "vertex {id} is not an inner vertex; only the core seven can be flipped"
            ),
            HexError::NotLatticeEdge { a, b } => {
                write!(f, "vertices {a} and {b} are not lattice neighbors")
            }
        }
    }
}

impl std::error::Error for HexError {}
