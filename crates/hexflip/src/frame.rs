//! Renderer-facing snapshot of a `HexGraph`.
//!
//! One frame carries what a plot of the graph needs: every point, every
//! current edge as a segment, and the marked (flippable) core vertices.

use crate::graph::HexGraph;
use crate::lattice::VertexId;

#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Position in the flip sequence; 0 is the starting state.
    pub step: usize,
    /// Vertex flipped to reach this frame, if any.
    pub flipped: Option<VertexId>,
    pub points: Vec<(f64, f64)>,
    /// Current edges `(i, j)`, `i < j`.
    pub edges: Vec<(VertexId, VertexId)>,
    /// Marked ids in `core_ids` order.
    pub marked: Vec<VertexId>,
}

impl Frame {
    pub fn capture(graph: &HexGraph, step: usize, flipped: Option<VertexId>) -> Self {
        Self {
            step,
            flipped,
            points: graph.lattice().points().iter().map(|p| (p.x, p.y)).collect(),
            edges: graph.edges().collect(),
            marked: graph.marked_ids(),
        }
    }

    /// Plot title used by the figures: the marked ids.
    pub fn title(&self) -> String {
        let ids: Vec<String> = self.marked.iter().map(|id| id.to_string()).collect();
        format!("[{}]", ids.join(", "))
    }

    /// Edge endpoints as coordinate pairs.
    pub fn segments(&self) -> impl Iterator<Item = ((f64, f64), (f64, f64))> + '_ {
        self.edges
            .iter()
            .map(|&(i, j)| (self.points[i.0], self.points[j.0]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_initial_state() {
        let g = HexGraph::new();
        let f = Frame::capture(&g, 0, None);
        assert_eq!(f.points.len(), 19);
        assert_eq!(f.edges.len(), 30);
        assert_eq!(f.marked, vec![VertexId(9)]);
        assert_eq!(f.title(), "[9]");
        assert_eq!(f.segments().count(), 30);
    }

    #[test]
    fn title_lists_marked_ids_in_core_order() {
        let mut g = HexGraph::new();
        g.flip(VertexId(9)).unwrap();
        let f = Frame::capture(&g, 1, Some(VertexId(9)));
        assert_eq!(f.title(), "[9, 4, 10, 13]");
        assert_eq!(f.flipped, Some(VertexId(9)));
    }
}
