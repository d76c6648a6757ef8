//! Flip sequences: fixed scripts and seeded random walks.
//!
//! Model
//! - `apply_flips` replays a script and stops at the first hard error; skips
//!   are recorded, not treated as failures.
//! - `random_walk` picks each step uniformly among the currently marked
//!   vertices, so every step is a real flip. Determinism comes from
//!   `StdRng::seed_from_u64(seed)`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::{FlipOutcome, HexError, HexGraph};
use crate::lattice::VertexId;

/// Random walk configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WalkCfg {
    pub steps: usize,
    pub seed: u64,
}

impl Default for WalkCfg {
    fn default() -> Self {
        Self { steps: 16, seed: 0 }
    }
}

/// Apply `script` in order. Returns one outcome per id.
pub fn apply_flips(graph: &mut HexGraph, script: &[VertexId]) -> Result<Vec<FlipOutcome>, HexError> {
    script.iter().map(|&id| graph.flip(id)).collect()
}

/// Flip a uniformly chosen marked vertex `cfg.steps` times.
///
/// Returns the flipped ids; shorter than `cfg.steps` only if no vertex was
/// flippable at some step.
pub fn random_walk(graph: &mut HexGraph, cfg: WalkCfg) -> Vec<VertexId> {
    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let mut path = Vec::with_capacity(cfg.steps);
    for _ in 0..cfg.steps {
        let marked = graph.marked_ids();
        if marked.is_empty() {
            tracing::debug!(step = path.len(), "walk_stuck");
            break;
        }
        let id = marked[rng.gen_range(0..marked.len())];
        match graph.flip(id) {
            Ok(FlipOutcome::Flipped) => path.push(id),
            // marked ids are core vertices at degree 3
            Ok(FlipOutcome::Skipped { .. }) | Err(_) => break,
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::HexCfg;

    fn ids(v: &[usize]) -> Vec<VertexId> {
        v.iter().copied().map(VertexId).collect()
    }

    #[test]
    fn script_from_the_three_panel_figure() {
        let mut g = HexGraph::new();
        let out = apply_flips(&mut g, &ids(&[9, 10])).unwrap();
        assert_eq!(out, vec![FlipOutcome::Flipped, FlipOutcome::Flipped]);
        assert_eq!(g.marked_ids(), ids(&[4, 10, 13]));
    }

    #[test]
    fn script_stops_at_first_error() {
        let mut g = HexGraph::new();
        let err = apply_flips(&mut g, &ids(&[9, 0, 10])).unwrap_err();
        assert_eq!(err, HexError::NotCore { id: VertexId(0) });
        // 9 was flipped before the error, 10 never ran
        assert_eq!(g.marked_ids(), ids(&[9, 4, 10, 13]));
    }

    #[test]
    fn skips_are_reported_in_order() {
        let mut g = HexGraph::new();
        let out = apply_flips(&mut g, &ids(&[4, 9])).unwrap();
        assert_eq!(out[0], FlipOutcome::Skipped { degree: 4 });
        assert!(out[1].is_flipped());
    }

    #[test]
    fn walk_is_reproducible_for_a_seed() {
        let cfg = WalkCfg { steps: 40, seed: 7 };
        let mut a = HexGraph::new();
        let mut b = HexGraph::new();
        let pa = random_walk(&mut a, cfg);
        let pb = random_walk(&mut b, cfg);
        assert_eq!(pa, pb);
        assert_eq!(a.adjacency(), b.adjacency());
        assert_eq!(pa.len(), 40);
        assert!(pa.iter().all(|&id| a.is_core(id)));
        assert!(a.adjacency().is_symmetric());
    }

    #[test]
    fn walk_replays_as_a_script() {
        let mut walked = HexGraph::new();
        let path = random_walk(&mut walked, WalkCfg { steps: 25, seed: 3 });
        let mut replayed = HexGraph::new();
        let out = apply_flips(&mut replayed, &path).unwrap();
        assert!(out.iter().all(FlipOutcome::is_flipped));
        assert_eq!(walked.adjacency(), replayed.adjacency());
    }

    #[test]
    fn walk_stops_when_nothing_is_marked() {
        let mut g = HexGraph::full(HexCfg::default());
        assert!(random_walk(&mut g, WalkCfg::default()).is_empty());
    }
}
