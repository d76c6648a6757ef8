//! Mutex-guarded `HexGraph` for callers that share one model across threads.
//!
//! The flippability check and the flip run under one lock acquisition, so a
//! flip never acts on a degree read by another thread's stale query.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::graph::{FlipOutcome, HexError, HexGraph};
use crate::lattice::VertexId;

#[derive(Clone, Debug, Default)]
pub struct SharedHexGraph {
    inner: Arc<Mutex<HexGraph>>,
}

impl SharedHexGraph {
    pub fn new(graph: HexGraph) -> Self {
        Self {
            inner: Arc::new(Mutex::new(graph)),
        }
    }

    // A panic inside `with` cannot leave the matrix asymmetric (writes are
    // pairwise), so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, HexGraph> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with exclusive access.
    pub fn with<R>(&self, f: impl FnOnce(&mut HexGraph) -> R) -> R {
        let mut g = self.lock();
        f(&mut *g)
    }

    /// Flip `id` iff it is flippable at the moment the lock is held.
    ///
    /// Returns `Ok(true)` if the flip happened.
    pub fn flip_if_flippable(&self, id: VertexId) -> Result<bool, HexError> {
        let mut g = self.lock();
        if !g.is_flippable(id) {
            // still surfaces NotCore / UnknownVertex
            g.vertex_state(id)?;
            return Ok(false);
        }
        Ok(g.flip(id)? == FlipOutcome::Flipped)
    }

    pub fn marked_ids(&self) -> Vec<VertexId> {
        self.lock().marked_ids()
    }

    /// Clone of the current model.
    pub fn snapshot(&self) -> HexGraph {
        self.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn concurrent_flips_keep_the_matrix_symmetric() {
        let shared = SharedHexGraph::new(HexGraph::new());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let s = shared.clone();
                thread::spawn(move || {
                    for k in 0..50 {
                        let core = s.with(|g| g.core_ids().to_vec());
                        let id = core[(t + k) % core.len()];
                        s.flip_if_flippable(id).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        let g = shared.snapshot();
        assert!(g.adjacency().is_symmetric());
        assert!(g.adjacency().has_empty_diagonal());
    }

    #[test]
    fn non_core_is_still_an_error() {
        let shared = SharedHexGraph::new(HexGraph::new());
        assert_eq!(
            shared.flip_if_flippable(VertexId(0)),
            Err(HexError::NotCore { id: VertexId(0) })
        );
        assert_eq!(shared.flip_if_flippable(VertexId(4)), Ok(false));
        assert_eq!(shared.flip_if_flippable(VertexId(9)), Ok(true));
        assert_eq!(shared.marked_ids().len(), 4);
    }
}
