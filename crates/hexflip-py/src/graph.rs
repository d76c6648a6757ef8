//! `HexGraph` as a Python class; plotting stays on the Python side.

use crate::common::{ids_to_py, map_hex_err};
use hexflip::{FlipOutcome, HexGraph, VertexId};
use pyo3::prelude::*;
use std::collections::BTreeMap;

type Point = (f64, f64);

#[pyclass(name = "HexGraph")]
pub struct PyHexGraph {
    inner: HexGraph,
}

#[pymethods]
impl PyHexGraph {
    #[new]
    fn new() -> Self {
        Self {
            inner: HexGraph::new(),
        }
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn points(&self) -> Vec<Point> {
        self.inner
            .lattice()
            .points()
            .iter()
            .map(|p| (p.x, p.y))
            .collect()
    }

    fn neighbors_of(&self, id: usize) -> PyResult<BTreeMap<usize, Point>> {
        let nb = self.inner.neighbors_of(VertexId(id)).map_err(map_hex_err)?;
        Ok(nb.into_iter().map(|(k, p)| (k.0, (p.x, p.y))).collect())
    }

    fn core_seven(&self) -> BTreeMap<usize, Point> {
        self.inner
            .core_seven()
            .into_iter()
            .map(|(k, p)| (k.0, (p.x, p.y)))
            .collect()
    }

    fn degree(&self, id: usize) -> PyResult<usize> {
        self.inner.degree(VertexId(id)).map_err(map_hex_err)
    }

    fn is_flippable(&self, id: usize) -> bool {
        self.inner.is_flippable(VertexId(id))
    }

    /// Returns True if flipped, False if skipped; raises for non-core ids.
    fn flip(&mut self, id: usize) -> PyResult<bool> {
        let outcome = self.inner.flip(VertexId(id)).map_err(map_hex_err)?;
        Ok(outcome == FlipOutcome::Flipped)
    }

    fn marked_vertices(&self) -> (Vec<Point>, Vec<usize>) {
        let (coords, ids) = self.inner.marked_vertices();
        (coords.iter().map(|p| (p.x, p.y)).collect(), ids_to_py(&ids))
    }

    /// Edge segments `((x0, y0), (x1, y1))` for every current edge.
    fn segments(&self) -> Vec<(Point, Point)> {
        let mut out = Vec::new();
        self.inner
            .connect(|a, b| out.push(((a.x, a.y), (b.x, b.y))));
        out
    }

    /// Call `draw(p, q)` per edge, like a matplotlib `axis.plot` loop.
    fn connect(&self, draw: &Bound<'_, PyAny>) -> PyResult<()> {
        for ((ax, ay), (bx, by)) in self.segments() {
            draw.call1(((ax, ay), (bx, by)))?;
        }
        Ok(())
    }
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_class::<PyHexGraph>()?;
    Ok(())
}
