use hexflip::{HexError, VertexId};
use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

pub fn map_hex_err(err: HexError) -> PyErr {
    match err {
        HexError::UnknownVertex { .. } => PyIndexError::new_err(err.to_string()),
        HexError::NotCore { .. } | HexError::NotLatticeEdge { .. } => {
            PyValueError::new_err(err.to_string())
        }
    }
}

#[inline]
pub fn ids_to_py(ids: &[VertexId]) -> Vec<usize> {
    ids.iter().map(|id| id.0).collect()
}
