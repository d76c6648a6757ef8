//! PyO3 bindings for the `hexflip` model.
//!
//! Notes
//! - Keep bindings thin and predictable; ids cross the boundary as `int`,
//!   points as `(x, y)` tuples.
//! - Rendering lives in Python; this module only answers queries and flips.

use pyo3::prelude::*;

mod common;
mod graph;

#[pymodule]
fn hexflip_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("VERSION", hexflip::VERSION)?;
    graph::register(m)?;
    Ok(())
}
