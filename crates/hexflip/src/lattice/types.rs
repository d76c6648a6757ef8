//! Basic lattice types and tolerances.
//!
//! - `HexCfg`: grid radius and the unit-distance tolerance.
//! - `Axial`: axial hex coordinate `(q, r)` with implied `s = -q - r`.
//! - `VertexId`: stable index of a lattice point in generation order.

use nalgebra::Vector2;
use std::fmt;

/// Lattice configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexCfg {
    /// Max of `|q|`, `|r|`, `|s|` over the generated points.
    pub radius: i32,
    /// Two points are lattice-adjacent iff `| |p - p'| - 1 | < tol`.
    pub tol: f64,
}

impl Default for HexCfg {
    fn default() -> Self {
        Self {
            radius: 2,
            tol: 1e-6,
        }
    }
}

impl HexCfg {
    #[inline]
    pub fn with_radius(radius: i32) -> Self {
        Self {
            radius,
            ..Self::default()
        }
    }

    /// Number of points in a hexagon of this radius: `3r(r+1) + 1`.
    #[inline]
    pub fn point_count(&self) -> usize {
        let r = self.radius.max(0) as usize;
        3 * r * (r + 1) + 1
    }
}

/// Identifier of a lattice point. Equal to its position in generation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

impl VertexId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    #[inline]
    fn from(i: usize) -> Self {
        VertexId(i)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Axial hex coordinate. Cube form is `(q, r, s)` with `q + r + s = 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Axial {
    pub q: i32,
    pub r: i32,
}

impl Axial {
    #[inline]
    pub fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }
    #[inline]
    pub fn s(&self) -> i32 {
        -self.q - self.r
    }
    /// Hex distance from the origin (max cube coordinate).
    #[inline]
    pub fn ring(&self) -> i32 {
        self.q.abs().max(self.r.abs()).max(self.s().abs())
    }
    /// Cartesian position `q·e_q + r·e_r`.
    #[inline]
    pub fn to_cartesian(&self) -> Vector2<f64> {
        f64::from(self.q) * e_q() + f64::from(self.r) * e_r()
    }
}

/// Basis vector along `r`: unit length on the y axis.
#[inline]
pub fn e_r() -> Vector2<f64> {
    Vector2::new(0.0, 1.0)
}

/// Basis vector along `q`: `(cos 30°, 0.5)`.
#[inline]
pub fn e_q() -> Vector2<f64> {
    Vector2::new(std::f64::consts::FRAC_PI_6.cos(), 0.5)
}
