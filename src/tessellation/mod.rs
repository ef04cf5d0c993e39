//! Polygon triangulation
//!
//! The bucket only depends on the `Triangulator` trait; `Earcut` is the
//! production implementation.
//!
//! # Submodules
//! - `earcut` - Polygon-with-holes triangulation using earcut

mod earcut;

use crate::geometry::Ring;

pub use earcut::Earcut;

/// Turns the rings of one polygon into triangles.
///
/// Returned indices are flat triples addressing the concatenation of all
/// non-empty rings, in ring order. The length is always a multiple of 3.
pub trait Triangulator {
    fn triangulate(&self, rings: &[Ring]) -> Vec<u32>;
}

impl<T: Triangulator + ?Sized> Triangulator for &T {
    fn triangulate(&self, rings: &[Ring]) -> Vec<u32> {
        (**self).triangulate(rings)
    }
}
