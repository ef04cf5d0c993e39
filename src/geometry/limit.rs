//! Hole limiting
//!
//! Polygons with very many interior rings make earcut slow. Before
//! triangulation only the largest holes are kept.

use std::cmp::Reverse;

use super::types::{signed_area, Polygon};

/// Keep at most `max_holes` holes, preferring the largest by area.
///
/// The outer ring is always kept. Kept holes are not guaranteed to stay in
/// their original order. Returns the number of holes discarded.
pub fn limit_holes(polygon: &mut Polygon, max_holes: usize) -> usize {
    let hole_count = polygon.rings.len().saturating_sub(1);
    if hole_count <= max_holes {
        return 0;
    }

    if max_holes > 0 {
        let holes = &mut polygon.rings[1..];
        holes.select_nth_unstable_by_key(max_holes, |ring| Reverse(signed_area(ring).abs()));
    }
    polygon.rings.truncate(1 + max_holes);

    hole_count - max_holes
}
