//! Ring classification
//!
//! Groups the raw rings of a feature into polygons. The orientation of the
//! first ring with a non-zero area is taken as "outer"; every later ring of
//! that orientation starts a new polygon and every ring of the opposite
//! orientation is a hole of the polygon before it.

use super::types::{signed_area, Polygon, Ring};

/// Split a feature's rings into polygons, each `[outer, holes...]`.
///
/// Zero-area rings are dropped, except when the feature has a single ring,
/// which is passed through as its own polygon.
pub fn classify_rings(rings: &[Ring]) -> Vec<Polygon> {
    if rings.is_empty() {
        return Vec::new();
    }
    if rings.len() == 1 {
        return vec![Polygon::new(rings[0].clone())];
    }

    let mut polygons = Vec::new();
    let mut current: Vec<Ring> = Vec::new();
    let mut outer_is_negative: Option<bool> = None;

    for ring in rings {
        let area = signed_area(ring);
        if area == 0 {
            continue;
        }

        let negative = area < 0;
        let outer_negative = *outer_is_negative.get_or_insert(negative);

        if negative == outer_negative && !current.is_empty() {
            polygons.push(Polygon::from(std::mem::take(&mut current)));
        }
        current.push(ring.clone());
    }

    if !current.is_empty() {
        polygons.push(Polygon::from(current));
    }

    polygons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn square(x: i16, y: i16, size: i16) -> Ring {
        vec![
            Point::new(x, y),
            Point::new(x + size, y),
            Point::new(x + size, y + size),
            Point::new(x, y + size),
        ]
    }

    fn reversed(mut ring: Ring) -> Ring {
        ring.reverse();
        ring
    }

    #[test]
    fn test_outer_with_hole() {
        let rings = vec![square(0, 0, 10), reversed(square(2, 2, 4))];
        let polygons = classify_rings(&rings);
        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0].rings.len(), 2);
    }

    #[test]
    fn test_same_orientation_starts_new_polygon() {
        let rings = vec![
            square(0, 0, 10),
            reversed(square(2, 2, 4)),
            square(20, 20, 10),
            reversed(square(22, 22, 2)),
            reversed(square(26, 26, 2)),
        ];
        let polygons = classify_rings(&rings);
        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[0].holes().len(), 1);
        assert_eq!(polygons[1].holes().len(), 2);
        assert_eq!(polygons[1].outer(), Some(&square(20, 20, 10)));
    }

    #[test]
    fn test_zero_area_rings_are_dropped() {
        let line = vec![Point::new(0, 0), Point::new(5, 5)];
        let rings = vec![line.clone(), square(0, 0, 10), vec![]];
        let polygons = classify_rings(&rings);
        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0].rings, vec![square(0, 0, 10)]);
    }

    #[test]
    fn test_single_ring_passes_through() {
        let line = vec![Point::new(0, 0), Point::new(5, 5)];
        let polygons = classify_rings(&[line.clone()]);
        assert_eq!(polygons, vec![Polygon::new(line)]);
        assert!(classify_rings(&[]).is_empty());
    }
}
