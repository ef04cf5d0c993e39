//! Polygon triangulation using the earcut algorithm
//!
//! Supports an outer ring plus any number of holes.

use super::Triangulator;
use crate::geometry::Ring;

/// Earcut triangulation backed by `earcutr`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Earcut;

impl Triangulator for Earcut {
    fn triangulate(&self, rings: &[Ring]) -> Vec<u32> {
        let vertex_count: usize = rings.iter().map(Vec::len).sum();

        // Build flat coordinate array for earcut
        let mut flat_coords: Vec<f64> = Vec::with_capacity(vertex_count * 2);
        let mut hole_indices: Vec<usize> = Vec::new();

        for ring in rings {
            if ring.is_empty() {
                continue; // Contributes no vertices, so no hole start either
            }
            if !flat_coords.is_empty() {
                hole_indices.push(flat_coords.len() / 2);
            }
            for p in ring {
                flat_coords.push(p.x as f64);
                flat_coords.push(p.y as f64);
            }
        }

        if flat_coords.is_empty() {
            return Vec::new();
        }

        match earcutr::earcut(&flat_coords, &hole_indices, 2) {
            Ok(indices) => indices.into_iter().map(|i| i as u32).collect(),
            Err(_) => {
                log::debug!("earcut failed on polygon with {} vertices, no triangles emitted", vertex_count);
                Vec::new()
            }
        }
    }
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

    #[test]
    fn test_triangle() {
        let ring = vec![Point::new(0, 0), Point::new(10, 0), Point::new(0, 10)];
        let indices = Earcut.triangulate(&[ring]);
        assert_eq!(indices.len(), 3);
        let mut sorted = indices.clone();
        sorted.sort();
        assert_eq!(sorted, vec![0, 1, 2]);
    }

    #[test]
    fn test_square_with_hole() {
        let mut hole = square(3, 3, 4);
        hole.reverse();
        let indices = Earcut.triangulate(&[square(0, 0, 10), hole]);
        assert_eq!(indices.len() % 3, 0);
        assert!(indices.len() / 3 >= 2);
        assert!(indices.iter().all(|&i| i < 8));
        // Every hole vertex takes part in some triangle
        for v in 4..8 {
            assert!(indices.contains(&v));
        }
    }

    #[test]
    fn test_empty_rings_do_not_shift_indices() {
        let indices = Earcut.triangulate(&[vec![], square(0, 0, 10), vec![]]);
        assert_eq!(indices.len(), 6);
        assert!(indices.iter().all(|&i| i < 4));
    }

    #[test]
    fn test_empty_input() {
        assert!(Earcut.triangulate(&[]).is_empty());
        assert!(Earcut.triangulate(&[vec![]]).is_empty());
    }
}
