//! GPU-side vertex and index element types
//!
//! All three are `#[repr(C)]` and `Pod`, so the backend can upload them with
//! `bytemuck::cast_slice` without any repacking.

use bytemuck::{Pod, Zeroable};
use serde::Serialize;

use crate::backend::{Primitive, PrimitiveKind};
use crate::geometry::Point;

/// One vertex of the shared fill/outline vertex buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable, Serialize)]
pub struct FillVertex {
    pub x: i16,
    pub y: i16,
}

impl From<Point> for FillVertex {
    fn from(p: Point) -> Self {
        FillVertex { x: p.x, y: p.y }
    }
}

/// One outline edge, indices relative to the start of its line group.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable, Serialize)]
pub struct LineSegment {
    pub from: u16,
    pub to: u16,
}

impl LineSegment {
    pub(crate) fn new(from: usize, to: usize) -> Self {
        LineSegment { from: group_index(from), to: group_index(to) }
    }
}

impl Primitive for LineSegment {
    const KIND: PrimitiveKind = PrimitiveKind::Lines;
}

/// One fill triangle, indices relative to the start of its triangle group.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable, Serialize)]
pub struct TriangleIndices {
    pub a: u16,
    pub b: u16,
    pub c: u16,
}

impl TriangleIndices {
    pub(crate) fn new(a: usize, b: usize, c: usize) -> Self {
        TriangleIndices { a: group_index(a), b: group_index(b), c: group_index(c) }
    }

    pub fn indices(&self) -> [u16; 3] {
        [self.a, self.b, self.c]
    }
}

impl Primitive for TriangleIndices {
    const KIND: PrimitiveKind = PrimitiveKind::Triangles;
}

// Group partitioning keeps every group-relative index below u16::MAX.
fn group_index(index: usize) -> u16 {
    debug_assert!(index <= u16::MAX as usize, "group-relative index {} overflows u16", index);
    index as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_strides() {
        assert_eq!(std::mem::size_of::<FillVertex>(), 4);
        assert_eq!(std::mem::size_of::<LineSegment>(), 4);
        assert_eq!(std::mem::size_of::<TriangleIndices>(), 6);
    }

    #[test]
    fn test_triangle_bytes_are_contiguous_u16() {
        let triangles = vec![TriangleIndices::new(0, 1, 2), TriangleIndices::new(2, 3, 0)];
        let raw: &[u16] = bytemuck::cast_slice(&triangles);
        assert_eq!(raw, &[0, 1, 2, 2, 3, 0]);
    }
}
