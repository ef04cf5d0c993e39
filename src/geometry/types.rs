//! Core geometry types for tile features
//!
//! Coordinates are integers in tile-local space. Rings carry no closing
//! duplicate: the last vertex connects back to the first.

use serde::{Deserialize, Serialize};

/// A tile-local coordinate. Serialized as `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[i16; 2]", into = "[i16; 2]")]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    pub const fn new(x: i16, y: i16) -> Self {
        Point { x, y }
    }
}

impl From<[i16; 2]> for Point {
    fn from([x, y]: [i16; 2]) -> Self {
        Point { x, y }
    }
}

impl From<Point> for [i16; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// One closed boundary, outer or hole.
pub type Ring = Vec<Point>;

/// The unclassified rings of one feature.
pub type GeometryCollection = Vec<Ring>;

/// A classified polygon: `rings[0]` is the outer boundary, the rest are holes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Polygon {
    pub rings: Vec<Ring>,
}

impl Polygon {
    pub fn new(outer: Ring) -> Self {
        Polygon { rings: vec![outer] }
    }

    pub fn with_holes(outer: Ring, holes: Vec<Ring>) -> Self {
        let mut rings = Vec::with_capacity(holes.len() + 1);
        rings.push(outer);
        rings.extend(holes);
        Polygon { rings }
    }

    pub fn outer(&self) -> Option<&Ring> {
        self.rings.first()
    }

    pub fn holes(&self) -> &[Ring] {
        self.rings.get(1..).unwrap_or(&[])
    }

    /// Total vertices across all rings.
    pub fn vertex_count(&self) -> usize {
        self.rings.iter().map(Vec::len).sum()
    }
}

impl From<Vec<Ring>> for Polygon {
    fn from(rings: Vec<Ring>) -> Self {
        Polygon { rings }
    }
}

/// Twice the signed area of a ring (shoelace). Zero for degenerate rings.
///
/// The sign depends on orientation; only its sign relative to other rings
/// of the same feature matters.
pub fn signed_area(ring: &[Point]) -> i64 {
    let n = ring.len();
    if n < 3 {
        return 0;
    }
    let mut sum = 0i64;
    let mut j = n - 1;
    for i in 0..n {
        let p1 = ring[i];
        let p2 = ring[j];
        sum += (p2.x as i64 - p1.x as i64) * (p1.y as i64 + p2.y as i64);
        j = i;
    }
    sum
}
