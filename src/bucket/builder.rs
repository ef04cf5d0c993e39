//! Mesh building
//!
//! Emits the vertices of every ring once, into the shared vertex array, and
//! indexes them twice: as closed line loops for the outline and as earcut
//! triangles for the fill. Both index streams are relative to the start of
//! the group they land in.

use super::{FillBucket, FillVertex, GeometryReport, LineSegment, TriangleIndices};
use crate::error::BucketError;
use crate::geometry::{classify_rings, limit_holes, Point, Polygon, Ring};
use crate::tessellation::Triangulator;

impl<T: Triangulator> FillBucket<T> {
    /// Add one feature given as raw rings: classify, then add each polygon.
    pub fn add_geometry(&mut self, rings: &[Ring]) -> GeometryReport {
        self.add_polygons(classify_rings(rings))
    }

    /// Add already classified polygons.
    ///
    /// Polygons that are too large are skipped and counted; the rest are
    /// still added.
    pub fn add_polygons<I>(&mut self, polygons: I) -> GeometryReport
    where
        I: IntoIterator<Item = Polygon>,
    {
        let mut report = GeometryReport::default();
        for polygon in polygons {
            match self.push_polygon(polygon, &mut report) {
                Ok(()) => report.polygons_added += 1,
                Err(err) => {
                    log::warn!("Skipping polygon: {}", err);
                    report.polygons_rejected += 1;
                }
            }
        }
        report
    }

    /// Add one classified polygon.
    ///
    /// Fails with `GeometryTooLarge` before touching the bucket when the
    /// polygon (after hole limiting) has more vertices than one group holds.
    pub fn add_polygon(&mut self, polygon: Polygon) -> Result<(), BucketError> {
        self.push_polygon(polygon, &mut GeometryReport::default())
    }

    fn push_polygon(&mut self, mut polygon: Polygon, report: &mut GeometryReport) -> Result<(), BucketError> {
        let dropped = limit_holes(&mut polygon, self.config.hole_limit);
        if dropped > 0 {
            log::debug!("Dropped {} smallest holes (limit {})", dropped, self.config.hole_limit);
            report.holes_dropped += dropped;
        }

        let total_vertices = polygon.vertex_count();
        let limit = self.config.max_group_vertices;
        if total_vertices > limit {
            return Err(BucketError::GeometryTooLarge { vertices: total_vertices, limit });
        }
        if total_vertices == 0 {
            return Ok(());
        }

        for ring in &polygon.rings {
            self.push_ring_outline(ring);
        }
        self.push_fill(&polygon.rings, total_vertices);

        Ok(())
    }

    /// Emit a ring's vertices and its closed loop of segments.
    fn push_ring_outline(&mut self, ring: &[Point]) {
        let n = ring.len();
        if n == 0 {
            return;
        }

        // A ring is never split: it goes whole into the active or a fresh group
        let group = self.line_groups.reserve(n);
        let base = group.vertex_length;

        self.vertices.extend(ring.iter().copied().map(FillVertex::from));
        self.lines.push(LineSegment::new(base + n - 1, base));
        for i in 1..n {
            self.lines.push(LineSegment::new(base + i - 1, base + i));
        }

        group.vertex_length += n;
        group.elements_length += n;
    }

    /// Triangulate the polygon and append its triangles to one triangle group.
    fn push_fill(&mut self, rings: &[Ring], total_vertices: usize) {
        let indices = self.triangulator.triangulate(rings);
        debug_assert_eq!(indices.len() % 3, 0, "triangulation returned a partial triangle");
        if indices.len() % 3 != 0 {
            log::warn!("Triangulation returned {} indices, ignoring the partial triangle", indices.len());
        }

        // The whole polygon lands in one group; the vertex cursor still
        // advances when triangulation produced nothing, because the vertices
        // are already in the shared buffer.
        let group = self.triangle_groups.reserve(total_vertices);
        let base = group.vertex_length;

        let mut emitted = 0;
        for tri in indices.chunks_exact(3) {
            let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            if a >= total_vertices || b >= total_vertices || c >= total_vertices {
                log::warn!(
                    "Triangle ({}, {}, {}) out of range for polygon with {} vertices",
                    a, b, c, total_vertices
                );
                continue;
            }
            self.triangles.push(TriangleIndices::new(base + a, base + b, base + c));
            emitted += 1;
        }

        group.vertex_length += total_vertices;
        group.elements_length += emitted;
    }
}
