//! Fill bucket: mesh building, upload and draw dispatch for one tile layer
//!
//! A `FillBucket` collects the polygons of every fill feature in a tile into
//! one shared vertex array plus two index arrays (outline segments and fill
//! triangles). Each index array is partitioned into groups of at most
//! 65 535 vertices so it can be drawn with `u16` indices.
//!
//! Lifecycle: `FillBucket` is built with `add_geometry` calls, then consumed
//! by `upload`, which moves the arrays into backend buffers and returns an
//! `UploadedFillBucket`. Only the uploaded bucket can draw.
//!
//! # Submodules
//! - `vertex` - Vertex and index element types
//! - `groups` - Greedy 16-bit group partitioning
//! - `builder` - Polygon to vertex/segment/triangle emission
//! - `upload` - Ownership hand-off to the backend
//! - `draw` - Per-group draw dispatch

mod vertex;
mod groups;
mod builder;
mod upload;
mod draw;

use serde::Serialize;

use crate::backend::PrimitiveKind;
use crate::config::FillBucketConfig;
use crate::error::BucketError;
use crate::tessellation::{Earcut, Triangulator};

use groups::GroupSequence;

pub use vertex::{FillVertex, LineSegment, TriangleIndices};
pub use groups::{Group, LineGroup, TriangleGroup};
pub use draw::{DrawSummary, UploadedFillBucket};

/// Outcome of one `add_geometry` / `add_polygons` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GeometryReport {
    pub polygons_added: usize,
    /// Polygons skipped because they exceed the per-group vertex limit.
    pub polygons_rejected: usize,
    /// Holes discarded by the hole limit.
    pub holes_dropped: usize,
}

impl GeometryReport {
    pub fn merge(&mut self, other: GeometryReport) {
        self.polygons_added += other.polygons_added;
        self.polygons_rejected += other.polygons_rejected;
        self.holes_dropped += other.holes_dropped;
    }
}

/// Size snapshot of a bucket's mesh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BucketStats {
    pub vertices: usize,
    pub line_segments: usize,
    pub triangles: usize,
    pub line_groups: usize,
    pub triangle_groups: usize,
}

/// A fill bucket in its building phase.
///
/// Not synchronised: build one bucket per thread. Different buckets share no
/// state and may be built in parallel.
pub struct FillBucket<T: Triangulator = Earcut> {
    config: FillBucketConfig,
    triangulator: T,
    vertices: Vec<FillVertex>,
    lines: Vec<LineSegment>,
    triangles: Vec<TriangleIndices>,
    line_groups: GroupSequence,
    triangle_groups: GroupSequence,
}

impl FillBucket<Earcut> {
    pub fn new() -> Self {
        Self::build(FillBucketConfig::default(), Earcut)
    }

    pub fn with_config(config: FillBucketConfig) -> Result<Self, BucketError> {
        Self::with_triangulator(config, Earcut)
    }
}

impl Default for FillBucket<Earcut> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Triangulator> FillBucket<T> {
    pub fn with_triangulator(config: FillBucketConfig, triangulator: T) -> Result<Self, BucketError> {
        config.validate()?;
        Ok(Self::build(config, triangulator))
    }

    fn build(config: FillBucketConfig, triangulator: T) -> Self {
        let max_vertices = config.max_group_vertices;
        FillBucket {
            config,
            triangulator,
            vertices: Vec::new(),
            lines: Vec::new(),
            triangles: Vec::new(),
            line_groups: GroupSequence::new(PrimitiveKind::Lines, max_vertices),
            triangle_groups: GroupSequence::new(PrimitiveKind::Triangles, max_vertices),
        }
    }

    pub fn config(&self) -> &FillBucketConfig {
        &self.config
    }

    /// True once any polygon with at least one vertex has been added.
    pub fn has_data(&self) -> bool {
        !self.triangle_groups.is_empty() || !self.line_groups.is_empty()
    }

    /// Fill meshes always need clipping to the tile boundary.
    pub fn needs_clipping(&self) -> bool {
        true
    }

    pub fn vertices(&self) -> &[FillVertex] {
        &self.vertices
    }

    pub fn lines(&self) -> &[LineSegment] {
        &self.lines
    }

    pub fn triangles(&self) -> &[TriangleIndices] {
        &self.triangles
    }

    pub fn line_groups(&self) -> &[LineGroup] {
        self.line_groups.groups()
    }

    pub fn triangle_groups(&self) -> &[TriangleGroup] {
        self.triangle_groups.groups()
    }

    pub fn stats(&self) -> BucketStats {
        BucketStats {
            vertices: self.vertices.len(),
            line_segments: self.lines.len(),
            triangles: self.triangles.len(),
            line_groups: self.line_groups.groups().len(),
            triangle_groups: self.triangle_groups.groups().len(),
        }
    }
}
