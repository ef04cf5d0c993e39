//! Draw dispatch for an uploaded fill bucket
//!
//! One draw call per group. The vertex layout is re-bound for every group at
//! the byte offset where that group's vertices start, so the `u16` indices of
//! the group address vertices relative to that start.

use serde::Serialize;

use super::{BucketStats, Group, LineSegment, TriangleIndices};
use crate::backend::{
    BindingSet, ByteOffset, PaintMode, Primitive, RenderBackend, Shading, FILL_BINDINGS,
    OUTLINE_BINDINGS,
};
use crate::error::BucketError;

/// Draw calls issued by one draw entry point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DrawSummary {
    pub draw_calls: usize,
    pub indices: usize,
}

/// A fill bucket whose mesh lives in backend buffers. Read-only; draw it as
/// often as needed.
pub struct UploadedFillBucket<B: RenderBackend> {
    pub(super) vertex_buffer: B::VertexBuffer,
    pub(super) line_index_buffer: B::IndexBuffer,
    pub(super) triangle_index_buffer: B::IndexBuffer,
    pub(super) line_groups: Vec<Group>,
    pub(super) triangle_groups: Vec<Group>,
    pub(super) stats: BucketStats,
}

/// Running byte offsets into the vertex buffer and one index buffer.
#[derive(Debug, Clone, Copy, Default)]
struct DrawCursor {
    vertex: ByteOffset,
    index: ByteOffset,
}

impl<B: RenderBackend> UploadedFillBucket<B> {
    /// Triangulated fill with a plain colour.
    pub fn draw_fill(&self, backend: &mut B, mode: PaintMode) -> Result<DrawSummary, BucketError> {
        self.draw_triangles(backend, Shading::Plain, mode)
    }

    /// Triangulated fill with a pattern texture.
    pub fn draw_fill_pattern(&self, backend: &mut B, mode: PaintMode) -> Result<DrawSummary, BucketError> {
        self.draw_triangles(backend, Shading::Pattern, mode)
    }

    /// Ring outlines with a plain colour.
    pub fn draw_outline(&self, backend: &mut B, mode: PaintMode) -> Result<DrawSummary, BucketError> {
        self.draw_lines(backend, Shading::Plain, mode)
    }

    /// Ring outlines with a pattern texture.
    pub fn draw_outline_pattern(&self, backend: &mut B, mode: PaintMode) -> Result<DrawSummary, BucketError> {
        self.draw_lines(backend, Shading::Pattern, mode)
    }

    pub fn has_data(&self) -> bool {
        !self.triangle_groups.is_empty() || !self.line_groups.is_empty()
    }

    pub fn needs_clipping(&self) -> bool {
        true
    }

    pub fn line_groups(&self) -> &[Group] {
        &self.line_groups
    }

    pub fn triangle_groups(&self) -> &[Group] {
        &self.triangle_groups
    }

    pub fn stats(&self) -> BucketStats {
        self.stats
    }

    fn draw_triangles(&self, backend: &mut B, shading: Shading, mode: PaintMode) -> Result<DrawSummary, BucketError> {
        self.draw_groups::<TriangleIndices>(
            backend,
            &self.triangle_groups,
            &self.triangle_index_buffer,
            &FILL_BINDINGS,
            shading,
            mode,
        )
    }

    fn draw_lines(&self, backend: &mut B, shading: Shading, mode: PaintMode) -> Result<DrawSummary, BucketError> {
        self.draw_groups::<LineSegment>(
            backend,
            &self.line_groups,
            &self.line_index_buffer,
            &OUTLINE_BINDINGS,
            shading,
            mode,
        )
    }

    fn draw_groups<P: Primitive>(
        &self,
        backend: &mut B,
        groups: &[Group],
        index_buffer: &B::IndexBuffer,
        bindings: &BindingSet,
        shading: Shading,
        mode: PaintMode,
    ) -> Result<DrawSummary, BucketError> {
        let binding = bindings.select(shading, mode);
        let element_stride = std::mem::size_of::<P>();
        let indices_per_element = P::KIND.indices_per_element();

        let mut cursor = DrawCursor::default();
        let mut summary = DrawSummary::default();

        for group in groups {
            backend.bind_vertex_layout(binding, &self.vertex_buffer, index_buffer, cursor.vertex)?;

            let index_count = group.elements_length * indices_per_element;
            log::trace!(
                "{:?} draw: {} indices at index byte {} / vertex byte {}",
                P::KIND,
                index_count,
                cursor.index.bytes(),
                cursor.vertex.bytes()
            );
            backend.draw_indexed(P::KIND, index_count, cursor.index)?;

            summary.draw_calls += 1;
            summary.indices += index_count;

            cursor.vertex = cursor.vertex.advance(group.vertex_length, binding.stride);
            cursor.index = cursor.index.advance(group.elements_length, element_stride);
        }

        Ok(summary)
    }
}
