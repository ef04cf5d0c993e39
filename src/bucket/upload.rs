//! Hand-off of the built mesh to the rendering backend

use super::{FillBucket, UploadedFillBucket};
use crate::backend::RenderBackend;
use crate::error::BucketError;
use crate::tessellation::Triangulator;

impl<T: Triangulator> FillBucket<T> {
    /// Move the vertex and index arrays into backend buffers.
    ///
    /// Consumes the bucket: nothing can be added afterwards, and the arrays
    /// are owned by the backend from here on. Must run on the thread that
    /// owns the backend.
    pub fn upload<B: RenderBackend>(self, backend: &mut B) -> Result<UploadedFillBucket<B>, BucketError> {
        let stats = self.stats();
        let FillBucket {
            vertices,
            lines,
            triangles,
            line_groups,
            triangle_groups,
            ..
        } = self;

        let vertex_buffer = backend.create_vertex_buffer(vertices)?;
        let line_index_buffer = backend.create_index_buffer(lines)?;
        let triangle_index_buffer = backend.create_index_buffer(triangles)?;

        log::debug!(
            "Uploaded fill bucket: {} vertices, {} segments in {} groups, {} triangles in {} groups",
            stats.vertices,
            stats.line_segments,
            stats.line_groups,
            stats.triangles,
            stats.triangle_groups
        );

        Ok(UploadedFillBucket {
            vertex_buffer,
            line_index_buffer,
            triangle_index_buffer,
            line_groups: line_groups.into_groups(),
            triangle_groups: triangle_groups.into_groups(),
            stats,
        })
    }
}
