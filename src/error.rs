//! Error type for fill bucket construction and rendering

/// Everything that can go wrong while building, uploading or drawing a bucket.
///
/// Drawing before upload and uploading twice are not represented here: the
/// building bucket is consumed by `upload`, and only the uploaded bucket has
/// draw entry points.
#[derive(thiserror::Error, Debug)]
pub enum BucketError {
    /// A single polygon has more vertices than one 16-bit indexed group can address.
    #[error("polygon has {vertices} vertices, more than the {limit} a single group can address")]
    GeometryTooLarge { vertices: usize, limit: usize },

    #[error("invalid fill bucket config: {0}")]
    InvalidConfig(String),

    /// Buffer allocation, layout binding or draw submission failed in the backend.
    #[error("render backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl BucketError {
    pub fn invalid_config<T: ToString>(msg: T) -> Self {
        BucketError::InvalidConfig(msg.to_string())
    }

    /// True for the per-polygon skip condition; callers drop the polygon and continue.
    pub fn is_geometry_too_large(&self) -> bool {
        matches!(self, BucketError::GeometryTooLarge { .. })
    }
}
