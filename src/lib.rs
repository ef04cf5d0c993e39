//! Fill bucket construction for vector map tiles
//!
//! Converts the polygon features of one tile into two 16-bit indexed meshes
//! that share a single vertex buffer:
//! - a triangulated fill mesh (earcut)
//! - a line-loop outline mesh, one closed loop per ring
//!
//! Both meshes are partitioned into groups that never address more than
//! 65 535 vertices, so every draw call can use `u16` indices no matter how
//! much geometry the tile holds.
//!
//! # Modules
//! - `geometry` - Tile coordinates, rings, polygons, ring classification and hole limiting
//! - `tessellation` - The `Triangulator` seam and the earcut implementation
//! - `bucket` - Mesh building, group partitioning, upload and draw dispatch
//! - `backend` - The rendering backend trait and vertex binding configurations
//! - `batch` - Parallel per-tile bucket builds
//! - `config` - Build configuration
//! - `error` - Error type
//!
//! # Example
//! ```ignore
//! let mut bucket = FillBucket::new();
//! let report = bucket.add_geometry(&feature_rings);
//! let uploaded = bucket.upload(&mut backend)?;
//! uploaded.draw_fill(&mut backend, PaintMode::Regular)?;
//! ```

pub mod backend;
pub mod batch;
pub mod bucket;
pub mod config;
pub mod error;
pub mod geometry;
pub mod tessellation;

pub use backend::{
    BindingSet,
    ByteOffset,
    PaintMode,
    Primitive,
    PrimitiveKind,
    Program,
    RenderBackend,
    Shading,
    VertexBinding,
};
pub use batch::{build_tile_buckets, TileBuild, TileGeometry};
pub use bucket::{
    BucketStats,
    DrawSummary,
    FillBucket,
    FillVertex,
    GeometryReport,
    Group,
    LineGroup,
    LineSegment,
    TriangleGroup,
    TriangleIndices,
    UploadedFillBucket,
};
pub use config::FillBucketConfig;
pub use error::BucketError;
pub use geometry::{classify_rings, limit_holes, GeometryCollection, Point, Polygon, Ring};
pub use tessellation::{Earcut, Triangulator};
