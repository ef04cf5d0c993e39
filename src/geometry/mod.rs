//! Tile geometry input types and pre-processing
//!
//! # Submodules
//! - `types` - Tile-local points, rings and polygons
//! - `classify` - Grouping raw rings into polygons (outer ring + holes)
//! - `limit` - Bounding the number of holes per polygon before triangulation

mod types;
mod classify;
mod limit;

pub use types::{
    Point,
    Ring,
    GeometryCollection,
    Polygon,
    signed_area,
};

pub use classify::classify_rings;

pub use limit::limit_holes;
