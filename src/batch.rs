//! Parallel bucket builds across tiles
//!
//! Each tile gets its own bucket, so tiles can be built on the rayon pool
//! without sharing any mutable state.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bucket::{FillBucket, GeometryReport};
use crate::config::FillBucketConfig;
use crate::error::BucketError;
use crate::geometry::GeometryCollection;

/// The fill features of one tile, each an unclassified ring collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TileGeometry {
    pub id: String,
    #[serde(default)]
    pub features: Vec<GeometryCollection>,
}

/// A built (not yet uploaded) bucket for one tile.
pub struct TileBuild {
    pub id: String,
    pub bucket: FillBucket,
    pub report: GeometryReport,
}

/// Build one bucket per tile in parallel. Output order matches input order.
pub fn build_tile_buckets(
    tiles: &[TileGeometry],
    config: &FillBucketConfig,
) -> Result<Vec<TileBuild>, BucketError> {
    config.validate()?;

    // Use rayon to build tiles in parallel
    tiles
        .par_iter()
        .map(|tile| -> Result<TileBuild, BucketError> {
            let mut bucket = FillBucket::with_config(config.clone())?;
            let mut report = GeometryReport::default();
            for feature in &tile.features {
                report.merge(bucket.add_geometry(feature));
            }
            if report.polygons_rejected > 0 {
                log::warn!(
                    "[{}] {} polygons too large to render",
                    tile.id,
                    report.polygons_rejected
                );
            }
            Ok(TileBuild {
                id: tile.id.clone(),
                bucket,
                report,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn tile(id: &str, features: usize) -> TileGeometry {
        let ring = vec![Point::new(0, 0), Point::new(8, 0), Point::new(0, 8)];
        TileGeometry {
            id: id.to_string(),
            features: vec![vec![ring]; features],
        }
    }

    #[test]
    fn test_builds_every_tile_in_order() {
        let tiles = vec![tile("0/0/0", 2), tile("1/0/0", 0), tile("1/1/0", 5)];
        let builds = build_tile_buckets(&tiles, &FillBucketConfig::default()).unwrap();

        let ids: Vec<&str> = builds.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["0/0/0", "1/0/0", "1/1/0"]);
        assert_eq!(builds[0].report.polygons_added, 2);
        assert!(!builds[1].bucket.has_data());
        assert_eq!(builds[2].bucket.stats().triangles, 5);
    }

    #[test]
    fn test_invalid_config_fails_up_front() {
        let config = FillBucketConfig { hole_limit: 500, max_group_vertices: 70_000 };
        assert!(build_tile_buckets(&[tile("a", 1)], &config).is_err());
    }

    #[test]
    fn test_tile_json() {
        let json = r#"{ "id": "3/2/1", "features": [ [ [[0,0],[4,0],[4,4]] ] ] }"#;
        let tile: TileGeometry = serde_json::from_str(json).unwrap();
        assert_eq!(tile.features.len(), 1);
        assert_eq!(tile.features[0][0][2], Point::new(4, 4));
    }
}
