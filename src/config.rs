//! Fill bucket build configuration
//!
//! Defaults match what a production renderer wants. Hosts can load a config
//! from JSON or overlay environment variables on the defaults.

use serde::{Deserialize, Serialize};
use std::env;

use crate::error::BucketError;

/// Largest number of vertices a `u16` indexed group can address.
pub const MAX_GROUP_VERTICES: usize = u16::MAX as usize;

/// Holes kept per polygon before triangulation. Earcut slows down sharply
/// with many interior rings.
pub const DEFAULT_HOLE_LIMIT: usize = 500;

pub const HOLE_LIMIT_ENV: &str = "TILE_FILL_HOLE_LIMIT";
pub const MAX_GROUP_VERTICES_ENV: &str = "TILE_FILL_MAX_GROUP_VERTICES";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillBucketConfig {
    /// Holes kept per polygon; the smallest holes beyond this are discarded.
    pub hole_limit: usize,

    /// Vertex capacity of one line or triangle group, and the largest
    /// polygon the bucket accepts. Must be in `1..=65535`.
    pub max_group_vertices: usize,
}

impl Default for FillBucketConfig {
    fn default() -> Self {
        FillBucketConfig {
            hole_limit: DEFAULT_HOLE_LIMIT,
            max_group_vertices: MAX_GROUP_VERTICES,
        }
    }
}

impl FillBucketConfig {
    /// Defaults with `TILE_FILL_HOLE_LIMIT` / `TILE_FILL_MAX_GROUP_VERTICES` applied.
    pub fn from_env() -> Result<Self, BucketError> {
        let mut config = FillBucketConfig::default();
        if let Some(value) = read_env_usize(HOLE_LIMIT_ENV)? {
            config.hole_limit = value;
        }
        if let Some(value) = read_env_usize(MAX_GROUP_VERTICES_ENV)? {
            config.max_group_vertices = value;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<Self, BucketError> {
        let config: FillBucketConfig =
            serde_json::from_str(json).map_err(BucketError::invalid_config)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BucketError> {
        if self.max_group_vertices == 0 || self.max_group_vertices > MAX_GROUP_VERTICES {
            return Err(BucketError::invalid_config(format!(
                "max_group_vertices must be in 1..={}, got {}",
                MAX_GROUP_VERTICES, self.max_group_vertices
            )));
        }
        Ok(())
    }
}

fn read_env_usize(name: &str) -> Result<Option<usize>, BucketError> {
    match env::var(name) {
        Ok(val) if val.trim().is_empty() => Ok(None),
        Ok(val) => val
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|e| BucketError::invalid_config(format!("{}={:?}: {}", name, val, e))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FillBucketConfig::default();
        assert_eq!(config.hole_limit, 500);
        assert_eq!(config.max_group_vertices, 65535);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_json_partial_uses_defaults() {
        let config = FillBucketConfig::from_json_str(r#"{ "hole_limit": 12 }"#).unwrap();
        assert_eq!(config.hole_limit, 12);
        assert_eq!(config.max_group_vertices, MAX_GROUP_VERTICES);
    }

    #[test]
    fn test_rejects_group_size_above_u16() {
        let err = FillBucketConfig::from_json_str(r#"{ "max_group_vertices": 65536 }"#).unwrap_err();
        assert!(matches!(err, BucketError::InvalidConfig(_)));

        let zero = FillBucketConfig { hole_limit: 1, max_group_vertices: 0 };
        assert!(zero.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(FillBucketConfig::from_json_str("{ not json").is_err());
    }
}
