use serde::{Deserialize, Serialize};

use crate::MapError;

/// Map sizing. `size` is the world-space side length of the whole map,
/// split into `chunk_resolution` chunks per side of `voxel_resolution`
/// voxels per side each.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_size")]
    pub size: f32,
    #[serde(default = "default_chunk_resolution")]
    pub chunk_resolution: usize,
    #[serde(default = "default_voxel_resolution")]
    pub voxel_resolution: usize,
}

fn default_size() -> f32 {
    2.0
}

fn default_chunk_resolution() -> usize {
    2
}

fn default_voxel_resolution() -> usize {
    8
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            chunk_resolution: default_chunk_resolution(),
            voxel_resolution: default_voxel_resolution(),
        }
    }
}

impl MapConfig {
    pub fn new(size: f32, chunk_resolution: usize, voxel_resolution: usize) -> Self {
        Self {
            size,
            chunk_resolution,
            voxel_resolution,
        }
    }

    pub fn validate(&self) -> Result<(), MapError> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(MapError::InvalidSize(self.size));
        }
        if self.chunk_resolution == 0 {
            return Err(MapError::ZeroChunkResolution);
        }
        if self.voxel_resolution == 0 {
            return Err(MapError::ZeroVoxelResolution);
        }
        let voxel = self.voxel_size();
        if !(voxel > 0.0 && voxel.is_finite()) {
            return Err(MapError::InvalidSize(self.size));
        }
        Ok(())
    }

    #[inline]
    pub fn chunk_size(&self) -> f32 {
        self.size / self.chunk_resolution as f32
    }

    #[inline]
    pub fn voxel_size(&self) -> f32 {
        self.chunk_size() / self.voxel_resolution as f32
    }

    /// Voxels per side across the whole map.
    #[inline]
    pub fn total_resolution(&self) -> usize {
        self.chunk_resolution * self.voxel_resolution
    }
}
