use thiserror::Error;

/// Errors raised by map construction and direct voxel access.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MapError {
    #[error("map size must be positive and finite, got {0}")]
    InvalidSize(f32),

    #[error("chunk resolution must be at least 1")]
    ZeroChunkResolution,

    #[error("voxel resolution must be at least 1")]
    ZeroVoxelResolution,

    #[error("chunk ({cx}, {cy}) is outside the {chunks}x{chunks} map")]
    ChunkOutOfRange { cx: i32, cy: i32, chunks: usize },

    #[error("voxel ({x}, {y}) is outside the {total}x{total} map")]
    VoxelOutOfRange { x: i32, y: i32, total: usize },
}
