//! Chunked voxel map: owns the chunk arena, routes edits and keeps meshes current.
#![forbid(unsafe_code)]

mod config;
mod error;
mod map;

pub use config::MapConfig;
pub use error::MapError;
pub use map::{Chunk, ChunkNeighbors, EditOutcome, VoxelMap};

pub use contour_chunk::{ChunkCoord, Voxel, VoxelGrid};
pub use contour_edit::{Fill, StencilShape, VoxelStencil};
pub use contour_geom::Vec2;
pub use contour_mesh_cpu::{ChunkMeshCPU, MeshBuild};
