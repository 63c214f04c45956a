//! CPU meshing crate: marching-squares triangulation with chunk-seam stitching (engine-only).
#![forbid(unsafe_code)]

mod build;
pub mod cell;
mod chunk;
mod mesh_build;
mod neighbors;

pub use build::{build_chunk_mesh, build_chunk_mesh_into};
pub use cell::{cell_type, triangulate_cell};
pub use chunk::ChunkMeshCPU;
pub use mesh_build::MeshBuild;
pub use neighbors::NeighborGrids;
