use contour_chunk::ChunkCoord;
use contour_geom::Vec2;

use crate::mesh_build::MeshBuild;

/// Triangulated output for one chunk. Vertices are local to `origin`.
#[derive(Clone, Debug, Default)]
pub struct ChunkMeshCPU {
    pub coord: ChunkCoord,
    pub origin: Vec2,
    pub mesh: MeshBuild,
    /// Stamp of the edit pass that last rebuilt this mesh.
    pub rev: u64,
}

impl ChunkMeshCPU {
    pub fn new(coord: ChunkCoord, origin: Vec2) -> Self {
        Self {
            coord,
            origin,
            mesh: MeshBuild::default(),
            rev: 0,
        }
    }

    /// The mesh moved into world space.
    pub fn world_mesh(&self) -> MeshBuild {
        self.mesh.translated(self.origin)
    }
}
