use contour_chunk::{ChunkCoord, VoxelGrid};
use contour_edit::{Fill, StencilShape, VoxelStencil};
use contour_geom::Vec2;
use contour_mesh_cpu::{ChunkMeshCPU, MeshBuild, NeighborGrids, build_chunk_mesh};
use rayon::prelude::*;

use crate::{MapConfig, MapError};

/// Arena indices of the chunks a chunk stitches against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChunkNeighbors {
    pub x: Option<usize>,
    pub y: Option<usize>,
    pub xy: Option<usize>,
}

/// One map tile: its voxels, who it stitches against, and its last mesh.
#[derive(Clone, Debug)]
pub struct Chunk {
    grid: VoxelGrid,
    neighbors: ChunkNeighbors,
    cpu: ChunkMeshCPU,
}

impl Chunk {
    #[inline]
    pub fn coord(&self) -> ChunkCoord {
        self.cpu.coord
    }

    #[inline]
    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    #[inline]
    pub fn neighbors(&self) -> ChunkNeighbors {
        self.neighbors
    }

    /// Chunk-local mesh.
    #[inline]
    pub fn mesh(&self) -> &MeshBuild {
        &self.cpu.mesh
    }

    #[inline]
    pub fn cpu(&self) -> &ChunkMeshCPU {
        &self.cpu
    }

    /// Stamp of the pass that last rebuilt this chunk's mesh.
    #[inline]
    pub fn rev(&self) -> u64 {
        self.cpu.rev
    }

    /// World-space origin of the chunk's local frame.
    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.cpu.origin
    }
}

/// What an edit did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditOutcome {
    /// Chunks the stencil was applied to, row-major.
    pub touched: Vec<ChunkCoord>,
    /// Chunks whose meshes were rebuilt, row-major. Includes -x/-y neighbors
    /// whose seam strips read an edited boundary.
    pub remeshed: Vec<ChunkCoord>,
    /// Voxels whose state flipped.
    pub changed: usize,
}

impl EditOutcome {
    #[inline]
    pub fn is_noop(&self) -> bool {
        self.touched.is_empty()
    }
}

/// A square map of `chunk_resolution²` chunks centered on the world origin.
///
/// Chunks live in a row-major arena and refer to their +x/+y/+xy neighbors by
/// index. Edits run in two phases: every affected chunk is written first, then
/// every chunk whose mesh depends on the written voxels is rebuilt.
#[derive(Clone, Debug)]
pub struct VoxelMap {
    cfg: MapConfig,
    chunk_size: f32,
    voxel_size: f32,
    half_size: f32,
    chunks: Vec<Chunk>,
    counter: u64,
}

impl VoxelMap {
    pub fn new(cfg: MapConfig) -> Result<Self, MapError> {
        cfg.validate()?;
        let cr = cfg.chunk_resolution;
        let chunk_size = cfg.chunk_size();
        let half_size = cfg.size * 0.5;
        let mut chunks = Vec::with_capacity(cr * cr);
        for y in 0..cr {
            for x in 0..cr {
                let i = y * cr + x;
                let has_x = x + 1 < cr;
                let has_y = y + 1 < cr;
                let neighbors = ChunkNeighbors {
                    x: has_x.then_some(i + 1),
                    y: has_y.then_some(i + cr),
                    xy: (has_x && has_y).then_some(i + cr + 1),
                };
                let coord = ChunkCoord::new(x as i32, y as i32);
                let origin = Vec2::new(
                    x as f32 * chunk_size - half_size,
                    y as f32 * chunk_size - half_size,
                );
                chunks.push(Chunk {
                    grid: VoxelGrid::new(cfg.voxel_resolution, chunk_size),
                    neighbors,
                    cpu: ChunkMeshCPU::new(coord, origin),
                });
            }
        }
        let mut map = Self {
            cfg,
            chunk_size,
            voxel_size: cfg.voxel_size(),
            half_size,
            chunks,
            counter: 0,
        };
        map.remesh_all();
        log::info!(
            "created voxel map: {}x{} chunks of {}x{} voxels, size {}",
            cr,
            cr,
            cfg.voxel_resolution,
            cfg.voxel_resolution,
            cfg.size
        );
        Ok(map)
    }

    #[inline]
    pub fn config(&self) -> &MapConfig {
        &self.cfg
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.cfg.size
    }

    #[inline]
    pub fn chunk_resolution(&self) -> usize {
        self.cfg.chunk_resolution
    }

    #[inline]
    pub fn voxel_resolution(&self) -> usize {
        self.cfg.voxel_resolution
    }

    #[inline]
    pub fn total_resolution(&self) -> usize {
        self.cfg.total_resolution()
    }

    #[inline]
    pub fn chunk_size(&self) -> f32 {
        self.chunk_size
    }

    #[inline]
    pub fn voxel_size(&self) -> f32 {
        self.voxel_size
    }

    #[inline]
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    #[inline]
    fn chunk_index(&self, coord: ChunkCoord) -> Option<usize> {
        let cr = self.cfg.chunk_resolution as i32;
        if coord.cx < 0 || coord.cy < 0 || coord.cx >= cr || coord.cy >= cr {
            return None;
        }
        Some((coord.cy * cr + coord.cx) as usize)
    }

    pub fn chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunk_index(coord).map(|i| &self.chunks[i])
    }

    /// Like [`VoxelMap::chunk`], but reports which coordinate was out of range.
    pub fn try_chunk(&self, coord: ChunkCoord) -> Result<&Chunk, MapError> {
        self.chunk(coord).ok_or(MapError::ChunkOutOfRange {
            cx: coord.cx,
            cy: coord.cy,
            chunks: self.cfg.chunk_resolution,
        })
    }

    /// World-space origin of chunk `coord`, whether or not it exists.
    pub fn chunk_origin(&self, coord: ChunkCoord) -> Vec2 {
        Vec2::new(
            coord.cx as f32 * self.chunk_size - self.half_size,
            coord.cy as f32 * self.chunk_size - self.half_size,
        )
    }

    /// Global voxel coordinates of the cell containing world point `p`.
    /// Points off the map map to coordinates outside `[0, total_resolution)`.
    pub fn world_to_voxel(&self, p: Vec2) -> (i32, i32) {
        (
            ((p.x + self.half_size) / self.voxel_size).floor() as i32,
            ((p.y + self.half_size) / self.voxel_size).floor() as i32,
        )
    }

    /// World-space center of global voxel `(gx, gy)`.
    pub fn voxel_center(&self, gx: i32, gy: i32) -> Vec2 {
        Vec2::new(
            (gx as f32 + 0.5) * self.voxel_size - self.half_size,
            (gy as f32 + 0.5) * self.voxel_size - self.half_size,
        )
    }

    /// Splits global voxel coordinates into (chunk index, local x, local y).
    fn locate(&self, gx: i32, gy: i32) -> Option<(usize, usize, usize)> {
        let total = self.total_resolution() as i64;
        let (gx, gy) = (i64::from(gx), i64::from(gy));
        if gx < 0 || gy < 0 || gx >= total || gy >= total {
            return None;
        }
        let vr = self.cfg.voxel_resolution as i64;
        let cr = self.cfg.chunk_resolution as i64;
        let i = (gy / vr) * cr + gx / vr;
        Some((i as usize, (gx % vr) as usize, (gy % vr) as usize))
    }

    /// Occupancy of global voxel `(gx, gy)`, `None` off the map.
    pub fn voxel_state(&self, gx: i32, gy: i32) -> Option<bool> {
        self.locate(gx, gy)
            .map(|(i, x, y)| self.chunks[i].grid.state(x, y))
    }

    /// Paints a stencil centered on the voxel under world point `point`.
    /// Non-finite points miss the map like any other off-map point.
    pub fn edit(
        &mut self,
        point: Vec2,
        shape: StencilShape,
        fill: Fill,
        radius: u32,
    ) -> EditOutcome {
        if !point.x.is_finite() || !point.y.is_finite() {
            log::debug!(
                target: "edit",
                "edit at non-finite point ({}, {}) misses the map",
                point.x,
                point.y
            );
            return EditOutcome::default();
        }
        let (vx, vy) = self.world_to_voxel(point);
        self.edit_voxels(vx, vy, VoxelStencil::new(shape, fill, radius))
    }

    /// Paints `stencil` centered on global voxel `(center_x, center_y)`.
    ///
    /// The stencil is re-centered into each overlapped chunk's local frame and
    /// applied there; once every write is done the touched chunks and any
    /// -x/-y/-xy neighbors reading an edited boundary are remeshed.
    pub fn edit_voxels(
        &mut self,
        center_x: i32,
        center_y: i32,
        mut stencil: VoxelStencil,
    ) -> EditOutcome {
        stencil.set_center(center_x, center_y);
        let b = stencil.bounds();
        let last = self.total_resolution() as i64 - 1;
        let x0 = i64::from(b.x_start).max(0);
        let x1 = i64::from(b.x_end).min(last);
        let y0 = i64::from(b.y_start).max(0);
        let y1 = i64::from(b.y_end).min(last);
        if x0 > x1 || y0 > y1 {
            log::debug!(
                target: "edit",
                "edit at ({}, {}) radius {} misses the map",
                center_x,
                center_y,
                stencil.radius()
            );
            return EditOutcome::default();
        }

        let vr = self.cfg.voxel_resolution as i64;
        let cr = self.cfg.chunk_resolution;
        let mut outcome = EditOutcome::default();
        let mut dirty = vec![false; self.chunks.len()];
        for cy in (y0 / vr)..=(y1 / vr) {
            for cx in (x0 / vr)..=(x1 / vr) {
                let i = cy as usize * cr + cx as usize;
                let ox = (cx * vr) as i32;
                let oy = (cy * vr) as i32;
                stencil.set_center(center_x.saturating_sub(ox), center_y.saturating_sub(oy));
                let Some(hit) = self.chunks[i].grid.apply(&stencil) else {
                    continue;
                };
                outcome.changed += hit.changed;
                outcome.touched.push(self.chunks[i].coord());
                dirty[i] = true;
                let left = hit.window.touches_left() && cx > 0;
                let bottom = hit.window.touches_bottom() && cy > 0;
                if left {
                    dirty[i - 1] = true;
                }
                if bottom {
                    dirty[i - cr] = true;
                }
                if left && bottom {
                    dirty[i - cr - 1] = true;
                }
            }
        }

        let dirty: Vec<usize> = (0..dirty.len()).filter(|&i| dirty[i]).collect();
        self.remesh(&dirty);
        outcome.remeshed = dirty.iter().map(|&i| self.chunks[i].coord()).collect();
        log::debug!(
            target: "edit",
            "{:?} edit at ({}, {}) radius {} fill {:?}: {} chunk(s) touched, {} voxel(s) changed, {} remeshed",
            stencil.shape(),
            center_x,
            center_y,
            stencil.radius(),
            stencil.fill(),
            outcome.touched.len(),
            outcome.changed,
            outcome.remeshed.len()
        );
        outcome
    }

    /// Writes a single global voxel.
    pub fn set_voxel(&mut self, gx: i32, gy: i32, state: bool) -> Result<EditOutcome, MapError> {
        if self.locate(gx, gy).is_none() {
            return Err(MapError::VoxelOutOfRange {
                x: gx,
                y: gy,
                total: self.total_resolution(),
            });
        }
        Ok(self.edit_voxels(gx, gy, VoxelStencil::square(Fill::from_state(state), 0)))
    }

    /// Rebuilds every chunk mesh.
    pub fn remesh_all(&mut self) {
        let all: Vec<usize> = (0..self.chunks.len()).collect();
        self.remesh(&all);
    }

    fn neighbor_grids(&self, i: usize) -> NeighborGrids<'_> {
        let n = self.chunks[i].neighbors;
        NeighborGrids::new(
            n.x.map(|j| &self.chunks[j].grid),
            n.y.map(|j| &self.chunks[j].grid),
            n.xy.map(|j| &self.chunks[j].grid),
        )
    }

    /// Triangulates `dirty` against the current voxel state, then commits.
    /// Building only reads chunks, so it runs in parallel.
    fn remesh(&mut self, dirty: &[usize]) {
        if dirty.is_empty() {
            return;
        }
        self.counter += 1;
        let rev = self.counter;
        let this = &*self;
        let built: Vec<(usize, MeshBuild)> = dirty
            .par_iter()
            .map(|&i| (i, build_chunk_mesh(&this.chunks[i].grid, this.neighbor_grids(i))))
            .collect();
        let mut verts = 0;
        let mut tris = 0;
        for (i, mesh) in built {
            verts += mesh.vertex_count();
            tris += mesh.triangle_count();
            let cpu = &mut self.chunks[i].cpu;
            cpu.mesh = mesh;
            cpu.rev = rev;
        }
        log::debug!(
            target: "mesh",
            "rev {}: remeshed {} chunk(s), {} verts, {} tris",
            rev,
            dirty.len(),
            verts,
            tris
        );
    }

    /// Chunk mesh moved into world space.
    pub fn world_mesh(&self, coord: ChunkCoord) -> Option<MeshBuild> {
        self.chunk(coord).map(|c| c.cpu.world_mesh())
    }

    /// Every chunk mesh merged in world space.
    pub fn merged_world_mesh(&self) -> MeshBuild {
        let mut out = MeshBuild::default();
        for c in &self.chunks {
            out.append(&c.cpu.world_mesh());
        }
        out
    }

    /// Area covered by all chunk meshes.
    pub fn total_area(&self) -> f32 {
        self.chunks.iter().map(|c| c.cpu.mesh.area()).sum()
    }

    #[inline]
    pub fn filled_count(&self) -> usize {
        self.chunks.iter().map(|c| c.grid.filled_count()).sum()
    }
}
