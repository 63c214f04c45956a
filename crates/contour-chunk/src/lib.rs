//! Chunk voxel storage and stencil application.
#![forbid(unsafe_code)]

mod voxel;

pub use voxel::Voxel;

use contour_edit::{StencilBounds, VoxelStencil};

/// Chunk position inside a map, in chunk units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkCoord {
    pub cx: i32,
    pub cy: i32,
}

impl ChunkCoord {
    #[inline]
    pub const fn new(cx: i32, cy: i32) -> Self {
        Self { cx, cy }
    }
}

/// Inclusive window of local voxel coordinates, already clamped to a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VoxelWindow {
    pub x0: usize,
    pub x1: usize,
    pub y0: usize,
    pub y1: usize,
}

impl VoxelWindow {
    /// True if the window reaches column 0, which the -x neighbor reads when stitching.
    #[inline]
    pub fn touches_left(&self) -> bool {
        self.x0 == 0
    }

    /// True if the window reaches row 0, which the -y neighbor reads when stitching.
    #[inline]
    pub fn touches_bottom(&self) -> bool {
        self.y0 == 0
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }
}

/// Result of running a stencil over a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StencilHit {
    pub window: VoxelWindow,
    /// Voxels whose state flipped.
    pub changed: usize,
}

/// A square chunk of `resolution * resolution` voxels stored row-major.
#[derive(Clone, Debug)]
pub struct VoxelGrid {
    resolution: usize,
    size: f32,
    voxel_size: f32,
    voxels: Vec<Voxel>,
}

impl VoxelGrid {
    /// Allocates an all-empty grid covering `size` world units per side.
    ///
    /// # Panics
    /// If `resolution` is zero or `size` is not a positive finite number.
    pub fn new(resolution: usize, size: f32) -> Self {
        assert!(resolution > 0, "voxel grid resolution must be positive");
        assert!(
            size.is_finite() && size > 0.0,
            "voxel grid size must be positive and finite, got {size}"
        );
        let voxel_size = size / resolution as f32;
        let mut voxels = Vec::with_capacity(resolution * resolution);
        for y in 0..resolution {
            for x in 0..resolution {
                voxels.push(Voxel::new(x as i32, y as i32, voxel_size));
            }
        }
        Self {
            resolution,
            size,
            voxel_size,
            voxels,
        }
    }

    /// Builds a grid from row-major occupancy. Missing trailing states read as
    /// empty and extra states are ignored.
    pub fn from_states(resolution: usize, size: f32, states: &[bool]) -> Self {
        let mut grid = Self::new(resolution, size);
        for (v, &s) in grid.voxels.iter_mut().zip(states) {
            v.state = s;
        }
        grid
    }

    #[inline]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Side length in world units.
    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[inline]
    pub fn voxel_size(&self) -> f32 {
        self.voxel_size
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.resolution + x
    }

    #[inline]
    pub fn voxels(&self) -> &[Voxel] {
        &self.voxels
    }

    #[inline]
    pub fn voxel(&self, x: usize, y: usize) -> &Voxel {
        &self.voxels[self.idx(x, y)]
    }

    #[inline]
    pub fn state(&self, x: usize, y: usize) -> bool {
        self.voxel(x, y).state
    }

    /// Occupancy at signed local coordinates, `None` outside the grid.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<bool> {
        let r = self.resolution as i32;
        if x < 0 || y < 0 || x >= r || y >= r {
            return None;
        }
        Some(self.state(x as usize, y as usize))
    }

    /// Writes one voxel and returns whether its state changed.
    #[inline]
    pub fn set_voxel(&mut self, x: usize, y: usize, state: bool) -> bool {
        let i = self.idx(x, y);
        let v = &mut self.voxels[i];
        let changed = v.state != state;
        v.state = state;
        changed
    }

    pub fn fill_all(&mut self, state: bool) {
        for v in &mut self.voxels {
            v.state = state;
        }
    }

    #[inline]
    pub fn filled_count(&self) -> usize {
        self.voxels.iter().filter(|v| v.state).count()
    }

    /// Row-major occupancy snapshot.
    pub fn states(&self) -> Vec<bool> {
        self.voxels.iter().map(|v| v.state).collect()
    }

    /// Clamps a stencil box to `[0, resolution - 1]` on both axes.
    pub fn clamp_window(&self, b: StencilBounds) -> Option<VoxelWindow> {
        let last = self.resolution as i64 - 1;
        let x0 = i64::from(b.x_start).max(0);
        let x1 = i64::from(b.x_end).min(last);
        let y0 = i64::from(b.y_start).max(0);
        let y1 = i64::from(b.y_end).min(last);
        if x0 > x1 || y0 > y1 {
            return None;
        }
        Some(VoxelWindow {
            x0: x0 as usize,
            x1: x1 as usize,
            y0: y0 as usize,
            y1: y1 as usize,
        })
    }

    /// Runs `stencil` (centered in this grid's local coordinates) over its
    /// clamped footprint. A footprint entirely off the grid is a no-op.
    pub fn apply(&mut self, stencil: &VoxelStencil) -> Option<StencilHit> {
        let window = self.clamp_window(stencil.bounds())?;
        let mut changed = 0;
        for y in window.y0..=window.y1 {
            let mut i = self.idx(window.x0, y);
            for x in window.x0..=window.x1 {
                let v = &mut self.voxels[i];
                let next = stencil.apply(x as i32, y as i32, v.state);
                if next != v.state {
                    v.state = next;
                    changed += 1;
                }
                i += 1;
            }
        }
        Some(StencilHit { window, changed })
    }
}
