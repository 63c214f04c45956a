//! Edit stencils: shape predicates that decide the new occupancy of covered voxels.
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// Target occupancy painted by a stencil.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fill {
    #[default]
    Empty,
    Filled,
}

impl Fill {
    #[inline]
    pub const fn is_filled(self) -> bool {
        matches!(self, Fill::Filled)
    }

    #[inline]
    pub const fn from_state(state: bool) -> Fill {
        if state { Fill::Filled } else { Fill::Empty }
    }
}

impl From<bool> for Fill {
    #[inline]
    fn from(state: bool) -> Self {
        Fill::from_state(state)
    }
}

impl From<Fill> for bool {
    #[inline]
    fn from(fill: Fill) -> Self {
        fill.is_filled()
    }
}

/// Footprint shape of a stencil. Every shape shares the square bounding box
/// `[center - radius, center + radius]` on both axes and only narrows which
/// voxels inside that box get painted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StencilShape {
    #[default]
    Square,
    Circle,
}

impl StencilShape {
    /// Whether the offset `(dx, dy)` from the center is painted, assuming it
    /// already lies inside the bounding box.
    #[inline]
    pub fn covers(self, dx: i64, dy: i64, sqr_radius: i64) -> bool {
        match self {
            StencilShape::Square => true,
            StencilShape::Circle => {
                dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy)) <= sqr_radius
            }
        }
    }
}

/// Inclusive voxel-coordinate box covered by a stencil before clamping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StencilBounds {
    pub x_start: i32,
    pub x_end: i32,
    pub y_start: i32,
    pub y_end: i32,
}

/// A shaped brush centered on a voxel. The center is expressed in the local
/// coordinates of whichever grid the stencil is about to be applied to, so
/// callers editing several chunks re-center it once per chunk.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoxelStencil {
    shape: StencilShape,
    fill: Fill,
    radius: u32,
    sqr_radius: i64,
    center_x: i32,
    center_y: i32,
}

impl VoxelStencil {
    pub fn new(shape: StencilShape, fill: Fill, radius: u32) -> Self {
        let mut stencil = Self {
            shape,
            fill,
            radius: 0,
            sqr_radius: 0,
            center_x: 0,
            center_y: 0,
        };
        stencil.initialize(fill, radius);
        stencil
    }

    #[inline]
    pub fn square(fill: Fill, radius: u32) -> Self {
        Self::new(StencilShape::Square, fill, radius)
    }

    #[inline]
    pub fn circle(fill: Fill, radius: u32) -> Self {
        Self::new(StencilShape::Circle, fill, radius)
    }

    /// Resets the paint value and radius, keeping shape and center.
    pub fn initialize(&mut self, fill: Fill, radius: u32) {
        self.fill = fill;
        self.radius = radius;
        self.sqr_radius = i64::from(radius).saturating_mul(i64::from(radius));
    }

    #[inline]
    pub fn set_center(&mut self, x: i32, y: i32) {
        self.center_x = x;
        self.center_y = y;
    }

    #[inline]
    pub fn centered_at(mut self, x: i32, y: i32) -> Self {
        self.set_center(x, y);
        self
    }

    #[inline]
    pub fn center(&self) -> (i32, i32) {
        (self.center_x, self.center_y)
    }

    #[inline]
    pub fn shape(&self) -> StencilShape {
        self.shape
    }

    #[inline]
    pub fn fill(&self) -> Fill {
        self.fill
    }

    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    #[inline]
    fn radius_i32(&self) -> i32 {
        i32::try_from(self.radius).unwrap_or(i32::MAX)
    }

    #[inline]
    pub fn x_start(&self) -> i32 {
        self.center_x.saturating_sub(self.radius_i32())
    }

    #[inline]
    pub fn x_end(&self) -> i32 {
        self.center_x.saturating_add(self.radius_i32())
    }

    #[inline]
    pub fn y_start(&self) -> i32 {
        self.center_y.saturating_sub(self.radius_i32())
    }

    #[inline]
    pub fn y_end(&self) -> i32 {
        self.center_y.saturating_add(self.radius_i32())
    }

    #[inline]
    pub fn bounds(&self) -> StencilBounds {
        StencilBounds {
            x_start: self.x_start(),
            x_end: self.x_end(),
            y_start: self.y_start(),
            y_end: self.y_end(),
        }
    }

    /// New state for voxel `(x, y)` currently holding `voxel`.
    /// Pure: the result depends only on the arguments and the stencil fields.
    #[inline]
    pub fn apply(&self, x: i32, y: i32, voxel: bool) -> bool {
        let dx = i64::from(x) - i64::from(self.center_x);
        let dy = i64::from(y) - i64::from(self.center_y);
        if self.shape.covers(dx, dy, self.sqr_radius) {
            self.fill.is_filled()
        } else {
            voxel
        }
    }
}
