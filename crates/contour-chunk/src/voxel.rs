use contour_geom::Vec2;

/// One grid node: occupancy plus the two boundary crossing points shared with
/// the +x and +y neighbors. Crossings sit at the midpoints between nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Voxel {
    pub x: i32,
    pub y: i32,
    pub state: bool,
    pub position: Vec2,
    pub x_edge: Vec2,
    pub y_edge: Vec2,
}

impl Voxel {
    /// Builds the voxel at grid coordinates `(x, y)` of a grid whose cells are
    /// `size` wide. Positions are local to the owning grid.
    pub fn new(x: i32, y: i32, size: f32) -> Self {
        let position = Vec2::new((x as f32 + 0.5) * size, (y as f32 + 0.5) * size);
        Self {
            x,
            y,
            state: false,
            position,
            x_edge: Vec2::new(position.x + size * 0.5, position.y),
            y_edge: Vec2::new(position.x, position.y + size * 0.5),
        }
    }

    #[inline]
    fn shifted(source: &Voxel, offset: Vec2) -> Voxel {
        Voxel {
            x: source.x,
            y: source.y,
            state: source.state,
            position: source.position + offset,
            x_edge: source.x_edge + offset,
            y_edge: source.y_edge + offset,
        }
    }

    /// `source` (a voxel of the +x neighbor grid) seen from this grid's frame.
    #[inline]
    pub fn x_dummy_of(source: &Voxel, grid_size: f32) -> Voxel {
        Self::shifted(source, Vec2::new(grid_size, 0.0))
    }

    /// `source` (a voxel of the +y neighbor grid) seen from this grid's frame.
    #[inline]
    pub fn y_dummy_of(source: &Voxel, grid_size: f32) -> Voxel {
        Self::shifted(source, Vec2::new(0.0, grid_size))
    }

    /// `source` (a voxel of the diagonal +x+y neighbor) seen from this grid's frame.
    #[inline]
    pub fn xy_dummy_of(source: &Voxel, grid_size: f32) -> Voxel {
        Self::shifted(source, Vec2::splat(grid_size))
    }
}
