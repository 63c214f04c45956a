use contour_chunk::VoxelGrid;

/// Read-only views of the chunks a grid stitches against: `x` to the right,
/// `y` above and `xy` diagonally up-right. Missing neighbors skip their strip.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeighborGrids<'a> {
    pub x: Option<&'a VoxelGrid>,
    pub y: Option<&'a VoxelGrid>,
    pub xy: Option<&'a VoxelGrid>,
}

impl<'a> NeighborGrids<'a> {
    #[inline]
    pub const fn none() -> Self {
        Self {
            x: None,
            y: None,
            xy: None,
        }
    }

    #[inline]
    pub const fn new(
        x: Option<&'a VoxelGrid>,
        y: Option<&'a VoxelGrid>,
        xy: Option<&'a VoxelGrid>,
    ) -> Self {
        Self { x, y, xy }
    }
}
