use contour_chunk::{Voxel, VoxelGrid};

use crate::cell::triangulate_cell;
use crate::mesh_build::MeshBuild;
use crate::neighbors::NeighborGrids;

/// Rebuilds `mb` from scratch for `grid`.
///
/// Interior cells come from adjacent voxel pairs. With an `x` neighbor each
/// row gets one extra gap cell whose right corners are the neighbor's left
/// column shifted into this frame; with a `y` neighbor the top gets a gap row
/// built from the neighbor's bottom row; with `x`, `y` and `xy` all present
/// the top-right corner cell is closed as well. Neighbors are only read.
///
/// # Panics
/// If a neighbor's resolution differs from `grid`'s. Neighbors must also share
/// its size for the seams to line up.
pub fn build_chunk_mesh_into(grid: &VoxelGrid, nb: NeighborGrids<'_>, mb: &mut MeshBuild) {
    mb.clear_keep_capacity();
    let res = grid.resolution();
    let size = grid.size();
    let cells = res - 1;
    let v = grid.voxels();
    for n in [nb.x, nb.y, nb.xy].into_iter().flatten() {
        assert_eq!(n.resolution(), res, "neighbor resolution mismatch");
    }
    mb.reserve_cells(res * res);

    for y in 0..cells {
        let row = y * res;
        for x in 0..cells {
            let i = row + x;
            triangulate_cell(mb, &v[i], &v[i + 1], &v[i + res], &v[i + 1 + res]);
        }
        if let Some(xn) = nb.x {
            let i = row + cells;
            let b = Voxel::x_dummy_of(xn.voxel(0, y), size);
            let d = Voxel::x_dummy_of(xn.voxel(0, y + 1), size);
            triangulate_cell(mb, &v[i], &b, &v[i + res], &d);
        }
    }

    if let Some(yn) = nb.y {
        let offset = cells * res;
        for x in 0..cells {
            let c = Voxel::y_dummy_of(yn.voxel(x, 0), size);
            let d = Voxel::y_dummy_of(yn.voxel(x + 1, 0), size);
            triangulate_cell(mb, &v[offset + x], &v[offset + x + 1], &c, &d);
        }
        if let (Some(xn), Some(xyn)) = (nb.x, nb.xy) {
            let b = Voxel::x_dummy_of(xn.voxel(0, cells), size);
            let c = Voxel::y_dummy_of(yn.voxel(cells, 0), size);
            let d = Voxel::xy_dummy_of(xyn.voxel(0, 0), size);
            triangulate_cell(mb, &v[offset + cells], &b, &c, &d);
        }
    }

    log::trace!(
        target: "mesh",
        "triangulated {}x{} grid: {} verts, {} tris",
        res,
        res,
        mb.vertex_count(),
        mb.triangle_count()
    );
}

/// Allocating variant of [`build_chunk_mesh_into`].
pub fn build_chunk_mesh(grid: &VoxelGrid, nb: NeighborGrids<'_>) -> MeshBuild {
    let mut mb = MeshBuild::default();
    build_chunk_mesh_into(grid, nb, &mut mb);
    mb
}
