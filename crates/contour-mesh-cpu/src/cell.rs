use contour_chunk::Voxel;

use crate::mesh_build::MeshBuild;

/// Corner bits of a cell: `a` bottom-left, `b` bottom-right, `c` top-left, `d` top-right.
pub const CORNER_A: u8 = 1;
pub const CORNER_B: u8 = 2;
pub const CORNER_C: u8 = 4;
pub const CORNER_D: u8 = 8;

/// 4-bit marching-squares classification of a cell's corner occupancy.
#[inline]
pub fn cell_type(a: &Voxel, b: &Voxel, c: &Voxel, d: &Voxel) -> u8 {
    let mut t = 0;
    if a.state {
        t |= CORNER_A;
    }
    if b.state {
        t |= CORNER_B;
    }
    if c.state {
        t |= CORNER_C;
    }
    if d.state {
        t |= CORNER_D;
    }
    t
}

/// Emits the filled part of one cell. Every polygon winds clockwise.
///
/// Crossings use the fixed midpoints stored on the voxels: `a.x_edge` (bottom),
/// `a.y_edge` (left), `b.y_edge` (right), `c.x_edge` (top). The saddle cases
/// 6 and 9 emit two separate corner triangles and never join the diagonal.
pub fn triangulate_cell(mb: &mut MeshBuild, a: &Voxel, b: &Voxel, c: &Voxel, d: &Voxel) {
    match cell_type(a, b, c, d) {
        0 => {}
        1 => mb.add_triangle(a.position, a.y_edge, a.x_edge),
        2 => mb.add_triangle(b.position, a.x_edge, b.y_edge),
        3 => mb.add_quad(a.position, a.y_edge, b.y_edge, b.position),
        4 => mb.add_triangle(c.position, c.x_edge, a.y_edge),
        5 => mb.add_quad(a.position, c.position, c.x_edge, a.x_edge),
        6 => {
            mb.add_triangle(b.position, a.x_edge, b.y_edge);
            mb.add_triangle(c.position, c.x_edge, a.y_edge);
        }
        7 => mb.add_pentagon(a.position, c.position, c.x_edge, b.y_edge, b.position),
        8 => mb.add_triangle(d.position, b.y_edge, c.x_edge),
        9 => {
            mb.add_triangle(a.position, a.y_edge, a.x_edge);
            mb.add_triangle(d.position, b.y_edge, c.x_edge);
        }
        10 => mb.add_quad(a.x_edge, c.x_edge, d.position, b.position),
        11 => mb.add_pentagon(b.position, a.position, a.y_edge, c.x_edge, d.position),
        12 => mb.add_quad(a.y_edge, c.position, d.position, b.y_edge),
        13 => mb.add_pentagon(c.position, d.position, b.y_edge, a.x_edge, a.position),
        14 => mb.add_pentagon(d.position, b.position, a.x_edge, a.y_edge, c.position),
        15 => mb.add_quad(a.position, c.position, d.position, b.position),
        _ => unreachable!("cell type is a 4-bit value"),
    }
}
