use std::fmt::Write;

use contour_map::VoxelMap;

/// One line per chunk, row-major, followed by a totals line.
pub fn chunk_table(map: &VoxelMap) -> String {
    let mut out = String::new();
    let mut verts = 0;
    let mut tris = 0;
    for c in map.chunks() {
        let coord = c.coord();
        let mesh = c.mesh();
        verts += mesh.vertex_count();
        tris += mesh.triangle_count();
        let _ = writeln!(
            out,
            "chunk ({}, {}) rev {:>3}  filled {:>5}  verts {:>6}  tris {:>6}  area {:.5}",
            coord.cx,
            coord.cy,
            c.rev(),
            c.grid().filled_count(),
            mesh.vertex_count(),
            mesh.triangle_count(),
            mesh.area()
        );
    }
    let _ = writeln!(
        out,
        "total: {} chunk(s), filled {}, verts {}, tris {}, area {:.5}",
        map.chunks().len(),
        map.filled_count(),
        verts,
        tris,
        map.total_area()
    );
    out
}

/// Occupancy dump, top row first. Chunk borders are marked with a space
/// column and a blank line.
pub fn occupancy(map: &VoxelMap) -> String {
    let total = map.total_resolution() as i32;
    let vr = map.voxel_resolution() as i32;
    let mut out = String::new();
    for gy in (0..total).rev() {
        for gx in 0..total {
            if gx > 0 && gx % vr == 0 {
                out.push(' ');
            }
            out.push(if map.voxel_state(gx, gy) == Some(true) {
                '#'
            } else {
                '.'
            });
        }
        out.push('\n');
        if gy > 0 && gy % vr == 0 {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use contour_map::MapConfig;

    #[test]
    fn occupancy_marks_filled_voxels_and_chunk_borders() {
        let mut map = VoxelMap::new(MapConfig::new(2.0, 2, 2)).unwrap();
        map.set_voxel(0, 0, true).unwrap();
        map.set_voxel(2, 3, true).unwrap();
        assert_eq!(occupancy(&map), ".. #.\n.. ..\n\n.. ..\n#. ..\n");
    }

    #[test]
    fn chunk_table_lists_every_chunk() {
        let map = VoxelMap::new(MapConfig::new(2.0, 3, 2)).unwrap();
        let table = chunk_table(&map);
        assert_eq!(table.lines().count(), 10);
        assert!(table.starts_with("chunk (0, 0) rev   1"));
        assert!(table.ends_with("area 0.00000\n"));
    }
}
