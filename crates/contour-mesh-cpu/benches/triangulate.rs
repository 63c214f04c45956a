use criterion::{Criterion, black_box, criterion_group, criterion_main};

use contour_chunk::VoxelGrid;
use contour_edit::{Fill, VoxelStencil};
use contour_mesh_cpu::{MeshBuild, NeighborGrids, build_chunk_mesh_into};

/// Deterministic blob pattern: a handful of overlapping circles.
fn blobs(res: usize) -> VoxelGrid {
    let mut g = VoxelGrid::new(res, 1.0);
    let r = res as i32;
    for (i, k) in [3, 5, 7, 11, 13].into_iter().enumerate() {
        let s = VoxelStencil::circle(Fill::Filled, (res / 8) as u32 + i as u32)
            .centered_at((k * 7919) % r, (k * 104729) % r);
        g.apply(&s);
    }
    g
}

fn bench_triangulate_isolated(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulate_isolated");
    for res in [16usize, 64, 128] {
        let g = blobs(res);
        let mut mb = MeshBuild::default();
        group.bench_function(format!("blobs_{res}"), |b| {
            b.iter(|| {
                build_chunk_mesh_into(&g, NeighborGrids::none(), &mut mb);
                black_box(mb.triangle_count());
            })
        });
    }
    group.finish();
}

fn bench_triangulate_stitched(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulate_stitched");
    let g = blobs(64);
    let n = blobs(64);
    let mut mb = MeshBuild::default();
    group.bench_function("blobs_64_all_neighbors", |b| {
        b.iter(|| {
            build_chunk_mesh_into(&g, NeighborGrids::new(Some(&n), Some(&n), Some(&n)), &mut mb);
            black_box(mb.triangle_count());
        })
    });
    group.finish();
}

criterion_group!(benches, bench_triangulate_isolated, bench_triangulate_stitched);
criterion_main!(benches);
