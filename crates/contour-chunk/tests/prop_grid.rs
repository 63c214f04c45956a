use contour_chunk::VoxelGrid;
use contour_edit::{Fill, StencilShape, VoxelStencil};
use proptest::prelude::*;

fn res() -> impl Strategy<Value = usize> {
    1usize..=12
}

fn shape() -> impl Strategy<Value = StencilShape> {
    prop_oneof![Just(StencilShape::Square), Just(StencilShape::Circle)]
}

proptest! {
    // idx maps each (x,y) within bounds to a unique in-range index
    #[test]
    fn idx_is_unique_and_in_range(r in res()) {
        let g = VoxelGrid::new(r, 1.0);
        let mut seen = vec![false; r * r];
        for y in 0..r { for x in 0..r {
            let i = g.idx(x, y);
            prop_assert!(i < r * r);
            prop_assert!(!seen[i]);
            seen[i] = true;
            let v = g.voxel(x, y);
            prop_assert_eq!((v.x, v.y), (x as i32, y as i32));
        }}
        prop_assert!(seen.into_iter().all(|b| b));
    }

    // A stencil only ever changes voxels it covers, wherever it is centered
    #[test]
    fn stencil_only_touches_covered_voxels(
        r in res(),
        sh in shape(),
        radius in 0u32..6,
        cx in -8i32..20,
        cy in -8i32..20,
        seed in proptest::collection::vec(any::<bool>(), 144),
    ) {
        let mut g = VoxelGrid::from_states(r, 1.0, &seed);
        let before = g.states();
        let s = VoxelStencil::new(sh, Fill::Filled, radius).centered_at(cx, cy);
        let hit = g.apply(&s);
        for y in 0..r { for x in 0..r {
            let dx = x as i64 - cx as i64;
            let dy = y as i64 - cy as i64;
            let in_box = dx.abs() <= radius as i64 && dy.abs() <= radius as i64;
            let covered = in_box && sh.covers(dx, dy, (radius as i64) * (radius as i64));
            let now = g.state(x, y);
            if covered {
                prop_assert!(now);
            } else {
                prop_assert_eq!(now, before[g.idx(x, y)]);
            }
            if let Some(h) = hit {
                if !h.window.contains(x, y) {
                    prop_assert_eq!(now, before[g.idx(x, y)]);
                }
            }
        }}
        let flipped = before.iter().zip(g.states()).filter(|(a, b)| **a != *b).count();
        prop_assert_eq!(hit.map_or(0, |h| h.changed), flipped);
    }
}
