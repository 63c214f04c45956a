use contour_map::{Fill, MapConfig, StencilShape, VoxelMap, VoxelStencil};
use proptest::prelude::*;

#[derive(Clone, Copy, Debug)]
struct Op {
    x: i32,
    y: i32,
    radius: u32,
    circle: bool,
    filled: bool,
}

fn op() -> impl Strategy<Value = Op> {
    (-3i32..15, -3i32..15, 0u32..4, any::<bool>(), any::<bool>()).prop_map(
        |(x, y, radius, circle, filled)| Op {
            x,
            y,
            radius,
            circle,
            filled,
        },
    )
}

fn stencil(o: Op) -> VoxelStencil {
    let shape = if o.circle {
        StencilShape::Circle
    } else {
        StencilShape::Square
    };
    VoxelStencil::new(shape, Fill::from(o.filled), o.radius)
}

/// Flat reference model of a `total x total` map.
fn apply_flat(states: &mut [bool], total: i32, o: Op) {
    let s = stencil(o).centered_at(o.x, o.y);
    for y in 0..total {
        for x in 0..total {
            let inside = x >= s.x_start() && x <= s.x_end() && y >= s.y_start() && y <= s.y_end();
            if inside {
                let i = (y * total + x) as usize;
                states[i] = s.apply(x, y, states[i]);
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // Routed edits agree voxel-for-voxel with painting one flat grid
    #[test]
    fn routed_edits_match_flat_model(ops in proptest::collection::vec(op(), 1..8)) {
        let mut m = VoxelMap::new(MapConfig::new(3.0, 3, 4)).unwrap();
        let total = m.total_resolution() as i32;
        let mut flat = vec![false; (total * total) as usize];
        for o in ops {
            m.edit_voxels(o.x, o.y, stencil(o));
            apply_flat(&mut flat, total, o);
        }
        for y in 0..total {
            for x in 0..total {
                prop_assert_eq!(m.voxel_state(x, y), Some(flat[(y * total + x) as usize]));
            }
        }
    }

    // Splitting the same map into chunks never changes the covered area
    #[test]
    fn chunking_preserves_area(ops in proptest::collection::vec(op(), 1..8)) {
        let mut whole = VoxelMap::new(MapConfig::new(3.0, 1, 12)).unwrap();
        let mut split = VoxelMap::new(MapConfig::new(3.0, 3, 4)).unwrap();
        for o in ops {
            let a = whole.edit_voxels(o.x, o.y, stencil(o));
            let b = split.edit_voxels(o.x, o.y, stencil(o));
            prop_assert_eq!(a.changed, b.changed);
        }
        prop_assert!((whole.total_area() - split.total_area()).abs() < 1e-4);
    }
}
