use contour_edit::{Fill, StencilShape, VoxelStencil};
use proptest::prelude::*;

fn shape() -> impl Strategy<Value = StencilShape> {
    prop_oneof![Just(StencilShape::Square), Just(StencilShape::Circle)]
}

fn fill() -> impl Strategy<Value = Fill> {
    prop_oneof![Just(Fill::Empty), Just(Fill::Filled)]
}

proptest! {
    // Inside the circle the fill wins, outside the current state survives
    #[test]
    fn circle_respects_squared_radius(
        r in 0u32..16,
        cx in -64i32..64,
        cy in -64i32..64,
        dx in -20i32..=20,
        dy in -20i32..=20,
        state in any::<bool>(),
        f in fill(),
    ) {
        let s = VoxelStencil::circle(f, r).centered_at(cx, cy);
        let out = s.apply(cx + dx, cy + dy, state);
        let inside = (dx * dx + dy * dy) as i64 <= (r as i64) * (r as i64);
        if inside {
            prop_assert_eq!(out, f.is_filled());
        } else {
            prop_assert_eq!(out, state);
        }
    }

    // Applying twice gives the same answer as applying once
    #[test]
    fn apply_is_idempotent(
        sh in shape(),
        f in fill(),
        r in 0u32..8,
        x in -16i32..16,
        y in -16i32..16,
        state in any::<bool>(),
    ) {
        let s = VoxelStencil::new(sh, f, r).centered_at(0, 0);
        let once = s.apply(x, y, state);
        prop_assert_eq!(s.apply(x, y, once), once);
    }

    // Bounds always span 2r+1 voxels centered on the center
    #[test]
    fn bounds_are_symmetric(sh in shape(), r in 0u32..1000, cx in -1000i32..1000, cy in -1000i32..1000) {
        let s = VoxelStencil::new(sh, Fill::Filled, r).centered_at(cx, cy);
        let b = s.bounds();
        prop_assert_eq!(b.x_end - b.x_start, 2 * r as i32);
        prop_assert_eq!(b.y_end - b.y_start, 2 * r as i32);
        prop_assert_eq!(b.x_start + r as i32, cx);
        prop_assert_eq!(b.y_start + r as i32, cy);
    }
}
