use contour_geom::{Vec2, triangle_signed_area};
use proptest::num::f32::NORMAL;
use proptest::prelude::*;
use proptest::strategy::Strategy;

fn approx_abs_rel(a: f32, b: f32, atol: f32, rtol: f32) -> bool {
    let diff = (a - b).abs();
    let scale = a.abs().max(b.abs());
    diff <= atol + rtol * scale
}

fn bounded_f32() -> impl Strategy<Value = f32> {
    NORMAL.prop_filter("bounded", |v| v.is_finite() && v.abs() <= 1e4)
}

fn arb_vec2() -> impl Strategy<Value = Vec2> {
    (bounded_f32(), bounded_f32()).prop_map(|(x, y)| Vec2::new(x, y))
}

proptest! {
    // a + b == b + a
    #[test]
    fn vec2_add_commutative(a in arb_vec2(), b in arb_vec2()) {
        prop_assert!((a + b).abs_diff_eq(b + a, 1e-5));
    }

    // a × b == -(b × a)
    #[test]
    fn vec2_cross_antisymmetric(a in arb_vec2(), b in arb_vec2()) {
        let scale = a.length() * b.length();
        prop_assert!(approx_abs_rel(a.cross(b), -b.cross(a), 1e-6, 1e-5) || scale < 1e-6);
    }

    // Swapping two vertices flips the sign of the area
    #[test]
    fn triangle_area_flips_with_winding(a in arb_vec2(), b in arb_vec2(), c in arb_vec2()) {
        let abc = triangle_signed_area(a, b, c);
        let acb = triangle_signed_area(a, c, b);
        let scale = (b - a).length() * (c - a).length();
        prop_assert!(approx_abs_rel(abc, -acb, 1e-3, 1e-4) || scale < 1e-6);
    }

    // Translating a triangle leaves its area unchanged
    #[test]
    fn triangle_area_translation_invariant(
        a in arb_vec2(),
        b in arb_vec2(),
        c in arb_vec2(),
        dx in -100.0f32..100.0,
        dy in -100.0f32..100.0,
    ) {
        let t = Vec2::new(dx, dy);
        let before = triangle_signed_area(a, b, c);
        let after = triangle_signed_area(a + t, b + t, c + t);
        let scale = (b - a).length() * (c - a).length() + 1.0;
        prop_assert!(approx_abs_rel(before, after, 1e-2 * scale, 1e-3));
    }
}
