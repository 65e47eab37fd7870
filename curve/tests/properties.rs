//! Group-law properties over the classroom curve.

use curve::{binary_terms, Curve, Point};
use proptest::prelude::*;
use proptest::sample::select;

fn curve() -> Curve {
    Curve::demo()
}

prop_compose! {
    fn point()(p in select(Curve::demo().points())) -> Point {
        p
    }
}

prop_compose! {
    fn point_or_infinity()(p in point(), infinity in any::<bool>()) -> Point {
        if infinity { Point::INFINITY } else { p }
    }
}

proptest! {
    #[test]
    fn sum_plus_its_negation_is_infinity(p in point_or_infinity(), q in point_or_infinity()) {
        let c = curve();
        let r = c.point_add(&p, &q);
        prop_assert!(c.is_on_curve(&r));
        prop_assert_eq!(c.point_add(&r, &c.negate(&r)), Point::INFINITY);
    }

    #[test]
    fn infinity_is_the_identity(p in point_or_infinity()) {
        let c = curve();
        prop_assert_eq!(c.point_add(&p, &Point::INFINITY), p);
        prop_assert_eq!(c.point_add(&Point::INFINITY, &p), p);
        prop_assert_eq!(c.point_add(&p, &c.negate(&p)), Point::INFINITY);
    }

    #[test]
    fn negation_is_an_involution(p in point_or_infinity()) {
        let c = curve();
        prop_assert_eq!(c.negate(&c.negate(&p)), p);
    }

    #[test]
    fn addition_commutes(p in point(), q in point()) {
        let c = curve();
        prop_assert_eq!(c.point_add(&p, &q), c.point_add(&q, &p));
    }

    #[test]
    fn addition_associates(p in point(), q in point(), r in point()) {
        let c = curve();
        let left = c.point_add(&c.point_add(&p, &q), &r);
        let right = c.point_add(&p, &c.point_add(&q, &r));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn scalar_mult_is_linear(p in point(), a in 0u64..500, b in 0u64..500) {
        let c = curve();
        let left = c.point_mult(&p, a + b);
        let right = c.point_add(&c.point_mult(&p, a), &c.point_mult(&p, b));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn scalar_mult_matches_binary_terms(p in point(), n in 0u64..1 << 12) {
        let c = curve();
        let mut total = Point::INFINITY;
        for term in binary_terms(n) {
            total = c.point_add(&total, &c.point_mult(&p, term));
        }
        prop_assert_eq!(c.point_mult(&p, n), total);
    }

    #[test]
    fn scalar_mult_commutes(p in point(), a in 1u64..200, b in 1u64..200) {
        let c = curve();
        let ab = c.point_mult(&c.point_mult(&p, a), b);
        let ba = c.point_mult(&c.point_mult(&p, b), a);
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn y_values_are_exact(x in 0u64..97) {
        let c = curve();
        for y in c.y_values(x) {
            prop_assert!(c.is_on_curve(&Point::new(x, y)));
        }
    }
}

#[test]
fn test_mult_zero_and_one_for_every_point() {
    let c = curve();
    for p in c.points() {
        assert_eq!(c.point_mult(&p, 0), Point::INFINITY);
        assert_eq!(c.point_mult(&p, 1), p);
    }
}
