use super::*;
use crate::fixtures;
use crate::point::{side_of_line, Side};
use crate::sample::{draw_cloud, CloudCfg, CloudShape, PointCount, ReplayToken};
use nalgebra::vector;
use proptest::prelude::*;

const EPS: f64 = 1e-5;

/// `a` and `b` list the same cyclic vertex sequence.
fn same_cycle(a: &[Point], b: &[Point]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    let n = a.len();
    (0..n).any(|k| (0..n).all(|i| a[(i + k) % n] == b[i]))
}

fn assert_convex_and_containing(hull: &[Point], points: &[Point], eps: f64) {
    let n = hull.len();
    for i in 0..n {
        let (a, b) = (hull[i], hull[(i + 1) % n]);
        for v in hull {
            assert_ne!(side_of_line(a, b, *v, eps), Side::Right, "not convex at edge {i}");
        }
        for p in points {
            assert_ne!(side_of_line(a, b, *p, eps), Side::Right, "{p:?} outside edge {i}");
        }
    }
}

#[test]
fn pixel_fixture_hull() {
    let hull = convex_hull(&fixtures::pixel_points(), EPS).unwrap();
    assert_eq!(hull, fixtures::to_points(&fixtures::PIXEL_HULL));
}

#[test]
fn fewer_than_three_points_unchanged() {
    let empty: Vec<Point> = Vec::new();
    assert_eq!(convex_hull(&empty, EPS).unwrap(), empty);
    let two = vec![vector![3.0, 1.0], vector![-1.0, 2.0]];
    assert_eq!(convex_hull(&two, EPS).unwrap(), two);
    assert_eq!(MonotoneChain.build(&two, EPS).unwrap(), two);
}

#[test]
fn edge_midpoints_and_interior_points_are_skipped() {
    let pts = vec![
        vector![1.0, 0.0],
        vector![0.0, 0.0],
        vector![2.0, 2.0],
        vector![2.0, 1.0],
        vector![1.0, 1.0],
        vector![0.0, 2.0],
        vector![2.0, 0.0],
        vector![0.0, 1.0],
        vector![1.0, 2.0],
        vector![0.0, 0.0],
    ];
    let hull = convex_hull(&pts, EPS).unwrap();
    assert_eq!(
        hull,
        vec![
            vector![2.0, 0.0],
            vector![2.0, 2.0],
            vector![0.0, 2.0],
            vector![0.0, 0.0],
        ]
    );
    assert!(same_cycle(&hull, &MonotoneChain.build(&pts, EPS).unwrap()));
}

#[test]
fn collinear_input_terminates_as_segment() {
    let line: Vec<Point> = (0..12).map(|i| vector![i as f64, 0.5 * i as f64]).collect();
    let hull = convex_hull(&line, EPS).unwrap();
    assert_eq!(hull, vec![vector![11.0, 5.5], vector![0.0, 0.0]]);

    let cfg = CloudCfg {
        count: PointCount::Fixed(50),
        shape: CloudShape::Segment,
        scale: 10.0,
        center: vector![1.0, 2.0],
    };
    let seg = draw_cloud(cfg, ReplayToken { seed: 3, index: 0 });
    assert!(convex_hull(&seg, EPS).unwrap().len() <= 2);
}

#[test]
fn non_finite_input_cannot_spin_the_walk() {
    let pts = vec![
        vector![f64::NAN, f64::NAN],
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![0.0, 1.0],
    ];
    let err = convex_hull(&pts, EPS).unwrap_err();
    assert_eq!(err, GeomError::UnclosedHull { points: 4 });
    let msg = err.to_string();
    assert!(msg.contains("side tolerance") && !msg.contains("collinear"), "{msg}");
    assert_eq!(MonotoneChain.build(&pts, EPS), Err(GeomError::NonFinite));
}

#[test]
fn tolerance_must_match_coordinate_scale() {
    // A 1e-3 square: signed areas are ~1e-6, below the default tolerance.
    let tiny = vec![
        vector![0.0, 0.0],
        vector![1e-3, 0.0],
        vector![1e-3, 1e-3],
        vector![0.0, 1e-3],
        vector![5e-4, 5e-4],
    ];
    assert!(convex_hull(&tiny, HullCfg::default().eps_side).unwrap().len() < 3);
    assert_eq!(convex_hull(&tiny, 1e-12).unwrap().len(), 4);
}

#[test]
fn strategies_agree_on_seeded_clouds() {
    let shapes = [
        CloudShape::Disc,
        CloudShape::Ellipse {
            aspect: 5.0,
            angle: 1.1,
        },
        CloudShape::Grid {
            side: 7,
            jitter: 0.0,
        },
        CloudShape::Grid {
            side: 6,
            jitter: 0.3,
        },
    ];
    let mut tok = ReplayToken { seed: 2024, index: 0 };
    for shape in shapes {
        for _ in 0..8 {
            let cfg = CloudCfg {
                count: PointCount::Uniform { min: 3, max: 80 },
                shape,
                ..CloudCfg::default()
            };
            let pts = draw_cloud(cfg, tok);
            tok = tok.next();
            let a = GiftWrap.build(&pts, EPS).unwrap();
            let b = MonotoneChain.build(&pts, EPS).unwrap();
            assert!(same_cycle(&a, &b), "{shape:?}: {a:?} vs {b:?}");
            assert_convex_and_containing(&a, &pts, EPS);
        }
    }
}

fn lattice_cloud() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-50i32..50, -50i32..50), 3..40).prop_map(|v| {
        v.into_iter()
            .map(|(x, y)| vector![x as f64, y as f64])
            .collect()
    })
}

proptest! {
    #[test]
    fn hull_is_convex_and_contains_input(pts in lattice_cloud()) {
        let hull = convex_hull(&pts, EPS).unwrap();
        prop_assume!(hull.len() >= 3);
        assert_convex_and_containing(&hull, &pts, EPS);
        for p in &hull {
            prop_assert!(pts.contains(p));
        }
    }

    #[test]
    fn hull_is_idempotent(pts in lattice_cloud()) {
        let hull = convex_hull(&pts, EPS).unwrap();
        prop_assume!(hull.len() >= 3);
        prop_assert_eq!(convex_hull(&hull, EPS).unwrap(), hull);
    }

    #[test]
    fn hull_commutes_with_scale_and_translation(
        pts in lattice_cloud(),
        scale in prop::sample::select(vec![0.25, 0.5, 1.5, 2.0, 3.0, 10.0]),
        tx in -1000i32..1000,
        ty in -1000i32..1000,
    ) {
        let t = vector![tx as f64, ty as f64];
        let moved: Vec<Point> = pts.iter().map(|p| p * scale + t).collect();
        let lhs = convex_hull(&moved, EPS).unwrap();
        let rhs: Vec<Point> = convex_hull(&pts, EPS)
            .unwrap()
            .into_iter()
            .map(|p| p * scale + t)
            .collect();
        prop_assert_eq!(lhs.len(), rhs.len());
        for (a, b) in lhs.iter().zip(&rhs) {
            prop_assert!(crate::point::almost_eq(*a, *b, 1e-9));
        }
    }

    #[test]
    fn monotone_chain_matches_gift_wrap(pts in lattice_cloud()) {
        let a = GiftWrap.build(&pts, EPS).unwrap();
        let b = MonotoneChain.build(&pts, EPS).unwrap();
        prop_assert!(same_cycle(&a, &b));
    }
}
