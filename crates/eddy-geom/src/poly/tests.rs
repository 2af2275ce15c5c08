use super::*;
use nalgebra::{vector, Vector2};
use proptest::prelude::*;

fn square() -> Vec<Vector2<f64>> {
    vec![
        vector![0.0, 0.0],
        vector![0.0, 10.0],
        vector![10.0, 10.0],
        vector![10.0, 0.0],
    ]
}

fn dist_to_segment(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let ab = b - a;
    let t = ((p - a).dot(&ab) / ab.norm_squared()).clamp(0.0, 1.0);
    (a + ab * t - p).norm()
}

fn star_ring(radii: &[f64]) -> Vec<Vector2<f64>> {
    let n = radii.len();
    radii
        .iter()
        .enumerate()
        .map(|(k, r)| {
            let th = std::f64::consts::TAU * k as f64 / n as f64;
            vector![r * th.cos(), r * th.sin()]
        })
        .collect()
}

#[test]
fn square_inside_and_outside() {
    let sq = square();
    assert_ne!(winding_number(vector![5.0, 5.0], &sq), 0);
    assert_eq!(winding_number(vector![15.0, 15.0], &sq), 0);
    assert!(contains(vector![0.5, 9.5], &sq));
    assert!(!contains(vector![-0.5, 5.0], &sq));
}

#[test]
fn orientation_sets_the_sign() {
    let mut sq = square();
    // (0,0) -> (0,10) -> (10,10) -> (10,0) is clockwise.
    assert_eq!(winding_number(vector![5.0, 5.0], &sq), -1);
    sq.reverse();
    assert_eq!(winding_number(vector![5.0, 5.0], &sq), 1);
}

#[test]
fn bottom_edge_counts_as_inside() {
    let ccw = vec![
        vector![0.0, 0.0],
        vector![10.0, 0.0],
        vector![10.0, 10.0],
        vector![0.0, 10.0],
    ];
    // on the left (upward) edge, p is not strictly left -> outside
    assert_eq!(winding_number(vector![0.0, 5.0], &ccw), 0);
    // on the right (upward) edge x=10, p is collinear -> not counted
    assert_eq!(winding_number(vector![10.0, 5.0], &ccw), 0);
    // bottom edge point is inside via the left/right crossing rule
    assert_ne!(winding_number(vector![5.0, 0.0], &ccw), 0);
    // top edge is excluded by the half-open rule
    assert_eq!(winding_number(vector![5.0, 10.0], &ccw), 0);
}

#[test]
fn is_left_is_strict() {
    let a = vector![0.0, 0.0];
    let b = vector![1.0, 0.0];
    assert!(is_left(a, b, vector![0.5, 1.0]));
    assert!(!is_left(a, b, vector![0.5, -1.0]));
    assert!(!is_left(a, b, vector![2.0, 0.0]));
}

#[test]
fn empty_ring_winds_zero() {
    assert_eq!(winding_number(vector![0.0, 0.0], &[]), 0);
    assert!(matches!(
        winding_number_xy(0.0, 0.0, &[], &[]),
        Err(crate::GeomError::TooFewPoints { .. })
    ));
}

#[test]
fn flat_form_matches_vector_form() {
    let sq = square();
    let xs: Vec<f64> = sq.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = sq.iter().map(|p| p.y).collect();
    for p in [vector![5.0, 5.0], vector![15.0, 1.0], vector![3.0, -2.0]] {
        assert_eq!(
            winding_number_xy(p.x, p.y, &xs, &ys).unwrap(),
            winding_number(p, &sq)
        );
    }
    assert!(matches!(
        winding_number_xy(1.0, 1.0, &xs, &ys[..3]),
        Err(crate::GeomError::LengthMismatch { .. })
    ));
}

#[test]
fn flat_form_rejects_non_finite() {
    let (xs, ys) = ([0.0, 1.0, 1.0], [0.0, 0.0, 1.0]);
    assert!(matches!(
        winding_number_xy(f64::NAN, 0.5, &xs, &ys),
        Err(crate::GeomError::NonFiniteTarget)
    ));
    assert!(matches!(
        winding_number_xy(0.5, f64::INFINITY, &xs, &ys),
        Err(crate::GeomError::NonFiniteTarget)
    ));
    assert!(matches!(
        winding_number_xy(0.5, 0.2, &xs, &[0.0, f64::NAN, 1.0]),
        Err(crate::GeomError::NonFinite { index: 1 })
    ));
}

#[test]
fn double_loop_winds_twice() {
    // Regular pentagon traversed twice.
    let mut ring = star_ring(&[1.0; 5]);
    ring.extend(ring.clone());
    assert_eq!(winding_number(vector![0.0, 0.0], &ring), 2);
}

#[test]
fn areas() {
    let sq = square();
    let xs: Vec<f64> = sq.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = sq.iter().map(|p| p.y).collect();
    assert!((signed_area(&xs, &ys) + 100.0).abs() < 1e-12);
    assert!((polygon_area(&xs, &ys) - 100.0).abs() < 1e-12);
    // explicit closing vertex does not change the area
    let mut xc = xs.clone();
    let mut yc = ys.clone();
    xc.push(xs[0]);
    yc.push(ys[0]);
    assert!((polygon_area(&xc, &yc) - 100.0).abs() < 1e-12);
    assert_eq!(polygon_area(&[0.0, 1.0], &[0.0, 1.0]), 0.0);
}

#[test]
fn nested_rings() {
    let outer = star_ring(&[2.0; 16]);
    let inner = star_ring(&[1.0; 16]);
    assert!(poly_contains_poly(&outer, &inner));
    assert!(!poly_contains_poly(&inner, &outer));
}

#[test]
fn bbox_pairs_match_brute_force() {
    let shift = |ring: &[Vector2<f64>], dx: f64, dy: f64| -> Vec<Vector2<f64>> {
        ring.iter().map(|p| p + vector![dx, dy]).collect()
    };
    let sq = square();
    let a = vec![sq.clone(), shift(&sq, 20.0, 0.0), Vec::new()];
    let b = vec![shift(&sq, 5.0, 5.0), shift(&sq, 10.0, 0.0), shift(&sq, 50.0, 50.0)];
    let pairs = bbox_intersection(&a, &b);
    // touching boxes (x = 10 and x = 20 edges) count as overlapping
    assert_eq!(pairs, vec![(0, 0), (0, 1), (1, 1)]);

    let bb = BBox::from_ring(&sq).unwrap();
    assert!(bb.contains_point(vector![10.0, 0.0]));
    assert!(BBox::from_ring(&[]).is_none());
}

proptest! {
    #[test]
    fn winding_invariant_under_rotation_and_reversal(
        radii in prop::collection::vec(0.5f64..2.0, 3..24),
        shift in 0usize..24,
        px in -2.5f64..2.5,
        py in -2.5f64..2.5,
    ) {
        let ring = star_ring(&radii);
        let p = vector![px, py];
        let n = ring.len();
        let min_edge = (0..n)
            .map(|k| dist_to_segment(p, ring[k], ring[(k + 1) % n]))
            .fold(f64::INFINITY, f64::min);
        prop_assume!(min_edge > 1e-9);

        let wn = winding_number(p, &ring);
        let mut rotated = ring.clone();
        rotated.rotate_left(shift % n);
        prop_assert_eq!(winding_number(p, &rotated), wn);

        let mut reversed = ring.clone();
        reversed.reverse();
        let wr = winding_number(p, &reversed);
        prop_assert_eq!(wr == 0, wn == 0);
        prop_assert_eq!(wr, -wn);
    }
}
