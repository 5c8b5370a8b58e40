use approx::assert_relative_eq;
use prox3d::math::Point;
use prox3d::na;
use prox3d::query::{
    closest_points_segment_segment, closest_points_segment_segment_with_params,
};
use prox3d::shape::Segment;
use rand::{Rng, SeedableRng};

#[test]
fn perpendicular_segments_offset_along_z() {
    let a = Segment::new(Point::new(-1.0, 0.0, 0.0), Point::new(1.0, 0.0, 0.0));
    let b = Segment::new(Point::new(0.0, -1.0, 5.0), Point::new(0.0, 1.0, 5.0));
    let (p1, p2) = closest_points_segment_segment(&a, &b);
    assert_relative_eq!(p1, Point::new(0.0, 0.0, 0.0));
    assert_relative_eq!(p2, Point::new(0.0, 0.0, 5.0));
    assert_relative_eq!(na::distance(&p1, &p2), 5.0);
}

#[test]
fn the_solver_is_symmetric() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(2024);

    for _ in 0..100 {
        let mut random_point = || {
            Point::new(
                rng.gen_range(-3.0..3.0),
                rng.gen_range(-3.0..3.0),
                rng.gen_range(-3.0..3.0),
            )
        };
        let a = Segment::new(random_point(), random_point());
        let b = Segment::new(random_point(), random_point());

        let (p1, p2) = closest_points_segment_segment(&a, &b);
        let (q2, q1) = closest_points_segment_segment(&b, &a);

        // The realized distance must agree; the points themselves may
        // differ when the minimum is not unique.
        assert_relative_eq!(
            na::distance(&p1, &p2),
            na::distance(&q1, &q2),
            epsilon = 1.0e-3
        );
    }
}

#[test]
fn parameters_never_leave_the_segments() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(5);

    for _ in 0..200 {
        let mut random_point = || {
            Point::new(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
            )
        };
        let a = Segment::new(random_point(), random_point());
        let b = Segment::new(random_point(), random_point());

        let (s0, s1) = closest_points_segment_segment_with_params(&a, &b);
        assert!(s0.abs() <= a.half_length() + 1.0e-3);
        assert!(s1.abs() <= b.half_length() + 1.0e-3);
    }
}

#[test]
fn the_realized_distance_is_minimal_over_a_parameter_grid() {
    let a = Segment::new(Point::new(-2.0, 1.0, 0.0), Point::new(2.0, -1.0, 1.0));
    let b = Segment::new(Point::new(0.0, 3.0, -1.0), Point::new(1.0, 4.0, 2.0));
    let (p1, p2) = closest_points_segment_segment(&a, &b);
    let best = na::distance(&p1, &p2);

    let n = 100;
    for i in 0..=n {
        for j in 0..=n {
            let u = i as f32 / n as f32;
            let v = j as f32 / n as f32;
            let qa = a.a + a.scaled_direction() * u;
            let qb = b.a + b.scaled_direction() * v;
            assert!(na::distance(&qa, &qb) >= best - 1.0e-3);
        }
    }
}

#[test]
fn two_degenerate_segments_reduce_to_point_distance() {
    let a = Segment::new(Point::new(1.0, 0.0, 0.0), Point::new(1.0, 0.0, 0.0));
    let b = Segment::new(Point::new(4.0, 4.0, 0.0), Point::new(4.0, 4.0, 0.0));
    let (p1, p2) = closest_points_segment_segment(&a, &b);
    assert_relative_eq!(p1, a.a);
    assert_relative_eq!(p2, b.a);
    assert_relative_eq!(na::distance(&p1, &p2), 5.0);
}
