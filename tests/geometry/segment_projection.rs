use approx::assert_relative_eq;
use prox3d::math::{Point, Rotation, Vector};
use prox3d::na;
use prox3d::query::{PointQuery, SegmentQuery};
use prox3d::shape::{Capsule, Obb, Segment, Sphere};

fn unit_box() -> Obb {
    Obb::new(
        Point::origin(),
        Rotation::identity(),
        Vector::new(1.0, 1.0, 1.0),
    )
}

#[test]
fn segment_through_a_sphere_center_collapses() {
    // The segment passes exactly through the center: the segment point at
    // zero distance has no preferred direction and the surface point
    // collapses onto it.
    let sphere = Sphere::new(Point::origin(), 2.0);
    let seg = Segment::new(Point::new(-5.0, 0.0, 0.0), Point::new(5.0, 0.0, 0.0));
    let proj = sphere.project_segment(&seg);
    assert_relative_eq!(proj.on_segment, Point::origin());
    assert_relative_eq!(proj.on_shape, Point::origin());
}

#[test]
fn segment_crossing_a_sphere_off_center() {
    let sphere = Sphere::new(Point::origin(), 2.0);
    let seg = Segment::new(Point::new(-5.0, 1.0, 0.0), Point::new(5.0, 1.0, 0.0));
    let proj = sphere.project_segment(&seg);
    assert_relative_eq!(proj.on_segment, Point::new(0.0, 1.0, 0.0));
    assert_relative_eq!(proj.on_shape, Point::new(0.0, 2.0, 0.0));
}

#[test]
fn segment_crossing_a_box_lands_on_the_boundary() {
    let seg = Segment::new(Point::new(-5.0, 0.0, 0.0), Point::new(5.0, 0.0, 0.0));
    let proj = unit_box().project_segment(&seg);
    assert_relative_eq!(proj.on_segment, Point::new(1.0, 0.0, 0.0));
    assert_relative_eq!(proj.on_shape, Point::new(1.0, 0.0, 0.0));
    assert_relative_eq!(proj.distance(), 0.0);
}

#[test]
fn segment_missing_a_box_keeps_its_distance() {
    let seg = Segment::new(Point::new(-5.0, 3.0, 0.0), Point::new(5.0, 3.0, 0.0));
    let proj = unit_box().project_segment(&seg);
    assert_relative_eq!(proj.on_shape.y, 1.0);
    assert_relative_eq!(proj.distance(), 2.0);
}

#[test]
fn diagonal_segment_entering_a_rotated_box() {
    let obb = Obb::new(
        Point::new(1.0, 1.0, 0.0),
        Rotation::from_euler_angles(0.0, 0.0, std::f32::consts::FRAC_PI_4),
        Vector::new(1.0, 1.0, 1.0),
    );
    let seg = Segment::new(Point::new(1.0, 5.0, 0.0), Point::new(1.0, 1.0, 0.0));
    let proj = obb.project_segment(&seg);
    // The segment ends inside the box, so the two points may differ; the
    // shape point must lie on the boundary.
    let local = obb.to_local_point(&proj.on_shape);
    let boundary_gap = (0..3)
        .map(|i| (local[i].abs() - obb.half_extents[i]).abs())
        .fold(f32::MAX, f32::min);
    assert!(boundary_gap < 1.0e-4);
}

#[test]
fn segment_near_a_capsule() {
    let capsule = Capsule::new(Point::new(0.0, -1.0, 0.0), Point::new(0.0, 1.0, 0.0), 0.5);
    let seg = Segment::new(Point::new(-5.0, 0.0, 2.0), Point::new(5.0, 0.0, 2.0));
    let proj = capsule.project_segment(&seg);
    assert_relative_eq!(proj.on_segment, Point::new(0.0, 0.0, 2.0));
    assert_relative_eq!(proj.on_shape, Point::new(0.0, 0.0, 0.5));
}

#[test]
fn degenerate_segment_agrees_with_point_projection() {
    let shapes: [&dyn SegmentQuery; 3] = [
        &Sphere::new(Point::new(0.5, 0.0, 0.0), 2.0),
        &Capsule::new(Point::new(0.0, -1.0, 0.0), Point::new(0.0, 1.0, 0.0), 0.5),
        &Obb::new(
            Point::origin(),
            Rotation::from_euler_angles(0.2, 0.4, 0.6),
            Vector::new(1.0, 0.5, 2.0),
        ),
    ];
    let point_shapes: [&dyn PointQuery; 3] = [
        &Sphere::new(Point::new(0.5, 0.0, 0.0), 2.0),
        &Capsule::new(Point::new(0.0, -1.0, 0.0), Point::new(0.0, 1.0, 0.0), 0.5),
        &Obb::new(
            Point::origin(),
            Rotation::from_euler_angles(0.2, 0.4, 0.6),
            Vector::new(1.0, 0.5, 2.0),
        ),
    ];

    let pt = Point::new(4.0, 3.0, -2.0);
    let tiny = Segment::new(pt, pt + Vector::new(1.0e-8, 0.0, 0.0));

    for (shape, point_shape) in shapes.iter().zip(point_shapes.iter()) {
        let sproj = shape.project_segment(&tiny);
        let pproj = point_shape.project_point(&pt);
        assert_relative_eq!(sproj.on_shape, pproj.point, epsilon = 1.0e-4);
        assert_relative_eq!(sproj.on_segment, pt, epsilon = 1.0e-4);
    }
}

#[test]
fn crossing_segment_distance_is_zero_from_solver() {
    let obb = unit_box();
    let seg = Segment::new(Point::new(-3.0, 0.2, 0.3), Point::new(3.0, -0.4, 0.1));
    let dir = seg.direction().unwrap();
    let res = prox3d::query::closest_points_line_obb_local(
        &obb.to_local_point(&seg.center()),
        &obb.to_local_vector(dir.as_ref()),
        &obb.half_extents,
    );
    assert_relative_eq!(res.distance_squared, 0.0, epsilon = 1.0e-5);
    let exit = seg.center() + *dir * res.line_parameter;
    assert_relative_eq!(exit, res.local_point, epsilon = 1.0e-4);
    assert!(na::distance(&exit, &seg.center()) <= seg.half_length());
}
