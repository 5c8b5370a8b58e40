use crate::math::{Point, Real};
use crate::query::{SegmentProjection, SegmentQuery};
use crate::shape::Segment;
use crate::utils;
use na;

/// Tolerance under which two segment directions are considered parallel.
///
/// The 2-variable optimum divides by `|1 - a01^2|`; below this threshold
/// that solve is numerically unstable and the 1-dimensional overlap
/// fallback is used instead.
const PARALLEL_EPSILON: Real = 1.0e-4;

/// Closest points between two segments.
#[inline]
pub fn closest_points_segment_segment(
    seg1: &Segment,
    seg2: &Segment,
) -> (Point<Real>, Point<Real>) {
    let (s1, s2) = closest_points_segment_segment_with_params(seg1, seg2);
    let p1 = seg1.center() + utils::safe_normalize(seg1.scaled_direction()) * s1;
    let p2 = seg2.center() + utils::safe_normalize(seg2.scaled_direction()) * s2;
    (p1, p2)
}

/// Closest points between two segments, as signed offsets from each
/// segment's center along its unit direction.
///
/// The returned offsets always lie within plus or minus the half-length of
/// their segment, so no downstream clamping is needed. A degenerate segment
/// has a zero half-length and always gets the offset 0.
pub fn closest_points_segment_segment_with_params(
    seg1: &Segment,
    seg2: &Segment,
) -> (Real, Real) {
    let dir1 = utils::safe_normalize(seg1.scaled_direction());
    let dir2 = utils::safe_normalize(seg2.scaled_direction());
    let half1 = seg1.half_length();
    let half2 = seg2.half_length();

    let diff = seg1.center() - seg2.center();
    let a01 = -dir1.dot(&dir2);
    let b0 = diff.dot(&dir1);
    let b1 = -diff.dot(&dir2);
    let det = (1.0 - a01 * a01).abs();

    let mut s0;
    let mut s1;

    if det >= PARALLEL_EPSILON {
        // The segments are not parallel. Start from the unconstrained
        // optimum, then clamp region by region; the first segment is always
        // tested before the second one.
        s0 = a01 * b1 - b0;
        s1 = a01 * b0 - b1;
        let ext_det0 = half1 * det;
        let ext_det1 = half2 * det;

        if s0 >= -ext_det0 {
            if s0 <= ext_det0 {
                if s1 >= -ext_det1 {
                    if s1 <= ext_det1 {
                        // Interior optimum: both offsets are in range.
                        let inv_det = 1.0 / det;
                        s0 *= inv_det;
                        s1 *= inv_det;
                    } else {
                        s1 = half2;
                        s0 = na::clamp(-(a01 * s1 + b0), -half1, half1);
                    }
                } else {
                    s1 = -half2;
                    s0 = na::clamp(-(a01 * s1 + b0), -half1, half1);
                }
            } else if s1 >= -ext_det1 {
                if s1 <= ext_det1 {
                    s0 = half1;
                    s1 = na::clamp(-(a01 * s0 + b1), -half2, half2);
                } else {
                    s1 = half2;
                    s0 = -(a01 * s1 + b0);
                    if s0 > half1 {
                        s0 = half1;
                        s1 = na::clamp(-(a01 * s0 + b1), -half2, half2);
                    } else if s0 < -half1 {
                        s0 = -half1;
                        s1 = na::clamp(-(a01 * s0 + b1), -half2, half2);
                    }
                }
            } else {
                s1 = -half2;
                s0 = -(a01 * s1 + b0);
                if s0 > half1 {
                    s0 = half1;
                    s1 = na::clamp(-(a01 * s0 + b1), -half2, half2);
                } else if s0 < -half1 {
                    s0 = -half1;
                    s1 = na::clamp(-(a01 * s0 + b1), -half2, half2);
                }
            }
        } else if s1 >= -ext_det1 {
            if s1 <= ext_det1 {
                s0 = -half1;
                s1 = na::clamp(-(a01 * s0 + b1), -half2, half2);
            } else {
                s1 = half2;
                s0 = -(a01 * s1 + b0);
                if s0 > half1 {
                    s0 = half1;
                    s1 = na::clamp(-(a01 * s0 + b1), -half2, half2);
                } else if s0 < -half1 {
                    s0 = -half1;
                    s1 = na::clamp(-(a01 * s0 + b1), -half2, half2);
                }
            }
        } else {
            s1 = -half2;
            s0 = -(a01 * s1 + b0);
            if s0 > half1 {
                s0 = half1;
                s1 = na::clamp(-(a01 * s0 + b1), -half2, half2);
            } else if s0 < -half1 {
                s0 = -half1;
                s1 = na::clamp(-(a01 * s0 + b1), -half2, half2);
            }
        }
    } else {
        // The segments are parallel or anti-parallel: solve the
        // 1-dimensional overlap problem along the shared direction and
        // split the result between the two offsets.
        let e0pe1 = half1 + half2;
        let sign = if a01 > 0.0 { -1.0 } else { 1.0 };
        let b0_avr = 0.5 * (b0 - sign * b1);
        let lambda = na::clamp(-b0_avr, -e0pe1, e0pe1);

        s1 = if e0pe1 > 0.0 {
            -sign * lambda * half2 / e0pe1
        } else {
            0.0
        };
        s0 = lambda + sign * s1;
    }

    (s0, s1)
}

impl SegmentQuery for Segment {
    #[inline]
    fn project_segment(&self, seg: &Segment) -> SegmentProjection {
        let (on_segment, on_shape) = closest_points_segment_segment(seg, self);
        SegmentProjection::new(on_segment, on_shape)
    }
}
