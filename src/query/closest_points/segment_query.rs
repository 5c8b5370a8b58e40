use crate::math::{Point, Real};
use crate::shape::Segment;
use na;

/// Description of the closest points between a query segment and a shape.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Copy, Clone, Debug)]
pub struct SegmentProjection {
    /// The closest point on the query segment.
    pub on_segment: Point<Real>,
    /// The closest point on the shape boundary.
    pub on_shape: Point<Real>,
}

impl SegmentProjection {
    /// Initializes a new `SegmentProjection`.
    pub fn new(on_segment: Point<Real>, on_shape: Point<Real>) -> Self {
        SegmentProjection {
            on_segment,
            on_shape,
        }
    }

    /// The distance between the two closest points.
    pub fn distance(&self) -> Real {
        na::distance(&self.on_segment, &self.on_shape)
    }

    /// The squared distance between the two closest points.
    pub fn distance_squared(&self) -> Real {
        na::distance_squared(&self.on_segment, &self.on_shape)
    }
}

/// Trait of shapes supporting closest-point queries against a finite
/// segment.
pub trait SegmentQuery {
    /// Computes the point on the boundary of `self` closest to `seg`,
    /// together with the point of `seg` realizing that distance.
    ///
    /// The result is correct even when `seg` crosses or lies inside of
    /// `self`; in that case the segment point is interior to `self` and the
    /// shape point still lies on the boundary.
    fn project_segment(&self, seg: &Segment) -> SegmentProjection;
}
