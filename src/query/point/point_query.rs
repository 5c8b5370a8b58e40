use crate::math::{Isometry, Point, Real};
use na;

/// Description of the projection of a point on a shape.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Copy, Clone, Debug)]
pub struct PointProjection {
    /// Whether or not the point to project was inside of the shape.
    pub is_inside: bool,
    /// The projection result.
    pub point: Point<Real>,
}

impl PointProjection {
    /// Initializes a new `PointProjection`.
    pub fn new(is_inside: bool, point: Point<Real>) -> Self {
        PointProjection { is_inside, point }
    }

    /// Transforms `self.point` by `pos`.
    pub fn transform_by(&self, pos: &Isometry<Real>) -> Self {
        PointProjection {
            is_inside: self.is_inside,
            point: pos * self.point,
        }
    }
}

/// Trait of shapes supporting the projection of points on their boundary.
pub trait PointQuery {
    /// Projects a point on the boundary of `self`.
    ///
    /// The result always lies on the boundary, even when `pt` is inside of
    /// `self`.
    fn project_point(&self, pt: &Point<Real>) -> PointProjection;

    /// Projects a point on the boundary of `self`, unless the projection
    /// lies further than the given max distance.
    fn project_point_with_max_dist(
        &self,
        pt: &Point<Real>,
        max_dist: Real,
    ) -> Option<PointProjection> {
        let proj = self.project_point(pt);
        if na::distance(&proj.point, pt) > max_dist {
            None
        } else {
            Some(proj)
        }
    }

    /// Computes the minimal distance between a point and the boundary of
    /// `self`.
    ///
    /// The result is negative when the point lies inside of `self`.
    fn distance_to_point(&self, pt: &Point<Real>) -> Real {
        let proj = self.project_point(pt);
        let dist = na::distance(pt, &proj.point);

        if proj.is_inside {
            -dist
        } else {
            dist
        }
    }

    /// Tests whether `pt` is inside of or on the boundary of `self`.
    fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.project_point(pt).is_inside
    }
}
