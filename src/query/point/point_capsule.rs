use crate::math::{Point, Real};
use crate::query::{PointProjection, PointQuery};
use crate::shape::Capsule;
use crate::utils;

impl PointQuery for Capsule {
    #[inline]
    fn project_point(&self, pt: &Point<Real>) -> PointProjection {
        let proj = self.segment.project_point(pt);
        let dproj = pt - proj.point;
        let inside = dproj.norm_squared() <= self.radius * self.radius;

        // A query point on the axis has no preferred radial direction; the
        // projection collapses to the axis point.
        let dir = utils::safe_normalize(dproj);
        PointProjection::new(inside, proj.point + dir * self.radius)
    }

    #[inline]
    fn distance_to_point(&self, pt: &Point<Real>) -> Real {
        let proj = self.segment.project_point(pt);
        (pt - proj.point).norm() - self.radius
    }

    #[inline]
    fn contains_point(&self, pt: &Point<Real>) -> bool {
        let proj = self.segment.project_point(pt);
        (pt - proj.point).norm_squared() <= self.radius * self.radius
    }
}
