use crate::math::{Point, Real};
use crate::query::{PointProjection, PointQuery};
use crate::shape::Sphere;
use crate::utils;

impl PointQuery for Sphere {
    #[inline]
    fn project_point(&self, pt: &Point<Real>) -> PointProjection {
        let dpt = pt - self.center;
        let distance_squared = dpt.norm_squared();
        let inside = distance_squared <= self.radius * self.radius;

        // A query point at the center has no preferred direction; the
        // projection collapses to the center itself.
        let dir = utils::safe_normalize(dpt);
        PointProjection::new(inside, self.center + dir * self.radius)
    }

    #[inline]
    fn distance_to_point(&self, pt: &Point<Real>) -> Real {
        (pt - self.center).norm() - self.radius
    }

    #[inline]
    fn contains_point(&self, pt: &Point<Real>) -> bool {
        (pt - self.center).norm_squared() <= self.radius * self.radius
    }
}
