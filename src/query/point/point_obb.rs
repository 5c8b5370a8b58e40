use crate::math::{Point, Real, DIM};
use crate::query::{PointProjection, PointQuery};
use crate::shape::Obb;
use num_traits::Bounded;

impl PointQuery for Obb {
    fn project_point(&self, pt: &Point<Real>) -> PointProjection {
        let local = self.to_local_point(pt);
        let he = self.half_extents;

        let mut clamped = local;
        let mut outside = false;

        for i in 0..DIM {
            if local[i] < -he[i] {
                clamped[i] = -he[i];
                outside = true;
            } else if local[i] > he[i] {
                clamped[i] = he[i];
                outside = true;
            }
        }

        if outside {
            return PointProjection::new(false, self.to_world_point(&clamped));
        }

        // The point is inside: push it to the face with the smallest slack.
        let mut best = <Real as Bounded>::max_value();
        let mut best_axis = 0;

        for i in 0..DIM {
            let slack = he[i] - local[i].abs();
            if slack < best {
                best = slack;
                best_axis = i;
            }
        }

        let mut on_face = local;
        on_face[best_axis] = he[best_axis].copysign(local[best_axis]);

        PointProjection::new(true, self.to_world_point(&on_face))
    }

    #[inline]
    fn contains_point(&self, pt: &Point<Real>) -> bool {
        let local = self.to_local_point(pt);
        (0..DIM).all(|i| local[i].abs() <= self.half_extents[i])
    }
}
