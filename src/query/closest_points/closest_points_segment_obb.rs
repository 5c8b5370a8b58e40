use crate::query::closest_points::closest_points_line_obb_local;
use crate::query::{PointQuery, SegmentProjection, SegmentQuery};
use crate::shape::{Obb, Segment};
use na;

impl SegmentQuery for Obb {
    fn project_segment(&self, seg: &Segment) -> SegmentProjection {
        let dir = match seg.direction() {
            Some(dir) => dir,
            None => {
                // Degenerate segment: plain point projection.
                let proj = self.project_point(&seg.a);
                return SegmentProjection::new(seg.a, proj.point);
            }
        };

        let center = seg.center();
        let local_center = self.to_local_point(&center);
        let local_dir = self.to_local_vector(dir.as_ref());
        let res = closest_points_line_obb_local(&local_center, &local_dir, &self.half_extents);

        let half = seg.half_length();
        let t = na::clamp(res.line_parameter, -half, half);
        let on_segment = center + *dir * t;
        let on_shape = self.project_point(&on_segment).point;
        SegmentProjection::new(on_segment, on_shape)
    }
}
