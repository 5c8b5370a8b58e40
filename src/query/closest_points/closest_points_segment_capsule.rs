use crate::query::closest_points::closest_points_segment_segment;
use crate::query::{SegmentProjection, SegmentQuery};
use crate::shape::{Capsule, Segment};
use crate::utils;

impl SegmentQuery for Capsule {
    #[inline]
    fn project_segment(&self, seg: &Segment) -> SegmentProjection {
        let (on_segment, on_axis) = closest_points_segment_segment(seg, &self.segment);

        // A segment crossing the axis has no preferred radial direction;
        // the surface point collapses to the axis point.
        let dir = utils::safe_normalize(on_segment - on_axis);
        SegmentProjection::new(on_segment, on_axis + dir * self.radius)
    }
}
