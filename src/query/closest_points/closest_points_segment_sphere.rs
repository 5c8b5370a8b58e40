use crate::query::{PointQuery, SegmentProjection, SegmentQuery};
use crate::shape::{Segment, Sphere};

impl SegmentQuery for Sphere {
    #[inline]
    fn project_segment(&self, seg: &Segment) -> SegmentProjection {
        // The segment point closest to the center is also the segment point
        // closest to the sphere surface, whether or not the segment crosses
        // the sphere.
        let on_segment = seg.project_point(&self.center).point;
        let on_shape = self.project_point(&on_segment).point;
        SegmentProjection::new(on_segment, on_shape)
    }
}
