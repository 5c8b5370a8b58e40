use crate::math::{Point, Real};
use crate::query::{PointProjection, PointQuery};
use crate::shape::{Segment, SegmentPointLocation};

impl Segment {
    /// Projects a point on this segment and also returns the location of the
    /// projection on the segment.
    pub fn project_point_with_location(
        &self,
        pt: &Point<Real>,
    ) -> (PointProjection, SegmentPointLocation) {
        let ab = self.b - self.a;
        let ap = pt - self.a;
        let ab_ap = ab.dot(&ap);
        let sqnab = ab.norm_squared();

        let proj;
        let location;

        if ab_ap <= 0.0 {
            // Voronoï region of vertex 'a'.
            location = SegmentPointLocation::OnVertex(0);
            proj = self.a;
        } else if ab_ap >= sqnab {
            // Voronoï region of vertex 'b'.
            location = SegmentPointLocation::OnVertex(1);
            proj = self.b;
        } else {
            // Voronoï region of the segment interior.
            let u = ab_ap / sqnab;
            location = SegmentPointLocation::OnEdge([1.0 - u, u]);
            proj = self.a + ab * u;
        }

        let inside = relative_eq!(proj, *pt);
        (PointProjection::new(inside, proj), location)
    }
}

impl PointQuery for Segment {
    #[inline]
    fn project_point(&self, pt: &Point<Real>) -> PointProjection {
        self.project_point_with_location(pt).0
    }
}
