use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::Segment;

/// A capsule shape defined as a round segment.
///
/// Every point within `radius` of the axis segment belongs to the capsule;
/// the radius must be non-negative. A capsule with a zero radius degenerates
/// to its axis segment.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Capsule {
    /// The axis endpoints of the capsule.
    pub segment: Segment,
    /// The radius of the capsule.
    pub radius: Real,
}

impl Capsule {
    /// Creates a new capsule defined as the segment between `a` and `b` and
    /// with the given `radius`.
    pub fn new(a: Point<Real>, b: Point<Real>, radius: Real) -> Self {
        let segment = Segment::new(a, b);
        Self { segment, radius }
    }

    /// Creates a new capsule aligned with the `y` axis, centered at the
    /// origin, and with the given half-height and radius.
    pub fn new_y(half_height: Real, radius: Real) -> Self {
        let b = Point::from(Vector::y() * half_height);
        Self::new(-b, b, radius)
    }

    /// The height of this capsule's axis segment.
    pub fn height(&self) -> Real {
        self.segment.length()
    }

    /// The half-height of this capsule's axis segment.
    pub fn half_height(&self) -> Real {
        self.height() / 2.0
    }

    /// The center of this capsule.
    pub fn center(&self) -> Point<Real> {
        self.segment.center()
    }

    /// Creates a new capsule equal to `self` with all its endpoints
    /// transformed by `pos`.
    pub fn transform_by(&self, pos: &Isometry<Real>) -> Self {
        Self::new(pos * self.segment.a, pos * self.segment.b, self.radius)
    }
}
