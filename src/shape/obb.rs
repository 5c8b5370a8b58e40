use crate::math::{Isometry, Point, Real, Rotation, Vector};

/// An oriented box given by its pose and its half-extents.
///
/// The box axes are the basis vectors of the pose's rotation. Each
/// half-extent is the box half-width along the corresponding local axis and
/// must be non-negative.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Obb {
    /// The position and orientation of the box.
    pub pose: Isometry<Real>,
    /// The half-extents of the box along each of its local axes.
    pub half_extents: Vector<Real>,
}

impl Obb {
    /// Creates a new oriented box from its center, its orientation, and its
    /// half-extents.
    #[inline]
    pub fn new(
        center: Point<Real>,
        rotation: Rotation<Real>,
        half_extents: Vector<Real>,
    ) -> Obb {
        Obb {
            pose: Isometry::from_parts(center.coords.into(), rotation),
            half_extents,
        }
    }

    /// Creates a new oriented box from a full pose.
    #[inline]
    pub fn from_pose(pose: Isometry<Real>, half_extents: Vector<Real>) -> Obb {
        Obb { pose, half_extents }
    }

    /// The center of the box.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        Point::from(self.pose.translation.vector)
    }

    /// Expresses a point given in world space in the local frame of the box.
    #[inline]
    pub fn to_local_point(&self, pt: &Point<Real>) -> Point<Real> {
        self.pose.inverse_transform_point(pt)
    }

    /// Expresses a vector given in world space in the local frame of the box.
    #[inline]
    pub fn to_local_vector(&self, v: &Vector<Real>) -> Vector<Real> {
        self.pose.inverse_transform_vector(v)
    }

    /// Expresses a point given in the local frame of the box in world space.
    #[inline]
    pub fn to_world_point(&self, pt: &Point<Real>) -> Point<Real> {
        self.pose * pt
    }
}
