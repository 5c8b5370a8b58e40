use crate::math::{Point, Real};
use crate::query::{
    PointProjection, PointQuery, QueryError, SegmentProjection, SegmentQuery,
};
use crate::shape::{Capsule, Obb, Segment, Sphere};
use bitflags::bitflags;
use log::trace;

bitflags! {
    /// Collision layers a primitive may belong to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Layers: u32 {
        /// Static world geometry.
        const STATIC = 1 << 0;
        /// Dynamic obstacles.
        const DYNAMIC = 1 << 1;
        /// Character controllers.
        const CHARACTER = 1 << 2;
    }
}

/// Filter deciding which primitives a dispatcher answers queries for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryFilter {
    /// Layers a primitive must intersect to be considered.
    pub allowed: Layers,
}

impl Default for QueryFilter {
    fn default() -> Self {
        QueryFilter {
            allowed: Layers::all(),
        }
    }
}

/// One of the four primitives supported by the closest-point queries.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Primitive {
    /// An oriented box.
    Obb(Obb),
    /// A sphere.
    Sphere(Sphere),
    /// A capsule, i.e., a segment with a radius.
    Capsule(Capsule),
    /// A bare segment.
    Segment(Segment),
}

impl PointQuery for Primitive {
    #[inline]
    fn project_point(&self, pt: &Point<Real>) -> PointProjection {
        match self {
            Primitive::Obb(obb) => obb.project_point(pt),
            Primitive::Sphere(sphere) => sphere.project_point(pt),
            Primitive::Capsule(capsule) => capsule.project_point(pt),
            Primitive::Segment(segment) => segment.project_point(pt),
        }
    }
}

impl SegmentQuery for Primitive {
    #[inline]
    fn project_segment(&self, seg: &Segment) -> SegmentProjection {
        match self {
            Primitive::Obb(obb) => obb.project_segment(seg),
            Primitive::Sphere(sphere) => sphere.project_segment(seg),
            Primitive::Capsule(capsule) => capsule.project_segment(seg),
            Primitive::Segment(segment) => segment.project_segment(seg),
        }
    }
}

/// Entry point resolving closest-point queries against filtered primitives.
///
/// The set of allowed layers is fixed at construction time; the layers of
/// each queried primitive are supplied by the caller with the query.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryDispatcher {
    filter: QueryFilter,
}

impl QueryDispatcher {
    /// Creates a dispatcher answering queries for primitives on the layers
    /// allowed by `filter`.
    pub fn new(filter: QueryFilter) -> Self {
        QueryDispatcher { filter }
    }

    /// Projects `pt` on the boundary of `primitive`.
    pub fn closest_point(
        &self,
        pt: &Point<Real>,
        primitive: &Primitive,
        layers: Layers,
    ) -> Result<PointProjection, QueryError> {
        self.check(layers)?;
        Ok(primitive.project_point(pt))
    }

    /// Computes the closest points between `seg` and the boundary of
    /// `primitive`.
    pub fn closest_point_to_segment(
        &self,
        seg: &Segment,
        primitive: &Primitive,
        layers: Layers,
    ) -> Result<SegmentProjection, QueryError> {
        self.check(layers)?;
        Ok(primitive.project_segment(seg))
    }

    fn check(&self, layers: Layers) -> Result<(), QueryError> {
        if self.filter.allowed.intersects(layers) {
            Ok(())
        } else {
            trace!("closest-point query rejected by the layer filter: {:?}", layers);
            Err(QueryError::Filtered)
        }
    }
}
