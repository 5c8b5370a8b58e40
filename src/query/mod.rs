//! Closest-point queries on the supported shapes.
//!
//! Point projection is achieved through the [`PointQuery`] trait and
//! segment projection through the [`SegmentQuery`] trait, both implemented
//! by every supported shape. The [`QueryDispatcher`] is the caller-facing
//! boundary resolving queries against a [`Primitive`] with layer
//! filtering; the projection routines themselves are total and never fail.

pub use self::closest_points::{
    closest_points_line_obb_local, closest_points_segment_segment,
    closest_points_segment_segment_with_params, LineObbProjection, SegmentProjection,
    SegmentQuery,
};
pub use self::dispatch::{Layers, Primitive, QueryDispatcher, QueryFilter};
pub use self::error::QueryError;
pub use self::point::{PointProjection, PointQuery};

pub mod closest_points;
mod dispatch;
mod error;
pub mod point;
