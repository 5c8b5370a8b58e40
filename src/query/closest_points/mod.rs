//! Closest points between a query segment and the supported shapes.

pub use self::closest_points_line_obb::{closest_points_line_obb_local, LineObbProjection};
pub use self::closest_points_segment_segment::{
    closest_points_segment_segment, closest_points_segment_segment_with_params,
};
#[doc(inline)]
pub use self::segment_query::{SegmentProjection, SegmentQuery};

mod closest_points_line_obb;
mod closest_points_segment_capsule;
mod closest_points_segment_obb;
mod closest_points_segment_segment;
mod closest_points_segment_sphere;
#[doc(hidden)]
pub mod segment_query;
