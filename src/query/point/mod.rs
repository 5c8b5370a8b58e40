//! Point projection on the supported shapes.

#[doc(inline)]
pub use self::point_query::{PointProjection, PointQuery};

mod point_capsule;
mod point_obb;
#[doc(hidden)]
pub mod point_query;
mod point_segment;
mod point_sphere;
