//! Shapes supported by the closest-point queries.

pub use self::capsule::Capsule;
pub use self::obb::Obb;
pub use self::segment::{Segment, SegmentPointLocation};
pub use self::sphere::Sphere;

mod capsule;
mod obb;
mod segment;
mod sphere;
