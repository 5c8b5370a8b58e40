//! Aliases for the mathematical types used throughout this crate.

/// The scalar type used throughout this crate.
pub use f32 as Real;

/// The default tolerance used for geometric operations.
pub const DEFAULT_EPSILON: Real = Real::EPSILON;

/// The dimension of the space.
pub const DIM: usize = 3;

/// The point type.
pub use na::Point3 as Point;

/// The vector type.
pub use na::Vector3 as Vector;

/// The unit vector type.
pub use na::UnitVector3 as UnitVector;

/// The transformation matrix type.
pub use na::Isometry3 as Isometry;

/// The translation type.
pub use na::Translation3 as Translation;

/// The rotation type.
pub type Rotation<N> = na::UnitQuaternion<N>;
