use crate::math::{Real, Vector, DEFAULT_EPSILON};
use na::Unit;

/// Normalizes `v`, returning the zero vector instead of `NaN` when the norm
/// of `v` is smaller than the default tolerance.
///
/// The zero vector stands for "no preferred direction": every projection in
/// this crate built from it collapses to the point the direction was
/// computed from. This is the fixed convention for all zero-distance
/// tie-breaks (e.g. projecting a sphere's own center on the sphere returns
/// the center).
#[inline]
pub fn safe_normalize(v: Vector<Real>) -> Vector<Real> {
    Unit::try_new(v, DEFAULT_EPSILON)
        .map(|dir| dir.into_inner())
        .unwrap_or_else(Vector::zeros)
}
