/*!
prox3d
======

**prox3d** is a 3-dimensional closest-point library written with the rust
programming language. Given a query point or a finite segment and one of the
supported primitives (oriented box, sphere, capsule, segment), it computes
the point on the primitive's boundary closest to the query.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)]

#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod math;
pub mod query;
pub mod shape;
pub mod utils;
