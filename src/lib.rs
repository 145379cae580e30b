/*!
capsule3d
========

**capsule3d** generates renderable meshes for implicit capsule primitives:
a fixed, shareable topology plus the point positions of uniform and tapered
capsules, and the small imaging layer that reads capsule attributes and
reports which parts of a mesh go stale when they change.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)] // The tapered generator mirrors the full cap parametrization.
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![warn(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
extern crate approx;

pub extern crate nalgebra as na;

pub mod imaging;
pub mod shape;
pub mod topology;
pub mod transformation;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Matrix3, Matrix4, Point3, Rotation3, Vector2, Vector3};

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The rotation matrix type.
    pub type Rotation<N> = Rotation3<N>;

    /// The homogeneous transform type used for spine bases.
    pub type Basis<N> = Matrix4<N>;
}
