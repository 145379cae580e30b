//! Implicit capsule shapes.

pub use self::axis::{Axis, InvalidAxis};
pub use self::capsule::Capsule;
pub use self::capsule_shape::CapsuleShape;
pub use self::tapered_capsule::TaperedCapsule;

mod axis;
mod capsule;
mod capsule_shape;
mod tapered_capsule;
