//! Feeding capsule primitives to a renderer.
//!
//! A [`CapsuleAdapter`] reads the shape attributes of a primitive from an
//! [`AttributeSource`], hands out the shared mesh topology and the points, and
//! reports which [`DirtyBits`] an attribute change sets.

pub use self::attributes::{tokens, AttributeMap, AttributeSource, AttributeValue, TimeCode};
pub use self::capsule_adapter::{CapsuleAdapter, CapsuleSchema};
pub use self::dirty_bits::DirtyBits;
pub use self::error::AttributeError;

mod attributes;
mod capsule_adapter;
mod dirty_bits;
mod error;
