use crate::math::{Basis, Real};
use crate::shape::Axis;

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// A capsule with the same radius at both ends.
///
/// The spine is centered at the origin: the two hemispherical caps are
/// centered at `±height / 2` along `axis`.
pub struct Capsule {
    /// The distance between the centers of the two caps.
    pub height: Real,
    /// The radius of the caps and of the cylindrical waist.
    pub radius: Real,
    /// The spine axis.
    pub axis: Axis,
}

impl Default for Capsule {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HEIGHT, Self::DEFAULT_RADIUS, Axis::Z)
    }
}

impl Capsule {
    /// The height used when none is authored.
    pub const DEFAULT_HEIGHT: Real = 1.0;
    /// The radius used when none is authored.
    pub const DEFAULT_RADIUS: Real = 0.5;

    /// Creates a new capsule with the given height, radius and spine axis.
    pub fn new(height: Real, radius: Real, axis: Axis) -> Self {
        Self {
            height,
            radius,
            axis,
        }
    }

    /// Creates a new capsule aligned with the `x` axis.
    pub fn new_x(height: Real, radius: Real) -> Self {
        Self::new(height, radius, Axis::X)
    }

    /// Creates a new capsule aligned with the `y` axis.
    pub fn new_y(height: Real, radius: Real) -> Self {
        Self::new(height, radius, Axis::Y)
    }

    /// Creates a new capsule aligned with the `z` axis.
    pub fn new_z(height: Real, radius: Real) -> Self {
        Self::new(height, radius, Axis::Z)
    }

    /// The half-height of this capsule.
    pub fn half_height(&self) -> Real {
        self.height / 2.0
    }

    /// The length of this capsule from one pole to the other.
    pub fn extent(&self) -> Real {
        self.height + self.radius * 2.0
    }

    /// The transform mapping the canonical `Z` spine onto this capsule's axis.
    pub fn basis(&self) -> Basis<Real> {
        self.axis.basis()
    }
}
