use crate::math::{Basis, Real};
use crate::shape::{Axis, Capsule};
use crate::transformation::{tangent_latitude, TangentLatitude};

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// A capsule whose caps may have different radii, joined by a conical waist.
///
/// The caps are centered at `±height / 2` along `axis`. Their spherical
/// surfaces stop at the latitude where a plane tangent to both spheres
/// touches them, so the cone meets each cap without a crease.
pub struct TaperedCapsule {
    /// The distance between the centers of the two caps.
    pub height: Real,
    /// The radius of the cap at `+height / 2`.
    pub radius_top: Real,
    /// The radius of the cap at `-height / 2`.
    pub radius_bottom: Real,
    /// The spine axis.
    pub axis: Axis,
}

impl Default for TaperedCapsule {
    fn default() -> Self {
        Self::new(
            Capsule::DEFAULT_HEIGHT,
            Capsule::DEFAULT_RADIUS,
            Capsule::DEFAULT_RADIUS,
            Axis::Z,
        )
    }
}

impl From<Capsule> for TaperedCapsule {
    fn from(capsule: Capsule) -> Self {
        Self::new(capsule.height, capsule.radius, capsule.radius, capsule.axis)
    }
}

impl TaperedCapsule {
    /// Creates a new tapered capsule with the given height, radii and spine axis.
    pub fn new(height: Real, radius_top: Real, radius_bottom: Real, axis: Axis) -> Self {
        Self {
            height,
            radius_top,
            radius_bottom,
            axis,
        }
    }

    /// Creates a new tapered capsule aligned with the `x` axis.
    pub fn new_x(height: Real, radius_top: Real, radius_bottom: Real) -> Self {
        Self::new(height, radius_top, radius_bottom, Axis::X)
    }

    /// Creates a new tapered capsule aligned with the `y` axis.
    pub fn new_y(height: Real, radius_top: Real, radius_bottom: Real) -> Self {
        Self::new(height, radius_top, radius_bottom, Axis::Y)
    }

    /// Creates a new tapered capsule aligned with the `z` axis.
    pub fn new_z(height: Real, radius_top: Real, radius_bottom: Real) -> Self {
        Self::new(height, radius_top, radius_bottom, Axis::Z)
    }

    /// The half-height of this capsule.
    pub fn half_height(&self) -> Real {
        self.height / 2.0
    }

    /// Is this capsule actually a uniform capsule?
    pub fn is_uniform(&self) -> bool {
        self.radius_top == self.radius_bottom
    }

    /// The latitude at which the caps meet the conical waist.
    ///
    /// See [`tangent_latitude`] for the details of the solve.
    pub fn tangent_latitude(&self) -> TangentLatitude {
        tangent_latitude(self.radius_bottom, self.radius_top, self.height)
    }

    /// The transform mapping the canonical `Z` spine onto this capsule's axis.
    pub fn basis(&self) -> Basis<Real> {
        self.axis.basis()
    }
}
