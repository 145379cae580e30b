use crate::math::{Basis, Real};
use crate::shape::{Axis, Capsule, TaperedCapsule};

/// One of the capsule variants this crate knows how to mesh.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum CapsuleShape {
    /// A capsule with a single radius.
    Uniform(Capsule),
    /// A capsule with distinct top and bottom radii.
    Tapered(TaperedCapsule),
}

impl CapsuleShape {
    /// The spine axis of this capsule.
    pub fn axis(&self) -> Axis {
        match self {
            CapsuleShape::Uniform(s) => s.axis,
            CapsuleShape::Tapered(s) => s.axis,
        }
    }

    /// The distance between the centers of the two caps.
    pub fn height(&self) -> Real {
        match self {
            CapsuleShape::Uniform(s) => s.height,
            CapsuleShape::Tapered(s) => s.height,
        }
    }

    /// The radii of the bottom and top caps, in that order.
    pub fn radii(&self) -> (Real, Real) {
        match self {
            CapsuleShape::Uniform(s) => (s.radius, s.radius),
            CapsuleShape::Tapered(s) => (s.radius_bottom, s.radius_top),
        }
    }

    /// The transform mapping the canonical `Z` spine onto this capsule's axis.
    pub fn basis(&self) -> Basis<Real> {
        self.axis().basis()
    }

    /// Converts this shape into the tapered representation.
    pub fn to_tapered(&self) -> TaperedCapsule {
        match self {
            CapsuleShape::Uniform(s) => (*s).into(),
            CapsuleShape::Tapered(s) => *s,
        }
    }
}

impl From<Capsule> for CapsuleShape {
    fn from(capsule: Capsule) -> Self {
        CapsuleShape::Uniform(capsule)
    }
}

impl From<TaperedCapsule> for CapsuleShape {
    fn from(capsule: TaperedCapsule) -> Self {
        CapsuleShape::Tapered(capsule)
    }
}
