use crate::math::{Basis, Matrix3, Real, Rotation, Vector};
use core::fmt;
use core::str::FromStr;

/// The spine axis of an implicit capsule.
///
/// Meshes are always generated with their spine along `Z`; [`Axis::basis`]
/// maps that canonical frame onto the declared axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Axis {
    /// The spine is aligned with the `x` axis.
    X,
    /// The spine is aligned with the `y` axis.
    Y,
    /// The spine is aligned with the `z` axis.
    #[default]
    Z,
}

/// Error returned when parsing an axis token other than `"X"`, `"Y"` or `"Z"`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid axis token `{0}`, expected one of `X`, `Y` or `Z`")]
pub struct InvalidAxis(pub String);

impl Axis {
    /// The token naming this axis.
    pub fn token(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }

    /// Parses `token`, falling back to [`Axis::Z`] if it isn't a valid axis token.
    pub fn from_token_or_default(token: &str) -> Self {
        token.parse().unwrap_or_else(|err: InvalidAxis| {
            log::warn!("{err}; falling back to the Z axis");
            Axis::Z
        })
    }

    /// The unit vector along this axis.
    pub fn spine(self) -> Vector<Real> {
        match self {
            Axis::X => Vector::x(),
            Axis::Y => Vector::y(),
            Axis::Z => Vector::z(),
        }
    }

    /// The rotation mapping the canonical `Z` spine onto this axis.
    ///
    /// The images of the canonical `x` and `y` axes are a cyclic permutation
    /// of the world axes, so the result is always a proper rotation.
    pub fn rotation(self) -> Rotation<Real> {
        let (u, v, spine) = match self {
            Axis::X => (Vector::y(), Vector::z(), Vector::x()),
            Axis::Y => (Vector::z(), Vector::x(), Vector::y()),
            Axis::Z => (Vector::x(), Vector::y(), Vector::z()),
        };

        Rotation::from_matrix_unchecked(Matrix3::from_columns(&[u, v, spine]))
    }

    /// The homogeneous transform mapping the canonical `Z` spine onto this axis.
    ///
    /// This is a pure rotation: it has no translation nor scaling part.
    pub fn basis(self) -> Basis<Real> {
        self.rotation().to_homogeneous()
    }
}

impl FromStr for Axis {
    type Err = InvalidAxis;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "X" => Ok(Axis::X),
            "Y" => Ok(Axis::Y),
            "Z" => Ok(Axis::Z),
            _ => Err(InvalidAxis(token.to_string())),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.token())
    }
}
