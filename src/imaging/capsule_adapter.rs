use crate::imaging::attributes::tokens;
use crate::imaging::{AttributeSource, DirtyBits, TimeCode};
use crate::math::{Point, Real};
use crate::shape::{Axis, Capsule, CapsuleShape, TaperedCapsule};
use crate::topology::{shared_topology, MeshTopology};
use crate::transformation::Subdivisions;
use std::sync::Arc;

/// The attribute layout of a capsule primitive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum CapsuleSchema {
    /// `height`, `radius` and `axis`.
    #[default]
    Uniform,
    /// `height`, `radiusTop`, `radiusBottom` and `axis`.
    Tapered,
}

impl CapsuleSchema {
    /// The attributes that shape a capsule of this schema.
    pub fn attribute_names(self) -> &'static [&'static str] {
        match self {
            CapsuleSchema::Uniform => &[tokens::HEIGHT, tokens::RADIUS, tokens::AXIS],
            CapsuleSchema::Tapered => &[
                tokens::HEIGHT,
                tokens::RADIUS_TOP,
                tokens::RADIUS_BOTTOM,
                tokens::AXIS,
            ],
        }
    }
}

/// Turns the attributes of a capsule primitive into renderable mesh data.
///
/// Every capsule is meshed with the same subdivisions, so all of them share a
/// single [`MeshTopology`]; only the points depend on the attributes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CapsuleAdapter {
    schema: CapsuleSchema,
    subdivisions: Subdivisions,
}

impl CapsuleAdapter {
    /// The number of segments around the spine.
    pub const NUM_RADIAL: usize = 10;
    /// The number of latitude bands on each cap.
    pub const NUM_CAP_AXIAL: usize = 4;

    const SUBDIVISIONS: Subdivisions =
        Subdivisions::new_unchecked(Self::NUM_RADIAL, Self::NUM_CAP_AXIAL);

    /// An adapter reading attributes laid out according to `schema`.
    pub fn new(schema: CapsuleSchema) -> Self {
        Self {
            schema,
            subdivisions: Self::SUBDIVISIONS,
        }
    }

    /// The attribute layout this adapter reads.
    pub fn schema(&self) -> CapsuleSchema {
        self.schema
    }

    /// The tessellation density of the generated meshes.
    pub fn subdivisions(&self) -> Subdivisions {
        self.subdivisions
    }

    /// The number of points returned by [`CapsuleAdapter::points`].
    pub fn num_points(&self) -> usize {
        self.subdivisions.num_points(true)
    }

    /// Reads the capsule described by `source` at `time`.
    ///
    /// Missing, mistyped, negative or non-finite attributes are replaced by
    /// their default values, and an unknown axis token by [`Axis::Z`]. Each
    /// substitution is logged as a warning.
    pub fn read_shape(&self, source: &dyn AttributeSource, time: TimeCode) -> CapsuleShape {
        let height = read_length(source, tokens::HEIGHT, time, Capsule::DEFAULT_HEIGHT);
        let axis = read_axis(source, time);

        match self.schema {
            CapsuleSchema::Uniform => {
                let radius = read_length(source, tokens::RADIUS, time, Capsule::DEFAULT_RADIUS);
                Capsule::new(height, radius, axis).into()
            }
            CapsuleSchema::Tapered => {
                let radius_top =
                    read_length(source, tokens::RADIUS_TOP, time, Capsule::DEFAULT_RADIUS);
                let radius_bottom =
                    read_length(source, tokens::RADIUS_BOTTOM, time, Capsule::DEFAULT_RADIUS);
                TaperedCapsule::new(height, radius_top, radius_bottom, axis).into()
            }
        }
    }

    /// The topology shared by every capsule mesh.
    pub fn topology(&self) -> Arc<MeshTopology> {
        shared_topology(self.subdivisions)
    }

    /// The mesh points of the capsule described by `source` at `time`.
    pub fn points(&self, source: &dyn AttributeSource, time: TimeCode) -> Vec<Point<Real>> {
        self.read_shape(source, time).to_points(self.subdivisions)
    }

    /// The data invalidated by a change of the attribute `name`.
    ///
    /// Shape attributes only move points. Other attributes are left to the
    /// host, so they map to no bits here.
    pub fn process_property_change(&self, name: &str) -> DirtyBits {
        if self.schema.attribute_names().iter().any(|n| *n == name) {
            DirtyBits::DIRTY_POINTS
        } else {
            DirtyBits::empty()
        }
    }

    /// The data that must be refreshed on every time change.
    pub fn track_variability(&self, source: &dyn AttributeSource) -> DirtyBits {
        let varying = self
            .schema
            .attribute_names()
            .iter()
            .any(|name| source.is_time_varying(name));

        if varying {
            DirtyBits::DIRTY_POINTS
        } else {
            DirtyBits::empty()
        }
    }
}

fn read_length(source: &dyn AttributeSource, name: &str, time: TimeCode, default: Real) -> Real {
    match source.get_scalar(name, time) {
        Ok(value) if value.is_finite() && value >= 0.0 => value as Real,
        Ok(value) => {
            log::warn!("`{name}` has invalid length {value}, using {default}");
            default
        }
        Err(err) => {
            log::warn!("{err}, using {default}");
            default
        }
    }
}

fn read_axis(source: &dyn AttributeSource, time: TimeCode) -> Axis {
    match source.get_token(tokens::AXIS, time) {
        Ok(token) => Axis::from_token_or_default(&token),
        Err(err) => {
            log::warn!("{err}, using the Z axis");
            Axis::Z
        }
    }
}
