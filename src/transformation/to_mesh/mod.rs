//! Capsule mesh generation.
//!
//! A capsule mesh is a stack of latitude rings around the `Z` spine, closed
//! by a pole at each end:
//!
//! - the bottom pole,
//! - `num_cap_axial` rings on the bottom cap, from the pole up to the cap's
//!   boundary latitude,
//! - `num_cap_axial` rings on the top cap, from its boundary latitude up to
//!   the pole,
//! - the top pole.
//!
//! The waist (a cylinder, or a cone for tapered capsules) is the quad strip
//! joining the last bottom ring to the first top ring, so it adds no points.
//!
//! The topology only depends on the subdivision counts, so it can be
//! generated once and shared by every capsule; see
//! [`shared_topology`](crate::topology::shared_topology). Points are generated
//! per shape and per sample.
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "f32")] {
//! use capsule3d::shape::{Axis, TaperedCapsule};
//! use capsule3d::transformation::{compute_num_points, generate_topology, Subdivisions};
//!
//! let subdivisions = Subdivisions::new(10, 4).unwrap();
//! let topology = generate_topology(subdivisions, true);
//!
//! let capsule = TaperedCapsule::new(2.0, 0.5, 1.0, Axis::Y);
//! let points = capsule.to_points(subdivisions);
//!
//! assert_eq!(points.len(), compute_num_points(10, 4, true));
//! assert_eq!(topology.max_point_index(), Some(points.len() as u32 - 1));
//! # }
//! ```

pub use self::capsule_to_mesh::{generate_points, generate_tapered_points};

use crate::topology::{capped_quad_topology, num_radial_points, MeshTopology};
use crate::transformation::MeshGeneratorError;

mod batch;
mod capsule_to_mesh;

/// The smallest number of radial segments of a capsule mesh.
pub const MIN_NUM_RADIAL: usize = 3;
/// The smallest number of axial segments per cap of a capsule mesh.
pub const MIN_NUM_CAP_AXIAL: usize = 1;

/// The tessellation density of a capsule mesh.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Subdivisions {
    num_radial: usize,
    num_cap_axial: usize,
}

impl Subdivisions {
    /// Validates a pair of subdivision counts.
    ///
    /// `num_radial` is the number of segments around the spine and
    /// `num_cap_axial` the number of latitude bands on each cap.
    pub fn new(num_radial: usize, num_cap_axial: usize) -> Result<Self, MeshGeneratorError> {
        if num_radial < MIN_NUM_RADIAL || num_cap_axial < MIN_NUM_CAP_AXIAL {
            return Err(MeshGeneratorError::InvalidSubdivisions {
                num_radial,
                num_cap_axial,
            });
        }

        Ok(Self {
            num_radial,
            num_cap_axial,
        })
    }

    /// Subdivision counts known to be valid at compile time.
    pub(crate) const fn new_unchecked(num_radial: usize, num_cap_axial: usize) -> Self {
        assert!(num_radial >= MIN_NUM_RADIAL && num_cap_axial >= MIN_NUM_CAP_AXIAL);
        Self {
            num_radial,
            num_cap_axial,
        }
    }

    /// The number of segments around the spine.
    #[inline]
    pub fn num_radial(&self) -> usize {
        self.num_radial
    }

    /// The number of latitude bands on each cap.
    #[inline]
    pub fn num_cap_axial(&self) -> usize {
        self.num_cap_axial
    }

    /// The number of quad strips between the two poles' triangle fans.
    #[inline]
    pub fn num_quad_strips(&self) -> usize {
        2 * (self.num_cap_axial - 1) + 1
    }

    /// The number of points generated for these subdivisions.
    #[inline]
    pub fn num_points(&self, closed_sweep: bool) -> usize {
        2 * (self.num_cap_axial * num_radial_points(self.num_radial, closed_sweep) + 1)
    }
}

/// The number of points of a capsule mesh, or zero if the subdivisions are invalid.
pub fn compute_num_points(num_radial: usize, num_cap_axial: usize, closed_sweep: bool) -> usize {
    Subdivisions::new(num_radial, num_cap_axial)
        .map(|subdivisions| subdivisions.num_points(closed_sweep))
        .unwrap_or(0)
}

/// Generates the topology shared by every capsule with the given subdivisions.
///
/// Both caps are triangle fans sharing their ring with the neighbouring quad
/// strip. Faces are right-handed with outward normals.
pub fn generate_topology(subdivisions: Subdivisions, closed_sweep: bool) -> MeshTopology {
    capped_quad_topology(
        subdivisions.num_radial,
        subdivisions.num_quad_strips(),
        closed_sweep,
    )
}
