//! Conversion of capsule shapes to renderable meshes.

pub use self::error::MeshGeneratorError;
pub use self::tangent_latitude::{tangent_latitude, TangentLatitude};
pub use self::to_mesh::{
    compute_num_points, generate_points, generate_tapered_points, generate_topology,
    Subdivisions, MIN_NUM_CAP_AXIAL, MIN_NUM_RADIAL,
};

mod error;
mod tangent_latitude;
mod to_mesh;
pub mod utils;

#[cfg(feature = "wavefront")]
pub mod wavefront;
