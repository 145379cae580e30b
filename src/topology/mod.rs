//! Mesh connectivity, independent of point positions.

pub use self::capped_quad::{capped_quad_topology, num_radial_points};
pub use self::mesh_topology::{MeshTopology, Orientation, SubdivisionScheme, TopologyError};
pub use self::topology_cache::shared_topology;

mod capped_quad;
mod mesh_topology;
mod topology_cache;
