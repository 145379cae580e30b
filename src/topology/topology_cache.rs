use crate::topology::MeshTopology;
use crate::transformation::{generate_topology, Subdivisions};
use hashbrown::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

type TopologyMap = HashMap<(usize, usize), Arc<MeshTopology>>;

static CACHE: OnceLock<RwLock<TopologyMap>> = OnceLock::new();

/// The closed-sweep capsule topology for `subdivisions`, shared process-wide.
///
/// The topology is built on the first request for a given pair of counts;
/// later requests return the same [`Arc`].
pub fn shared_topology(subdivisions: Subdivisions) -> Arc<MeshTopology> {
    let key = (subdivisions.num_radial(), subdivisions.num_cap_axial());
    let cache = CACHE.get_or_init(|| RwLock::new(HashMap::new()));

    if let Some(topology) = cache
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
    {
        return topology.clone();
    }

    // Another thread may have inserted it between the two locks.
    cache
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .entry(key)
        .or_insert_with(|| {
            log::debug!(
                "building capsule topology for {} radial, {} cap axial subdivisions",
                key.0,
                key.1
            );
            Arc::new(generate_topology(subdivisions, true))
        })
        .clone()
}
