use super::{MeshTopology, Orientation, SubdivisionScheme};

/// The number of points on a ring of `num_radial` segments.
///
/// Open sweeps duplicate the seam point so both ends of the arc get their own
/// vertex; closed sweeps wrap around onto the first point.
#[inline]
pub fn num_radial_points(num_radial: usize, closed_sweep: bool) -> usize {
    if closed_sweep {
        num_radial
    } else {
        num_radial + 1
    }
}

/// Generates the topology of a stack of quad strips closed by a triangle fan
/// at each end.
///
/// Each fan shares its ring with the neighbouring quad strip. Points are
/// expected in this order: the bottom pole, then `num_quad_strips + 1` rings
/// of [`num_radial_points`] points each, then the top pole. Faces are
/// right-handed with outward normals when rings run counter-clockwise around
/// the `+Z` spine.
///
/// Returns an empty topology if `num_radial` is smaller than 3.
pub fn capped_quad_topology(
    num_radial: usize,
    num_quad_strips: usize,
    closed_sweep: bool,
) -> MeshTopology {
    if num_radial < 3 {
        log::warn!("cannot build a capped quad topology with {num_radial} radial segments");
        return MeshTopology::default();
    }

    let num_tris = 2 * num_radial;
    let num_quads = num_quad_strips * num_radial;
    let ring_len = num_radial_points(num_radial, closed_sweep);

    let mut counts = Vec::with_capacity(num_quads + num_tris);
    let mut indices = Vec::with_capacity(4 * num_quads + 3 * num_tris);
    let idx = |i: usize| i as u32;

    // Bottom fan.
    let pole = 0;
    let mut base = 1;
    for rad in 0..num_radial {
        let next = (rad + 1) % ring_len;
        counts.push(3);
        indices.extend_from_slice(&[idx(base + next), idx(base + rad), idx(pole)]);
    }

    for _ in 0..num_quad_strips {
        for rad in 0..num_radial {
            let next = (rad + 1) % ring_len;
            counts.push(4);
            indices.extend_from_slice(&[
                idx(base + rad),
                idx(base + next),
                idx(base + next + ring_len),
                idx(base + rad + ring_len),
            ]);
        }
        base += ring_len;
    }

    // Top fan.
    let pole = base + ring_len;
    for rad in 0..num_radial {
        let next = (rad + 1) % ring_len;
        counts.push(3);
        indices.extend_from_slice(&[idx(base + rad), idx(base + next), idx(pole)]);
    }

    MeshTopology::from_raw_parts(
        counts,
        indices,
        Orientation::RightHanded,
        SubdivisionScheme::CatmullClark,
    )
}
