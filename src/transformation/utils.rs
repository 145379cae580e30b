//! Low-level utilities for capsule point generation.
//!
//! Rings are generated once as unit `(cos, sin)` pairs and then scaled and
//! lifted to each latitude, so the trigonometry of the longitudes is only
//! evaluated once per mesh.

use crate::math::{Basis, Point, Real};
use crate::topology::num_radial_points;
use na::RealField;

/// Sweeps closer than this to a full turn, in degrees, are treated as closed.
pub const CLOSED_SWEEP_EPSILON: Real = 1.0e-4;

/// Clamps a sweep angle, in degrees, to a single turn in either direction.
#[inline]
pub fn clamp_sweep(sweep_degrees: Real) -> Real {
    sweep_degrees.clamp(-360.0, 360.0)
}

/// Does a sweep angle, in degrees, describe a full turn?
#[inline]
pub fn is_closed_sweep(sweep_degrees: Real) -> bool {
    approx::abs_diff_eq!(
        clamp_sweep(sweep_degrees).abs(),
        360.0,
        epsilon = CLOSED_SWEEP_EPSILON
    )
}

/// Computes the unit-radius `(cos, sin)` pairs of a ring of `num_radial` segments
/// spanning `sweep_degrees`.
///
/// Positive sweeps cover the arc from the `+x` axis to `sweep_degrees`,
/// negative ones the arc from `sweep_degrees` back to `+x`. Either way the
/// ring runs counter-clockwise around `+z`, so right-handed faces built on it
/// point outward. Closed sweeps get `num_radial` points, open sweeps one more
/// so the arc's end has its own point.
pub fn unit_ring(num_radial: usize, sweep_degrees: Real) -> Vec<[Real; 2]> {
    let sweep = clamp_sweep(sweep_degrees);
    let closed = is_closed_sweep(sweep);
    let start = Real::two_pi() * (sweep.min(0.0) / 360.0);
    let turn = Real::two_pi() * (sweep.abs() / 360.0);

    (0..num_radial_points(num_radial, closed))
        .map(|i| {
            let longitude = start + (i as Real / num_radial as Real) * turn;
            [longitude.cos(), longitude.sin()]
        })
        .collect()
}

/// Pushes a ring of the given `radius` at height `z` to `out`.
#[inline]
pub fn push_ring(
    ring: &[[Real; 2]],
    radius: Real,
    z: Real,
    out: &mut impl FnMut(Point<Real>),
) {
    for [c, s] in ring {
        out(Point::new(radius * c, radius * s, z));
    }
}

/// Applies in-place a basis transform to an array of points.
pub fn transform(points: &mut [Point<Real>], basis: &Basis<Real>) {
    points
        .iter_mut()
        .for_each(|p| *p = basis.transform_point(p));
}
