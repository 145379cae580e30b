use super::{generate_topology, Subdivisions};
use crate::math::{Basis, Point, Real};
use crate::shape::{Capsule, CapsuleShape, TaperedCapsule};
use crate::topology::MeshTopology;
use crate::transformation::utils;
use na::RealField;

impl Capsule {
    /// Generates the points of this capsule's mesh, oriented along its axis.
    pub fn to_points(&self, subdivisions: Subdivisions) -> Vec<Point<Real>> {
        generate_points(subdivisions, self.radius, self.height, Some(&self.basis()))
    }

    /// Discretizes the boundary of this capsule as a quad-dominant mesh.
    pub fn to_mesh(&self, subdivisions: Subdivisions) -> (Vec<Point<Real>>, MeshTopology) {
        (
            self.to_points(subdivisions),
            generate_topology(subdivisions, true),
        )
    }

    /// Discretizes the boundary of this capsule as a triangle-mesh.
    pub fn to_trimesh(&self, subdivisions: Subdivisions) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        let (vtx, topology) = self.to_mesh(subdivisions);
        (vtx, topology.triangulate())
    }
}

impl TaperedCapsule {
    /// Generates the points of this capsule's mesh, oriented along its axis.
    ///
    /// Both caps are spheres, cut at the latitude computed by
    /// [`TaperedCapsule::tangent_latitude`].
    pub fn to_points(&self, subdivisions: Subdivisions) -> Vec<Point<Real>> {
        let latitude = self.tangent_latitude().latitude_range;

        generate_tapered_points(
            subdivisions,
            self.radius_bottom,
            self.radius_top,
            self.height,
            self.radius_bottom,
            latitude,
            self.radius_top,
            latitude,
            360.0,
            Some(&self.basis()),
        )
    }

    /// Discretizes the boundary of this capsule as a quad-dominant mesh.
    pub fn to_mesh(&self, subdivisions: Subdivisions) -> (Vec<Point<Real>>, MeshTopology) {
        (
            self.to_points(subdivisions),
            generate_topology(subdivisions, true),
        )
    }

    /// Discretizes the boundary of this capsule as a triangle-mesh.
    pub fn to_trimesh(&self, subdivisions: Subdivisions) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        let (vtx, topology) = self.to_mesh(subdivisions);
        (vtx, topology.triangulate())
    }
}

impl CapsuleShape {
    /// Generates the points of this capsule's mesh, oriented along its axis.
    pub fn to_points(&self, subdivisions: Subdivisions) -> Vec<Point<Real>> {
        match self {
            CapsuleShape::Uniform(s) => s.to_points(subdivisions),
            CapsuleShape::Tapered(s) => s.to_points(subdivisions),
        }
    }

    /// Discretizes the boundary of this capsule as a triangle-mesh.
    pub fn to_trimesh(&self, subdivisions: Subdivisions) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        (
            self.to_points(subdivisions),
            generate_topology(subdivisions, true).triangulate(),
        )
    }
}

/// Generates the points of a capsule with hemispherical caps of radius
/// `radius` centered at `±height / 2` on the `Z` axis.
///
/// Each point is then transformed by `basis`, if any. The result has
/// [`Subdivisions::num_points`] points (closed sweep), ordered as described in
/// the [module documentation](super).
pub fn generate_points(
    subdivisions: Subdivisions,
    radius: Real,
    height: Real,
    basis: Option<&Basis<Real>>,
) -> Vec<Point<Real>> {
    generate_tapered_points(
        subdivisions,
        radius,
        radius,
        height,
        radius,
        0.0,
        radius,
        0.0,
        360.0,
        basis,
    )
}

/// Generates the points of a capsule with distinct bottom and top caps.
///
/// - `radius_bottom` / `radius_top` scale the rings of each cap away from the spine.
/// - `sweep_radius_bottom` / `sweep_radius_top` scale the caps along the spine;
///   equal to the matching radius for spherical caps.
/// - `latitude_range_bottom` is the latitude, in radians, where the bottom cap
///   ends; `latitude_range_top` the one where the top cap starts. Zero gives
///   hemispheres, see [`tangent_latitude`](crate::transformation::tangent_latitude)
///   for a crease-free cone.
/// - `sweep_degrees` is the angular extent around the spine, clamped to
///   `[-360, 360]`. Anything but a full turn duplicates the seam points.
///   Negative sweeps cover the arc on the clockwise side of `+x`, with rings
///   still running counter-clockwise so [`generate_topology`] faces point
///   outward.
///
/// Each point is then transformed by `basis`, if any.
pub fn generate_tapered_points(
    subdivisions: Subdivisions,
    radius_bottom: Real,
    radius_top: Real,
    height: Real,
    sweep_radius_bottom: Real,
    latitude_range_bottom: Real,
    sweep_radius_top: Real,
    latitude_range_top: Real,
    sweep_degrees: Real,
    basis: Option<&Basis<Real>>,
) -> Vec<Point<Real>> {
    let num_cap_axial = subdivisions.num_cap_axial();
    let ring = utils::unit_ring(subdivisions.num_radial(), sweep_degrees);
    let closed = utils::is_closed_sweep(sweep_degrees);
    let half_height = height * 0.5;
    let pi_two = Real::frac_pi_2();

    let mut points = Vec::with_capacity(subdivisions.num_points(closed));
    let mut out = |pt: Point<Real>| points.push(pt);

    out(Point::new(0.0, 0.0, -(half_height + sweep_radius_bottom)));

    // Bottom cap, latitudes in (-pi/2, latitude_range_bottom].
    let bottom_span = pi_two + latitude_range_bottom;
    for i in 1..=num_cap_axial {
        let lat = -pi_two + (i as Real / num_cap_axial as Real) * bottom_span;
        utils::push_ring(
            &ring,
            radius_bottom * lat.cos(),
            -half_height + sweep_radius_bottom * lat.sin(),
            &mut out,
        );
    }

    // Top cap, latitudes in [latitude_range_top, pi/2).
    let top_span = pi_two - latitude_range_top;
    for i in 0..num_cap_axial {
        let lat = latitude_range_top + (i as Real / num_cap_axial as Real) * top_span;
        utils::push_ring(
            &ring,
            radius_top * lat.cos(),
            half_height + sweep_radius_top * lat.sin(),
            &mut out,
        );
    }

    out(Point::new(0.0, 0.0, half_height + sweep_radius_top));

    if let Some(basis) = basis {
        utils::transform(&mut points, basis);
    }

    points
}
