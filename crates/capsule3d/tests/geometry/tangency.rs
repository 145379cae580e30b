use capsule3d::math::{Point, Real, Vector2};
use capsule3d::shape::TaperedCapsule;
use capsule3d::transformation::Subdivisions;
use approx::assert_relative_eq;

const NUM_RADIAL: usize = 10;
const NUM_CAP_AXIAL: usize = 4;

/// The first point of the last bottom ring and of the first top ring, both at
/// longitude zero, i.e. in the `xz` plane.
fn waist_ends(points: &[Point<Real>]) -> (Point<Real>, Point<Real>) {
    let bottom = 1 + (NUM_CAP_AXIAL - 1) * NUM_RADIAL;
    let top = 1 + NUM_CAP_AXIAL * NUM_RADIAL;
    (points[bottom], points[top])
}

fn check_tangency(height: Real, radius_top: Real, radius_bottom: Real) {
    let subdivisions = Subdivisions::new(NUM_RADIAL, NUM_CAP_AXIAL).unwrap();
    let capsule = TaperedCapsule::new_z(height, radius_top, radius_bottom);
    let points = capsule.to_points(subdivisions);
    let (lo, hi) = waist_ends(&points);

    let bottom_center = Point::new(0.0, 0.0, -height / 2.0);
    let top_center = Point::new(0.0, 0.0, height / 2.0);

    // Both waist ends lie on their cap sphere.
    assert_relative_eq!((lo - bottom_center).norm(), radius_bottom, epsilon = 1.0e-5);
    assert_relative_eq!((hi - top_center).norm(), radius_top, epsilon = 1.0e-5);

    // The cone is perpendicular to both sphere normals where it touches them.
    let waist = (hi - lo).normalize();
    let bottom_normal = (lo - bottom_center).normalize();
    let top_normal = (hi - top_center).normalize();
    assert_relative_eq!(waist.dot(&bottom_normal), 0.0, epsilon = 1.0e-4);
    assert_relative_eq!(waist.dot(&top_normal), 0.0, epsilon = 1.0e-4);

    // Both ends share the latitude of the cross-section solve.
    let latitude = capsule.tangent_latitude();
    assert!(!latitude.degenerate);

    // In the (spine, radial) cross-section, the waist is perpendicular to the
    // solved normal, whose spine component is signed for widening cones.
    let cross_section = Vector2::new(waist.z, waist.x);
    assert_relative_eq!(cross_section.dot(&latitude.waist_normal()), 0.0, epsilon = 1.0e-4);
    if radius_bottom > radius_top {
        assert_relative_eq!(cross_section.dot(&latitude.perp_tangent), 0.0, epsilon = 1.0e-4);
    }
    assert_relative_eq!(
        bottom_normal.z,
        latitude.latitude_range.sin(),
        epsilon = 1.0e-5
    );
    assert_relative_eq!(
        latitude.waist_normal().x,
        latitude.latitude_range.sin(),
        epsilon = 1.0e-6
    );
}

#[test]
fn narrowing_cone_is_tangent() {
    check_tangency(2.0, 0.5, 1.0);
    check_tangency(1.0, 0.1, 0.6);
}

#[test]
fn widening_cone_is_tangent() {
    check_tangency(2.0, 1.0, 0.5);
    check_tangency(3.0, 0.9, 0.2);
}

#[test]
fn random_tapers_are_tangent() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..200 {
        let height = 0.1 + rng.rand_float() as Real * 4.0;
        let radius_bottom = 0.05 + rng.rand_float() as Real * 2.0;
        // Keep the radii difference below the height so a tangent plane exists.
        let delta = (rng.rand_float() as Real * 1.8 - 0.9) * height;
        let radius_top = radius_bottom + delta;

        if radius_top <= 0.05 {
            continue;
        }

        check_tangency(height, radius_top, radius_bottom);
    }
}

#[test]
fn scenario_latitude() {
    let latitude = TaperedCapsule::new_z(2.0, 0.5, 1.0).tangent_latitude();
    assert_relative_eq!(latitude.latitude_range, 0.252680, epsilon = 1.0e-5);
    assert_relative_eq!(latitude.latitude_range, (0.25 as Real).asin(), epsilon = 1.0e-6);

    let flipped = TaperedCapsule::new_z(2.0, 1.0, 0.5).tangent_latitude();
    assert_relative_eq!(flipped.latitude_range, -latitude.latitude_range, epsilon = 1.0e-6);
}
