use capsule3d::math::Point;
use capsule3d::shape::{Capsule, TaperedCapsule};
use capsule3d::transformation::Subdivisions;
use approx::assert_relative_eq;

#[test]
fn zero_height_capsule_is_a_sphere() {
    let subdivisions = Subdivisions::new(10, 4).unwrap();

    for points in [
        Capsule::new_z(0.0, 0.75).to_points(subdivisions),
        TaperedCapsule::new_x(0.0, 0.75, 0.75).to_points(subdivisions),
    ] {
        for pt in &points {
            assert_relative_eq!((pt - Point::origin()).norm(), 0.75, epsilon = 1.0e-5);
        }
    }
}

#[test]
fn nested_caps_collapse_into_the_larger_sphere() {
    let subdivisions = Subdivisions::new(10, 4).unwrap();

    // One cap swallows the other: no tangent plane exists.
    for capsule in [
        TaperedCapsule::new_z(0.0, 0.25, 1.0),
        TaperedCapsule::new_z(0.5, 0.1, 1.0),
        TaperedCapsule::new_z(0.5, 1.0, 0.1),
    ] {
        assert!(capsule.tangent_latitude().degenerate);

        let larger = capsule.radius_top.max(capsule.radius_bottom);
        for pt in capsule.to_points(subdivisions) {
            assert!(pt.coords.iter().all(|c| c.is_finite()));
            assert!(pt.coords.norm() <= larger + capsule.height / 2.0 + 1.0e-5);
        }
    }
}
