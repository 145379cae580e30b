use capsule3d::math::Point;
use capsule3d::shape::{Axis, Capsule, TaperedCapsule};
use capsule3d::transformation::Subdivisions;
use approx::assert_relative_eq;

#[test]
fn y_axis_permutes_canonical_points() {
    let subdivisions = Subdivisions::new(10, 4).unwrap();
    let canonical = Capsule::new_z(2.0, 0.5).to_points(subdivisions);
    let along_y = Capsule::new_y(2.0, 0.5).to_points(subdivisions);

    for (c, y) in canonical.iter().zip(&along_y) {
        assert_relative_eq!(*y, Point::new(c.y, c.z, c.x), epsilon = 1.0e-6);
    }

    assert_relative_eq!(along_y[0], Point::new(0.0, -1.5, 0.0), epsilon = 1.0e-6);
    assert_relative_eq!(
        along_y[along_y.len() - 1],
        Point::new(0.0, 1.5, 0.0),
        epsilon = 1.0e-6
    );
}

#[test]
fn bases_are_proper_rotations() {
    for axis in [Axis::X, Axis::Y, Axis::Z] {
        let basis = axis.basis();
        assert_relative_eq!(basis.determinant(), 1.0, epsilon = 1.0e-6);
        assert_relative_eq!(
            basis.transform_point(&Point::new(0.0, 0.0, 1.0)),
            Point::from(axis.spine()),
            epsilon = 1.0e-6
        );
        // No translation.
        assert_relative_eq!(
            basis.transform_point(&Point::origin()),
            Point::origin(),
            epsilon = 1.0e-6
        );
    }
}

#[test]
fn poles_lie_on_the_declared_axis() {
    let subdivisions = Subdivisions::new(6, 2).unwrap();

    for axis in [Axis::X, Axis::Y, Axis::Z] {
        let points = TaperedCapsule::new(1.0, 0.25, 0.5, axis).to_points(subdivisions);
        let bottom = points[0];
        let top = points[points.len() - 1];

        assert_relative_eq!(bottom.coords, -axis.spine() * 1.0, epsilon = 1.0e-6);
        assert_relative_eq!(top.coords, axis.spine() * 0.75, epsilon = 1.0e-6);
    }
}
