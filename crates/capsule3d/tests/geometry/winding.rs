use capsule3d::math::{Point, Real};
use capsule3d::shape::{Capsule, CapsuleShape, TaperedCapsule};
use capsule3d::transformation::{generate_tapered_points, generate_topology, Subdivisions};

fn check_outward(points: &[Point<Real>], triangles: &[[u32; 3]], label: &str) {
    for [a, b, c] in triangles {
        let (a, b, c) = (points[*a as usize], points[*b as usize], points[*c as usize]);
        let normal = (b - a).cross(&(c - a));
        let centroid = Point::from((a.coords + b.coords + c.coords) / 3.0 as Real);

        // The origin is inside every capsule tested here, and they are convex.
        assert!(
            normal.dot(&centroid.coords) > 0.0,
            "inward face {a:?} {b:?} {c:?} on {label}"
        );
    }
}

fn check_shape(shape: CapsuleShape) {
    let subdivisions = Subdivisions::new(12, 3).unwrap();
    let (points, triangles) = shape.to_trimesh(subdivisions);
    check_outward(&points, &triangles, &format!("{shape:?}"));
}

#[test]
fn faces_point_outward() {
    check_shape(Capsule::new_z(1.0, 0.5).into());
    check_shape(Capsule::new_x(0.2, 0.5).into());
    check_shape(TaperedCapsule::new_y(2.0, 0.5, 1.0).into());
    check_shape(TaperedCapsule::new_z(2.0, 1.0, 0.5).into());
}

#[test]
fn swept_faces_point_outward() {
    let subdivisions = Subdivisions::new(12, 3).unwrap();
    let latitude = (0.25 as Real).asin();

    for (sweep, closed) in [(-360.0, true), (360.0, true), (-90.0, false), (90.0, false)] {
        let points = generate_tapered_points(
            subdivisions,
            1.0,
            0.5,
            2.0,
            1.0,
            latitude,
            0.5,
            latitude,
            sweep,
            None,
        );
        let triangles = generate_topology(subdivisions, closed).triangulate();

        assert_eq!(points.len(), subdivisions.num_points(closed));
        check_outward(&points, &triangles, &format!("{sweep} degree sweep"));
    }
}
