use capsule3d::shape::{Capsule, TaperedCapsule};
use capsule3d::transformation::{compute_num_points, generate_topology, Subdivisions};

#[test]
fn point_buffers_match_topology() {
    for num_radial in 3..16 {
        for num_cap_axial in 1..7 {
            let subdivisions = Subdivisions::new(num_radial, num_cap_axial).unwrap();
            let expected = compute_num_points(num_radial, num_cap_axial, true);
            let topology = generate_topology(subdivisions, true);

            let uniform = Capsule::new_z(1.0, 0.5).to_points(subdivisions);
            let tapered = TaperedCapsule::new_z(2.0, 0.3, 0.7).to_points(subdivisions);

            assert_eq!(uniform.len(), expected);
            assert_eq!(tapered.len(), expected);
            assert_eq!(topology.max_point_index(), Some(expected as u32 - 1));
            assert_eq!(
                topology.num_faces(),
                2 * num_radial + subdivisions.num_quad_strips() * num_radial
            );
            assert_eq!(
                topology.num_indices(),
                3 * 2 * num_radial + 4 * subdivisions.num_quad_strips() * num_radial
            );
        }
    }
}

#[test]
fn every_point_is_referenced() {
    let subdivisions = Subdivisions::new(10, 4).unwrap();
    let topology = generate_topology(subdivisions, true);
    let mut used = vec![false; compute_num_points(10, 4, true)];

    for i in topology.face_vertex_indices() {
        used[*i as usize] = true;
    }

    assert!(used.iter().all(|u| *u));
}

#[test]
fn generation_is_idempotent() {
    let subdivisions = Subdivisions::new(9, 3).unwrap();
    let capsule = TaperedCapsule::new_y(1.5, 0.2, 0.6);

    assert_eq!(capsule.to_points(subdivisions), capsule.to_points(subdivisions));
    assert_eq!(
        generate_topology(subdivisions, true),
        generate_topology(subdivisions, true)
    );
}

#[test]
fn tapered_with_equal_radii_is_uniform() {
    let subdivisions = Subdivisions::new(10, 4).unwrap();

    for (height, radius) in [(1.0, 0.5), (3.0, 0.1), (0.0, 1.0), (0.5, 0.0)] {
        let uniform = Capsule::new_x(height, radius).to_points(subdivisions);
        let tapered = TaperedCapsule::new_x(height, radius, radius).to_points(subdivisions);
        assert_eq!(uniform, tapered);
    }
}
