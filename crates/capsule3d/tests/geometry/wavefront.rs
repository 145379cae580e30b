use capsule3d::shape::Capsule;
use capsule3d::transformation::Subdivisions;

#[test]
fn export_capsule_obj() {
    let subdivisions = Subdivisions::new(8, 2).unwrap();
    let (points, topology) = Capsule::new_z(1.0, 0.5).to_mesh(subdivisions);
    let path = std::env::temp_dir().join("capsule3d_export_capsule_obj.obj");

    topology.to_obj_file(&points, &path).unwrap();

    let obj = std::fs::read_to_string(&path).unwrap();
    assert_eq!(obj.lines().filter(|l| l.starts_with("v ")).count(), points.len());
    assert_eq!(
        obj.lines().filter(|l| l.starts_with("f ")).count(),
        topology.num_faces()
    );
    let _ = std::fs::remove_file(&path);
}
