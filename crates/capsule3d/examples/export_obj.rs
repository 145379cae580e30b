use capsule3d::shape::TaperedCapsule;
use capsule3d::transformation::Subdivisions;
use std::path::PathBuf;

fn main() {
    let subdivisions = Subdivisions::new(32, 8).unwrap();
    let (points, topology) = TaperedCapsule::new_z(2.0, 0.4, 1.0).to_mesh(subdivisions);
    let path = PathBuf::from("tapered_capsule.obj");

    topology.to_obj_file(&points, &path).unwrap();
    println!("wrote {} faces to {}", topology.num_faces(), path.display());
}
