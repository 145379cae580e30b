use capsule3d::imaging::{tokens, AttributeMap, CapsuleAdapter, CapsuleSchema, TimeCode};
use capsule3d::shape::{Axis, Capsule};
use capsule3d::transformation::Subdivisions;

fn main() {
    let subdivisions = Subdivisions::new(10, 4).unwrap();
    let (points, topology) = Capsule::new(2.0, 0.5, Axis::Y).to_mesh(subdivisions);
    println!("{} points, {topology}", points.len());

    let attrs = AttributeMap::new()
        .with_default(tokens::HEIGHT, 2.0)
        .with_default(tokens::RADIUS_TOP, 0.5)
        .with_default(tokens::RADIUS_BOTTOM, 1.0)
        .with_default(tokens::AXIS, "X");
    let adapter = CapsuleAdapter::new(CapsuleSchema::Tapered);
    let shape = adapter.read_shape(&attrs, TimeCode::Default);
    let tip = adapter.points(&attrs, TimeCode::Default)[adapter.num_points() - 1];

    println!("{shape:?} ends at {tip}");
}
