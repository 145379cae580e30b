use capsule3d::imaging::{
    tokens, AttributeMap, CapsuleAdapter, CapsuleSchema, DirtyBits, TimeCode,
};
use capsule3d::shape::{Axis, TaperedCapsule};
use approx::assert_relative_eq;

#[test]
fn animated_tapered_capsule() {
    let attrs = AttributeMap::new()
        .with_default(tokens::HEIGHT, 2.0)
        .with_sample(tokens::RADIUS_TOP, 0.0, 0.5)
        .with_sample(tokens::RADIUS_TOP, 10.0, 1.5)
        .with_default(tokens::RADIUS_BOTTOM, 1.0)
        .with_default(tokens::AXIS, "Y");
    let adapter = CapsuleAdapter::new(CapsuleSchema::Tapered);

    assert_eq!(adapter.track_variability(&attrs), DirtyBits::DIRTY_POINTS);
    assert_eq!(
        adapter.process_property_change(tokens::RADIUS_TOP),
        DirtyBits::DIRTY_POINTS
    );

    let topology = adapter.topology();
    for t in [0.0, 2.5, 5.0, 10.0] {
        let points = adapter.points(&attrs, TimeCode::Sample(t));
        assert_eq!(points.len(), adapter.num_points());
        assert_eq!(topology.max_point_index(), Some(points.len() as u32 - 1));
    }

    // Halfway, both radii are equal: the waist is a cylinder along Y.
    let shape = adapter.read_shape(&attrs, TimeCode::Sample(5.0));
    assert_eq!(shape.axis(), Axis::Y);
    let (bottom, top) = shape.radii();
    assert_relative_eq!(bottom, 1.0);
    assert_relative_eq!(top, 1.0, epsilon = 1.0e-6);

    let points = adapter.points(&attrs, TimeCode::Sample(0.0));
    let expected = TaperedCapsule::new(2.0, 0.5, 1.0, Axis::Y)
        .to_points(adapter.subdivisions());
    assert_eq!(points, expected);
}

#[test]
fn adapter_subdivisions() {
    let adapter = CapsuleAdapter::new(CapsuleSchema::Uniform);
    assert_eq!(adapter.subdivisions().num_radial(), CapsuleAdapter::NUM_RADIAL);
    assert_eq!(adapter.subdivisions().num_cap_axial(), CapsuleAdapter::NUM_CAP_AXIAL);
    assert_eq!(adapter.num_points(), 82);
}
