#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
/// The parts of a capsule's renderable data a change invalidates.
pub struct DirtyBits(u32);

bitflags::bitflags! {
    impl DirtyBits: u32 {
        /// The point positions must be regenerated.
        const DIRTY_POINTS = 1;
        /// The mesh connectivity must be fetched again.
        const DIRTY_TOPOLOGY = 1 << 1;
    }
}
