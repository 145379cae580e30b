use crate::transformation::{MIN_NUM_CAP_AXIAL, MIN_NUM_RADIAL};

/// Errors that can occur when configuring capsule mesh generation.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MeshGeneratorError {
    /// The requested subdivision counts are too small to build a closed surface.
    ///
    /// At least [`MIN_NUM_RADIAL`] radial segments and [`MIN_NUM_CAP_AXIAL`]
    /// axial segments per cap are required.
    #[error(
        "invalid subdivisions: {num_radial} radial (min {MIN_NUM_RADIAL}), \
         {num_cap_axial} per cap (min {MIN_NUM_CAP_AXIAL})"
    )]
    InvalidSubdivisions {
        /// The requested number of radial segments.
        num_radial: usize,
        /// The requested number of axial segments per cap.
        num_cap_axial: usize,
    },
}
