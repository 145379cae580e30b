mod adapter;
mod orientation;
mod point_counts;
mod sphere;
mod tangency;
mod winding;
#[cfg(feature = "wavefront")]
mod wavefront;
