use super::Subdivisions;
use crate::math::{Point, Real};
use crate::shape::CapsuleShape;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl CapsuleShape {
    /// Generates the points of many capsules sharing the same subdivisions.
    ///
    /// Each shape gets its own buffer, in the order of `shapes`. With the
    /// `parallel` feature enabled, shapes are processed on the rayon thread pool.
    pub fn points_batch(shapes: &[CapsuleShape], subdivisions: Subdivisions) -> Vec<Vec<Point<Real>>> {
        #[cfg(feature = "parallel")]
        {
            shapes
                .par_iter()
                .map(|shape| shape.to_points(subdivisions))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            shapes
                .iter()
                .map(|shape| shape.to_points(subdivisions))
                .collect()
        }
    }
}
