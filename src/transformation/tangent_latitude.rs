use crate::math::{Real, Vector2};

/// The latitude at which the caps of a tapered capsule meet its conical waist.
///
/// Latitudes are measured from each cap's equator, positive toward the top
/// pole. A single value applies to both caps: the bottom cap spans
/// `[-π/2, latitude_range]` and the top cap `[latitude_range, π/2]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TangentLatitude {
    /// The signed latitude, in radians, where the cone touches both caps.
    pub latitude_range: Real,
    /// The unit normal of the tangent line in the `(spine, radial)` cross-section,
    /// before the sign of `latitude_range` is applied.
    pub perp_tangent: Vector2<Real>,
    /// `true` if no plane touches both caps (one cap contains the other) and
    /// the solve was clamped.
    pub degenerate: bool,
}

impl TangentLatitude {
    /// The solution for caps of equal radii: the waist is a cylinder.
    pub fn cylindrical() -> Self {
        Self {
            latitude_range: 0.0,
            perp_tangent: Vector2::y(),
            degenerate: false,
        }
    }

    /// The outward normal of the waist in the `(spine, radial)` cross-section.
    ///
    /// Unlike [`Self::perp_tangent`], its spine component carries the sign of
    /// the taper.
    pub fn waist_normal(&self) -> Vector2<Real> {
        Vector2::new(self.latitude_range.sin(), self.latitude_range.cos())
    }
}

/// Computes the latitude where a plane tangent to both caps of a tapered
/// capsule touches them.
///
/// The caps are spheres of radii `radius_bottom` and `radius_top` centered at
/// `∓height / 2`. In a cross-section, the problem reduces to intersecting
/// the circle of radius `height / 2` centered at the origin (which holds both
/// cap centers) with the circle of radius `radius_bottom - radius_top`
/// centered on the bottom cap center. The direction from that center to the
/// intersection is the normal of the tangent line; its angle from the spine
/// is the latitude.
///
/// Equal radii skip the solve and yield a latitude of zero. If the radii
/// differ by at least `height` there is no tangent plane: the intersection is
/// clamped onto the spine, giving a latitude of `±π/2`, and the result is
/// flagged as [`TangentLatitude::degenerate`].
pub fn tangent_latitude(radius_bottom: Real, radius_top: Real, height: Real) -> TangentLatitude {
    if radius_bottom == radius_top {
        return TangentLatitude::cylindrical();
    }

    let r_a = radius_bottom - radius_top;
    let r_b = height * 0.5;
    let a = height * -0.5;

    // Without a tangent plane, the clamped intersection lies on the spine.
    let clamped = (Vector2::x(), true);

    let (perp_tangent, degenerate) = if height > 0.0 {
        let qx = (r_b * r_b - r_a * r_a + a * a) / (2.0 * a);
        let radicand = r_a * r_a - (qx - a) * (qx - a);

        // Also catches a NaN radicand, from overflowing squares.
        if radicand >= 0.0 {
            let q = Vector2::new(qx, radicand.sqrt());
            match (q - Vector2::new(a, 0.0)).try_normalize(0.0) {
                Some(dir) if dir.iter().all(|c| c.is_finite()) => (dir, false),
                _ => clamped,
            }
        } else {
            clamped
        }
    } else {
        // Both cap centers coincide: the limit of the clamped solve.
        clamped
    };

    if degenerate {
        log::debug!(
            "no plane is tangent to both caps (radii {radius_bottom} and {radius_top}, height {height}); clamping"
        );
    }

    let mut latitude_range = perp_tangent.y.clamp(-1.0, 1.0).acos();

    if radius_top > radius_bottom {
        latitude_range = -latitude_range;
    }

    TangentLatitude {
        latitude_range,
        perp_tangent,
        degenerate,
    }
}
