use crate::math::Vector;

/// Computes a vector perpendicular to `seg` lying on the same side as `toward`.
///
/// This is the double triple product `(seg × toward) × seg` collapsed to 2D.
/// If `toward` is collinear with `seg` either perpendicular is valid and the
/// left-hand one is returned.
#[inline]
pub fn perp_toward(seg: &Vector, toward: &Vector) -> Vector {
    let res = toward * seg.norm_squared() - seg * seg.dot(toward);

    if res.norm_squared() > 0.0 {
        res
    } else {
        Vector::new(-seg.y, seg.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perpendicular_faces_the_target_side() {
        let seg = Vector::new(2.0, 0.0);
        let toward = Vector::new(0.5, 3.0);
        let perp = perp_toward(&seg, &toward);

        assert!(perp.dot(&seg).abs() < 1.0e-6);
        assert!(perp.dot(&toward) > 0.0);
    }

    #[test]
    fn collinear_target_still_yields_a_perpendicular() {
        let seg = Vector::new(1.0, 1.0);
        let perp = perp_toward(&seg, &Vector::new(-2.0, -2.0));

        assert!(perp.dot(&seg).abs() < 1.0e-6);
        assert!(perp.norm_squared() > 0.0);
    }
}
