use crate::math::Point;

/// Tests whether the origin lies inside (or on the boundary of) the triangle `a`, `b`, `c`.
///
/// The test looks at the sign of the three edge-to-origin perp products and
/// accepts both the all-nonnegative and the all-nonpositive case, so it does
/// not depend on the winding of the triangle.
#[inline]
pub fn triangle_contains_origin(a: &Point, b: &Point, c: &Point) -> bool {
    let d1 = (b - a).perp(&-a.coords);
    let d2 = (c - b).perp(&-b.coords);
    let d3 = (a - c).perp(&-c.coords);

    (d1 >= 0.0 && d2 >= 0.0 && d3 >= 0.0) || (d1 <= 0.0 && d2 <= 0.0 && d3 <= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winding_does_not_change_the_verdict() {
        let a = Point::new(-1.0, -1.0);
        let b = Point::new(2.0, -1.0);
        let c = Point::new(0.0, 2.0);

        assert!(triangle_contains_origin(&a, &b, &c));
        assert!(triangle_contains_origin(&a, &c, &b));

        let far = Point::new(5.0, 5.0);
        assert!(!triangle_contains_origin(&a, &b, &far));
        assert!(!triangle_contains_origin(&a, &far, &b));
    }

    #[test]
    fn boundary_counts_as_inside() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let c = Point::new(0.0, 1.0);

        assert!(triangle_contains_origin(&a, &b, &c));
    }
}
