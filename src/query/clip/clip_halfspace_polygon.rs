use crate::math::{Point, UnitVector, DEFAULT_EPSILON};
use crate::query::QueryError;

/// Computes the intersection of the infinite lines through `p1`, `p2` and
/// through `p3`, `p4`.
///
/// Fails with [`QueryError::DegenerateNumeric`] if the lines are parallel
/// (zero denominator in the determinant formula).
pub fn line_line_intersection(
    p1: &Point,
    p2: &Point,
    p3: &Point,
    p4: &Point,
) -> Result<Point, QueryError> {
    let denom = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);

    if denom.abs() < DEFAULT_EPSILON {
        return Err(QueryError::DegenerateNumeric);
    }

    let det12 = p1.x * p2.y - p1.y * p2.x;
    let det34 = p3.x * p4.y - p3.y * p4.x;

    Ok(Point::new(
        (det12 * (p3.x - p4.x) - (p1.x - p2.x) * det34) / denom,
        (det12 * (p3.y - p4.y) - (p1.y - p2.y) * det34) / denom,
    ))
}

/// Cuts a polygon with the half-plane bounded by the line through `a` and
/// `b` with outward `normal` (one Sutherland-Hodgman pass).
///
/// A point `pt` is inside the half-plane when `(pt - a).dot(normal) < 0`.
/// Each consecutive point pair of `polygon` (with wrap-around) contributes:
/// both inside keeps the second point, both outside drops both, and a
/// crossing pair emits the line-line intersection (plus the second point
/// when entering the half-plane).
pub fn clip_halfspace_polygon(
    a: &Point,
    b: &Point,
    normal: &UnitVector,
    polygon: &[Point],
    result: &mut Vec<Point>,
) -> Result<(), QueryError> {
    result.clear();

    let inside = |pt: &Point| (pt - a).dot(normal) < 0.0;

    for i in 0..polygon.len() {
        let first = &polygon[i];
        let second = &polygon[(i + 1) % polygon.len()];

        match (inside(first), inside(second)) {
            (true, true) => result.push(*second),
            (false, false) => {}
            (true, false) => result.push(line_line_intersection(first, second, a, b)?),
            (false, true) => {
                result.push(line_line_intersection(first, second, a, b)?);
                result.push(*second);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector;
    use approx::assert_relative_eq;

    #[test]
    fn parallel_lines_are_degenerate() {
        let res = line_line_intersection(
            &Point::new(0.0, 0.0),
            &Point::new(1.0, 0.0),
            &Point::new(0.0, 1.0),
            &Point::new(1.0, 1.0),
        );
        assert_eq!(res.unwrap_err(), QueryError::DegenerateNumeric);
    }

    #[test]
    fn crossing_lines_intersect() {
        let pt = line_line_intersection(
            &Point::new(-1.0, -1.0),
            &Point::new(1.0, 1.0),
            &Point::new(-1.0, 1.0),
            &Point::new(1.0, -1.0),
        )
        .unwrap();
        assert_relative_eq!(pt, Point::new(0.0, 0.0), epsilon = 1.0e-6);
    }

    #[test]
    fn halfspace_clip_cuts_a_square_in_half() {
        let square = [
            Point::new(1.0, -1.0),
            Point::new(1.0, 1.0),
            Point::new(-1.0, 1.0),
            Point::new(-1.0, -1.0),
        ];

        // Keep the half-plane x < 0.
        let a = Point::new(0.0, -2.0);
        let b = Point::new(0.0, 2.0);
        let normal = UnitVector::new_normalize(Vector::new(1.0, 0.0));

        let mut clipped = Vec::new();
        clip_halfspace_polygon(&a, &b, &normal, &square, &mut clipped).unwrap();

        for pt in &clipped {
            assert!(pt.x <= 1.0e-6);
        }
        assert!(clipped.iter().any(|pt| pt.x.abs() < 1.0e-6));
        assert!(clipped.iter().any(|pt| pt.x < -0.5));
    }
}
