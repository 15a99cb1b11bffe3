use crate::math::{Point, Vector};

/// Computes the index of the support point of a cloud of points.
///
/// When several points reach the maximal projection the first one in
/// storage order wins, so the result is deterministic even when `dir` is
/// perpendicular to an edge.
#[inline]
pub fn point_cloud_support_point_id(dir: &Vector, points: &[Point]) -> usize {
    let mut best_pt = 0;
    let mut best_dot = points[0].coords.dot(dir);

    for i in 1..points.len() {
        let p = &points[i];
        let dot = p.coords.dot(dir);

        if dot > best_dot {
            best_dot = dot;
            best_pt = i;
        }
    }

    best_pt
}

/// Computes the support point of a cloud of points.
#[inline]
pub fn point_cloud_support_point(dir: &Vector, points: &[Point]) -> Point {
    points[point_cloud_support_point_id(dir, points)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn support_point_tie_break_keeps_first() {
        let points = [
            Point::new(1.0, -1.0),
            Point::new(1.0, 1.0),
            Point::new(-1.0, 1.0),
            Point::new(-1.0, -1.0),
        ];

        // The direction is perpendicular to the right edge: two vertices tie.
        assert_eq!(point_cloud_support_point_id(&Vector::new(1.0, 0.0), &points), 0);
        assert_eq!(point_cloud_support_point_id(&Vector::new(0.0, 1.0), &points), 1);
    }
}
