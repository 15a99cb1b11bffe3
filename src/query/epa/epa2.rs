//! Two-dimensional penetration depth refinement using the Expanding Polytope
//! Algorithm.
//!
//! EPA starts from the terminal triangle left by a successful GJK run and
//! treats it as a polytope in the Minkowski difference space. It repeatedly
//! finds the polytope edge closest to the origin, queries a support point
//! along that edge's normal, and inserts it, until the polytope cannot grow
//! past the closest edge anymore. That edge then yields the penetration
//! depth and the separation normal.

use num::Bounded;

use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::query::contact::Penetration;
use crate::query::gjk::{cso_support_point, Simplex};
use crate::query::QueryError;
use crate::shape::SupportMap;
use crate::utils;

/// The convergence tolerance of the expansion loop.
///
/// When a new support point gets no farther than this from the closest edge,
/// the polytope has reached the CSO boundary and the algorithm stops.
pub const TOLERANCE: Real = 1.0e-3;

/// The maximum number of polytope expansions before EPA reports
/// [`QueryError::Stalled`].
pub const MAX_ITERATIONS: usize = 64;

/// The edge of the polytope currently closest to the origin.
struct ClosestEdge {
    /// Index of the edge's second vertex; new points are inserted there.
    insertion_index: usize,
    distance: Real,
    normal: UnitVector,
}

/// Computes the penetration depth and separation normal of two overlapping
/// shapes from the terminal simplex of a successful GJK run.
///
/// The returned normal points from `g2` toward `g1`. Fails with
/// [`QueryError::PreconditionViolated`] if the simplex is not a triangle
/// enclosing the origin, and with [`QueryError::Stalled`] if the polytope
/// stops making progress (duplicate support points or iteration overrun).
pub fn penetration_depth_support_map_support_map<G1, G2>(
    simplex: &Simplex,
    g1: &G1,
    g2: &G2,
) -> Result<Penetration, QueryError>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let pts = simplex.points();

    if pts.len() != 3 || !utils::triangle_contains_origin(&pts[0], &pts[1], &pts[2]) {
        return Err(QueryError::PreconditionViolated);
    }

    let mut polytope: Vec<Point> = pts.to_vec();

    for _ in 0..MAX_ITERATIONS {
        let closest = closest_edge(&polytope)?;

        let support = cso_support_point(g1, g2, &closest.normal);
        let support_distance = closest.normal.dot(&support.coords);

        if (support_distance - closest.distance).abs() <= TOLERANCE {
            // The polytope cannot grow past the closest edge: it lies on the
            // CSO boundary. Flip the outward edge normal so the result
            // points from the second shape toward the first.
            let normal = UnitVector::new_unchecked(-*closest.normal);

            return Ok(Penetration {
                depth: closest.distance + TOLERANCE,
                normal,
            });
        }

        if polytope
            .iter()
            .any(|pt| (pt - support).norm_squared() <= DEFAULT_EPSILON)
        {
            // The support function keeps returning a known vertex, so the
            // polytope can never expand enough to converge.
            log::debug!("EPA stalled on a duplicate support point");
            return Err(QueryError::Stalled);
        }

        polytope.insert(closest.insertion_index, support);
    }

    log::debug!("EPA did not converge within {MAX_ITERATIONS} iterations");
    Err(QueryError::Stalled)
}

/// Finds the polytope edge with the smallest non-negative distance from the
/// origin, treating the vertex list as a closed cyclic polygon.
fn closest_edge(polytope: &[Point]) -> Result<ClosestEdge, QueryError> {
    let mut best: Option<ClosestEdge> = None;
    let mut min_distance = Real::max_value();

    for i in 0..polytope.len() {
        let j = (i + 1) % polytope.len();
        let vi = polytope[i];
        let edge = polytope[j] - vi;

        let Some(mut normal) = UnitVector::try_new(Vector::new(edge.y, -edge.x), DEFAULT_EPSILON)
        else {
            // Zero-length edge: skip it.
            continue;
        };

        let mut distance = normal.dot(&vi.coords);

        // The polytope winding is not normalized, so orient the normal away
        // from the origin.
        if distance < 0.0 {
            distance = -distance;
            normal = -normal;
        }

        if distance < min_distance {
            min_distance = distance;
            best = Some(ClosestEdge {
                insertion_index: j,
                distance,
                normal,
            });
        }
    }

    best.ok_or(QueryError::DegenerateNumeric)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::gjk::{self, GjkStatus};
    use crate::shape::ConvexPolygon;
    use approx::assert_relative_eq;

    #[test]
    fn epa_rejects_an_empty_simplex() {
        let a = ConvexPolygon::rectangle(Point::origin(), 0.0, Vector::new(1.0, 1.0)).to_world();
        let b = a.clone();
        let simplex = Simplex::new();

        assert_eq!(
            penetration_depth_support_map_support_map(&simplex, &a, &b).unwrap_err(),
            QueryError::PreconditionViolated
        );
    }

    #[test]
    fn overlapping_squares_depth_and_normal() {
        let a = ConvexPolygon::rectangle(Point::origin(), 0.0, Vector::new(1.0, 1.0)).to_world();
        let b =
            ConvexPolygon::rectangle(Point::new(1.0, 0.0), 0.0, Vector::new(1.0, 1.0)).to_world();

        let GjkStatus::Intersecting(simplex) =
            gjk::intersection_test_support_map_support_map(&a, &b)
        else {
            panic!("GJK did not detect the overlap");
        };

        let pen = penetration_depth_support_map_support_map(&simplex, &a, &b).unwrap();
        assert_relative_eq!(pen.depth, 1.0, epsilon = 2.0 * TOLERANCE);
        // The normal points from the second square toward the first.
        assert_relative_eq!(*pen.normal, Vector::new(-1.0, 0.0), epsilon = 1.0e-4);
    }
}
