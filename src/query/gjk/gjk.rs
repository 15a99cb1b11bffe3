//! The Gilbert-Johnson-Keerthi intersection algorithm.
//!
//! GJK works on the Minkowski difference (CSO) of the two shapes: the shapes
//! overlap if and only if the CSO contains the origin. The algorithm evolves
//! a simplex of at most three CSO support points until either the simplex
//! encloses the origin (intersection) or a support point fails to get past
//! the origin along the current search direction (separation).

use crate::math::{Point, Vector, DEFAULT_EPSILON};
use crate::query::gjk::{cso_support_point, Simplex};
use crate::query::QueryError;
use crate::shape::SupportMap;
use crate::utils;

/// The maximum number of simplex evolutions before GJK gives up.
///
/// On well-formed convex polygons the simplex converges in a handful of
/// iterations; the cap only guards against numerically degenerate inputs.
pub const MAX_ITERATIONS: usize = 25;

/// Terminal state of a GJK run.
#[derive(Clone, Debug)]
pub enum GjkStatus {
    /// The shapes overlap. The terminal simplex is a triangle enclosing the
    /// origin of the Minkowski difference, ready to seed EPA.
    Intersecting(Simplex),
    /// A support point failed to reach past the origin: the shapes are
    /// separated.
    Separated,
    /// The simplex did not converge within [`MAX_ITERATIONS`].
    ///
    /// Public pipelines report this as "no collision", but it is kept
    /// distinguishable from [`GjkStatus::Separated`] for diagnostics.
    IterationLimitExceeded,
}

impl GjkStatus {
    /// Whether this status proves an intersection.
    #[inline]
    pub fn is_intersecting(&self) -> bool {
        matches!(self, GjkStatus::Intersecting(_))
    }

    /// Extracts the terminal simplex, mapping the iteration-limit case to
    /// [`QueryError::IterationLimitExceeded`] for callers that must not
    /// confuse it with a genuine separation.
    pub fn into_terminal_simplex(self) -> Result<Option<Simplex>, QueryError> {
        match self {
            GjkStatus::Intersecting(simplex) => Ok(Some(simplex)),
            GjkStatus::Separated => Ok(None),
            GjkStatus::IterationLimitExceeded => Err(QueryError::IterationLimitExceeded),
        }
    }
}

enum SimplexEvolution {
    TowardOrigin(Vector),
    ContainsOrigin,
}

/// Tests whether two support-mapped shapes intersect.
///
/// The simplex is seeded with a support point along an arbitrary direction
/// (`+x`); each iteration fetches a new support point along the current
/// search direction, exits early with [`GjkStatus::Separated`] if that point
/// does not reach past the origin, and otherwise lets the simplex evolve
/// toward the origin.
pub fn intersection_test_support_map_support_map<G1, G2>(g1: &G1, g2: &G2) -> GjkStatus
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let init = cso_support_point(g1, g2, &Vector::x());
    let mut simplex = Simplex::new();
    simplex.push(init);

    let mut dir = -init.coords;

    for _ in 0..MAX_ITERATIONS {
        if dir.norm_squared() < DEFAULT_EPSILON {
            // The origin coincides with the only simplex vertex: the CSO
            // boundary passes through the origin. Restart toward +x so the
            // simplex can still grow to a triangle.
            dir = Vector::x();
        }

        let support = cso_support_point(g1, g2, &dir);

        if support.coords.dot(&dir) < 0.0 {
            return GjkStatus::Separated;
        }

        simplex.push(support);

        match evolve_simplex(&mut simplex) {
            SimplexEvolution::TowardOrigin(new_dir) => dir = new_dir,
            SimplexEvolution::ContainsOrigin => return GjkStatus::Intersecting(simplex),
        }
    }

    GjkStatus::IterationLimitExceeded
}

/// Reduces the simplex to its feature closest to the origin and computes the
/// next search direction.
fn evolve_simplex(simplex: &mut Simplex) -> SimplexEvolution {
    match simplex.len() {
        2 => SimplexEvolution::TowardOrigin(segment_toward_origin(simplex)),
        3 => {
            let pts = simplex.points();

            if utils::triangle_contains_origin(&pts[0], &pts[1], &pts[2]) {
                return SimplexEvolution::ContainsOrigin;
            }

            simplex.remove_oldest();
            SimplexEvolution::TowardOrigin(segment_toward_origin(simplex))
        }
        _ => unreachable!("the simplex always holds 2 or 3 points after an insertion"),
    }
}

/// Voronoi-region case analysis for a 1-simplex `[a, b]` (`b` newest).
///
/// If the origin projects past an endpoint the far point is dropped and the
/// direction points from the survivor toward the origin; otherwise the
/// direction is the segment perpendicular facing the origin, obtained with
/// the double triple product.
fn segment_toward_origin(simplex: &mut Simplex) -> Vector {
    let a: Point = simplex.points()[0];
    let b: Point = simplex.points()[1];
    let ab = b - a;
    let ao = -a.coords;
    let t = ab.dot(&ao);

    if t <= 0.0 {
        // Voronoi region of `a`.
        simplex.remove(1);
        ao
    } else if t >= ab.norm_squared() {
        // Voronoi region of `b`.
        simplex.remove(0);
        -b.coords
    } else {
        utils::perp_toward(&ab, &ao)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point;
    use crate::shape::ConvexPolygon;

    #[test]
    fn separated_squares_exit_early() {
        let a = ConvexPolygon::rectangle(Point::origin(), 0.0, Vector::new(1.0, 1.0)).to_world();
        let b =
            ConvexPolygon::rectangle(Point::new(3.0, 0.0), 0.0, Vector::new(1.0, 1.0)).to_world();

        assert!(matches!(
            intersection_test_support_map_support_map(&a, &b),
            GjkStatus::Separated
        ));
    }

    #[test]
    fn intersecting_squares_yield_a_triangle_simplex() {
        let a = ConvexPolygon::rectangle(Point::origin(), 0.0, Vector::new(1.0, 1.0)).to_world();
        let b =
            ConvexPolygon::rectangle(Point::new(1.0, 0.0), 0.0, Vector::new(1.0, 1.0)).to_world();

        match intersection_test_support_map_support_map(&a, &b) {
            GjkStatus::Intersecting(simplex) => {
                assert_eq!(simplex.len(), 3);
                let pts = simplex.points();
                assert!(utils::triangle_contains_origin(&pts[0], &pts[1], &pts[2]));
            }
            status => panic!("expected an intersection, got {status:?}"),
        }
    }
}
