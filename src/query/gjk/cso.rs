use crate::math::{Point, Vector};
use crate::shape::SupportMap;

/// Computes the support point of the Minkowski difference `g1 - g2` (the
/// Configuration Space Obstacle) toward the direction `dir`.
///
/// The CSO contains the origin if and only if the two shapes overlap.
#[inline]
pub fn cso_support_point<G1, G2>(g1: &G1, g2: &G2, dir: &Vector) -> Point
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let sup1 = g1.support_point(dir);
    let sup2 = g2.support_point(&-dir);

    Point::from(sup1 - sup2)
}
