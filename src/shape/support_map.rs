//! Traits for support mapping based shapes.

use crate::math::{Point, Vector};

/// Trait of convex shapes representable by a support mapping function.
///
/// A support function associates a direction to the shape point which
/// maximizes their dot product.
pub trait SupportMap {
    /// Evaluates the support function of this shape.
    ///
    /// `dir` does not need to be normalized. When several points reach the
    /// maximal projection the first one in storage order is returned, so
    /// the mapping is deterministic.
    fn support_point(&self, dir: &Vector) -> Point;
}
