use arrayvec::ArrayVec;

use crate::math::{Point, Real, UnitVector};

/// A penetration between two overlapping convex shapes.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Penetration {
    /// The minimal translation distance separating the two shapes.
    ///
    /// Always non-negative.
    pub depth: Real,

    /// The separation direction, pointing from the second shape toward the
    /// first.
    pub normal: UnitVector,
}

impl Penetration {
    /// Returns the penetration seen from the swapped argument order: same
    /// depth, negated normal.
    #[inline]
    pub fn flipped(self) -> Self {
        Penetration {
            depth: self.depth,
            normal: -self.normal,
        }
    }
}

/// A contact manifold between two convex polygons.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ContactManifold {
    /// The separation direction, pointing from the second polygon toward the
    /// first.
    pub normal: UnitVector,

    /// The penetration depth along `normal`. Always non-negative.
    pub depth: Real,

    /// Up to two world-space contact points lying on or inside both
    /// polygons.
    pub points: ArrayVec<Point, 2>,
}
