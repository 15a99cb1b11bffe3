use arrayvec::ArrayVec;

use crate::math::Point;

/// An ordered set of at most three points of the Minkowski difference.
///
/// The simplex only lives for the duration of one GJK call; on a successful
/// intersection it is handed to EPA as the seed of the expanding polytope.
#[derive(Clone, Debug, Default)]
pub struct Simplex {
    vertices: ArrayVec<Point, 3>,
}

impl Simplex {
    /// Creates a new empty simplex.
    pub fn new() -> Self {
        Simplex::default()
    }

    /// Appends a point to this simplex.
    ///
    /// Panics if the simplex already holds three points.
    #[inline]
    pub fn push(&mut self, pt: Point) {
        self.vertices.push(pt);
    }

    /// Removes the oldest point of this simplex.
    #[inline]
    pub fn remove_oldest(&mut self) {
        let _ = self.vertices.remove(0);
    }

    /// Removes the point at index `i`.
    #[inline]
    pub fn remove(&mut self, i: usize) {
        let _ = self.vertices.remove(i);
    }

    /// The points of this simplex, oldest first.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.vertices
    }

    /// The number of points on this simplex.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether this simplex holds no point.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
