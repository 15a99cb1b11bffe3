use crate::math::{Point, Real, Rotation, UnitVector, Vector};
use crate::query::QueryError;
use crate::shape::SupportMap;
use crate::utils;

/// A 2D convex polygon positioned in the world by a translation and a rotation.
///
/// The vertices are expressed in local space and must describe a
/// counter-clockwise, non-self-intersecting convex polyline. Convexity and
/// winding are the caller's responsibility and are not checked; only the
/// vertex count is ([`QueryError::InvalidGeometry`] if fewer than three).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct ConvexPolygon {
    origin: Point,
    rotation: Real,
    points: Vec<Point>,
}

impl ConvexPolygon {
    /// Creates a new convex polygon from its world translation, its rotation
    /// (in radians, applied about the local centroid), and its local vertices.
    pub fn new(origin: Point, rotation: Real, points: Vec<Point>) -> Result<Self, QueryError> {
        if points.len() < 3 {
            return Err(QueryError::InvalidGeometry);
        }

        Ok(ConvexPolygon {
            origin,
            rotation,
            points,
        })
    }

    /// Creates an axis-aligned rectangle from its half-extents.
    ///
    /// The first vertex is the bottom-right corner, so the first edge is the
    /// right face.
    pub fn rectangle(origin: Point, rotation: Real, half_extents: Vector) -> Self {
        let hx = half_extents.x;
        let hy = half_extents.y;

        ConvexPolygon {
            origin,
            rotation,
            points: vec![
                Point::new(hx, -hy),
                Point::new(hx, hy),
                Point::new(-hx, hy),
                Point::new(-hx, -hy),
            ],
        }
    }

    /// Creates a regular polygon with `nvertices` vertices inscribed in the
    /// circle of the given `radius`.
    pub fn regular(
        origin: Point,
        rotation: Real,
        nvertices: usize,
        radius: Real,
    ) -> Result<Self, QueryError> {
        if nvertices < 3 {
            return Err(QueryError::InvalidGeometry);
        }

        let step = core::f32::consts::TAU / nvertices as Real;
        let points = (0..nvertices)
            .map(|i| {
                let angle = step * i as Real;
                Point::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect();

        Ok(ConvexPolygon {
            origin,
            rotation,
            points,
        })
    }

    /// The world translation of this polygon.
    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// The rotation of this polygon, in radians.
    #[inline]
    pub fn rotation(&self) -> Real {
        self.rotation
    }

    /// The local-space vertices of this polygon.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Computes the world-space view of this polygon.
    ///
    /// The rotation is applied about the local centroid, then the result is
    /// translated by the origin. Nothing is cached across queries.
    pub fn to_world(&self) -> WorldPolygon {
        let local_centroid = utils::center(&self.points);
        let rot = Rotation::new(self.rotation);
        let shift = self.origin.coords + local_centroid.coords;

        let points = self
            .points
            .iter()
            .map(|pt| Point::from(shift + rot * (pt - local_centroid)))
            .collect();

        WorldPolygon {
            origin: self.origin,
            centroid: Point::from(shift),
            points,
        }
    }
}

/// An edge of a polygon, stored as indices into its vertex array.
///
/// This is a view: it owns no geometry and stays valid for as long as the
/// vertex array it was derived from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    /// Index of the edge's first vertex.
    pub start: usize,
    /// Index of the edge's second vertex.
    pub end: usize,
}

/// The world-space view of a [`ConvexPolygon`]: transformed vertices, their
/// centroid, and the world origin the polygon was placed at.
#[derive(Clone, Debug)]
pub struct WorldPolygon {
    origin: Point,
    centroid: Point,
    points: Vec<Point>,
}

impl WorldPolygon {
    /// The world-space vertices of this polygon.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The world translation this polygon was placed at.
    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// The world-space centroid of this polygon.
    #[inline]
    pub fn centroid(&self) -> Point {
        self.centroid
    }

    /// The number of edges of this polygon (equal to its vertex count).
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.points.len()
    }

    /// The `i`-th edge of this polygon, with wrap-around for the last one.
    #[inline]
    pub fn edge(&self, i: usize) -> Edge {
        Edge {
            start: i,
            end: (i + 1) % self.points.len(),
        }
    }

    /// Iterates through the edges of this polygon in vertex order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = Edge> + '_ {
        (0..self.points.len()).map(move |i| self.edge(i))
    }

    /// The two endpoints of the given edge.
    #[inline]
    pub fn edge_vertices(&self, edge: Edge) -> (Point, Point) {
        (self.points[edge.start], self.points[edge.end])
    }

    /// The outward unit normal of the given edge, derived from the
    /// counter-clockwise winding.
    pub fn edge_normal(&self, edge: Edge) -> Result<UnitVector, QueryError> {
        utils::ccw_face_normal([&self.points[edge.start], &self.points[edge.end]])
            .ok_or(QueryError::DegenerateNumeric)
    }

    /// Tests whether `pt` lies inside this polygon, within `tolerance` of its
    /// boundary.
    pub fn contains_point(&self, pt: &Point, tolerance: Real) -> bool {
        self.edges().all(|edge| match self.edge_normal(edge) {
            Ok(normal) => (pt - self.points[edge.start]).dot(&normal) <= tolerance,
            // A degenerate edge constrains nothing.
            Err(_) => true,
        })
    }
}

impl SupportMap for WorldPolygon {
    #[inline]
    fn support_point(&self, dir: &Vector) -> Point {
        utils::point_cloud_support_point(dir, &self.points)
    }
}
