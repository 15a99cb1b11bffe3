//! Application of the Separating-Axis-Theorem to the overlap test of two
//! polygons.

pub use self::sat_polygon_polygon::{sat_polygon_polygon, SatStatus, AXIS_TIE_EPSILON};

mod sat_polygon_polygon;
