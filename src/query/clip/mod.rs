//! Polygon clipping primitives.

pub use self::clip_halfspace_polygon::{clip_halfspace_polygon, line_line_intersection};

mod clip_halfspace_polygon;
