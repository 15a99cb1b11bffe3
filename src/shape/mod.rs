//! Shapes supported by clash2d.

pub use self::polygon::{ConvexPolygon, Edge, WorldPolygon};
pub use self::support_map::SupportMap;

mod polygon;
mod support_map;
