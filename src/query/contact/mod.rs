//! Contact manifold generation for polygon pairs.

pub use self::contact::{ContactManifold, Penetration};
pub use self::contact_polygon_polygon::{
    contact_manifold_polygon_polygon, SUPPORT_GROUP_EPSILON,
};

mod contact;
mod contact_polygon_polygon;
