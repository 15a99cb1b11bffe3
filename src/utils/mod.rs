//! Various unclassified geometric utilities.

pub use self::ccw_face_normal::ccw_face_normal;
pub use self::center::center;
pub use self::perp_toward::perp_toward;
pub use self::point_cloud_support_point::{
    point_cloud_support_point, point_cloud_support_point_id,
};
pub use self::triangle_contains_origin::triangle_contains_origin;

mod ccw_face_normal;
mod center;
mod perp_toward;
mod point_cloud_support_point;
mod triangle_contains_origin;
