//! The Gilbert-Johnson-Keerthi intersection algorithm.

pub use self::cso::cso_support_point;
pub use self::gjk::{intersection_test_support_map_support_map, GjkStatus, MAX_ITERATIONS};
pub use self::simplex::Simplex;

mod cso;
mod gjk;
mod simplex;
