//! Penetration depth queries using the Expanding Polytope Algorithm.

pub use self::epa2::{penetration_depth_support_map_support_map, MAX_ITERATIONS, TOLERANCE};

mod epa2;
