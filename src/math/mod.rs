//! Type aliases for the mathematical types used throughout this crate.

/// The scalar type used throughout this crate.
pub type Real = f32;

/// The default tolerance used for geometric operations.
pub const DEFAULT_EPSILON: Real = Real::EPSILON;

/// The point type.
pub type Point = na::Point2<Real>;

/// The vector type.
pub type Vector = na::Vector2<Real>;

/// The unit vector type.
pub type UnitVector = na::Unit<Vector>;

/// The rotation type.
pub type Rotation = na::Rotation2<Real>;
