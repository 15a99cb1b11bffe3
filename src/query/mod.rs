//! Non-persistent pairwise queries between convex polygons.
//!
//! The functions at this level take shape descriptions, compute their world
//! geometry, and run the full query pipeline. The algorithm-level building
//! blocks they are assembled from live in the submodules and are re-exported
//! through [`details`].

pub use self::contact::{ContactManifold, Penetration};
pub use self::error::QueryError;

use self::gjk::GjkStatus;
use self::sat::SatStatus;
use crate::shape::ConvexPolygon;

pub mod clip;
pub mod contact;
pub mod epa;
mod error;
pub mod gjk;
pub mod sat;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::clip::{clip_halfspace_polygon, line_line_intersection};
    pub use super::contact::{contact_manifold_polygon_polygon, SUPPORT_GROUP_EPSILON};
    pub use super::epa::penetration_depth_support_map_support_map;
    pub use super::gjk::{
        cso_support_point, intersection_test_support_map_support_map, GjkStatus, Simplex,
    };
    pub use super::sat::{sat_polygon_polygon, SatStatus, AXIS_TIE_EPSILON};
}

/// Tests whether two polygons intersect, using GJK on their world geometry.
///
/// A run that exhausts the GJK iteration limit is reported as
/// non-intersecting, with a debug log entry. Callers that need to tell the
/// two apart should use
/// [`details::intersection_test_support_map_support_map`] directly.
pub fn intersection_test(g1: &ConvexPolygon, g2: &ConvexPolygon) -> bool {
    let w1 = g1.to_world();
    let w2 = g2.to_world();

    match gjk::intersection_test_support_map_support_map(&w1, &w2) {
        GjkStatus::Intersecting(_) => true,
        GjkStatus::Separated => false,
        GjkStatus::IterationLimitExceeded => {
            log::debug!("GJK hit its iteration limit, reporting no intersection");
            false
        }
    }
}

/// Computes the contact manifold between two polygons, or `None` if they do
/// not intersect.
///
/// Runs GJK, refines the terminal simplex with EPA, then clips the incident
/// face against the reference face to extract up to two contact points. The
/// manifold's normal points from `g2` toward `g1`.
pub fn contact(
    g1: &ConvexPolygon,
    g2: &ConvexPolygon,
) -> Result<Option<ContactManifold>, QueryError> {
    let w1 = g1.to_world();
    let w2 = g2.to_world();

    let simplex = match gjk::intersection_test_support_map_support_map(&w1, &w2) {
        GjkStatus::Intersecting(simplex) => simplex,
        GjkStatus::Separated => return Ok(None),
        GjkStatus::IterationLimitExceeded => {
            log::debug!("GJK hit its iteration limit, reporting no contact");
            return Ok(None);
        }
    };

    let penetration = epa::penetration_depth_support_map_support_map(&simplex, &w1, &w2)?;
    let manifold = contact::contact_manifold_polygon_polygon(&w1, &w2, &penetration)?;
    Ok(Some(manifold))
}

/// Computes the penetration between two polygons with the separating-axis
/// test, or `None` if some edge normal separates them.
///
/// This runs independently of [`contact`]: it examines every edge normal of
/// both polygons instead of walking a simplex, which makes it a useful
/// cross-check for the GJK/EPA pipeline. The normal points from `g2` toward
/// `g1`.
pub fn penetration(
    g1: &ConvexPolygon,
    g2: &ConvexPolygon,
) -> Result<Option<Penetration>, QueryError> {
    let w1 = g1.to_world();
    let w2 = g2.to_world();

    match sat::sat_polygon_polygon(&w1, &w2)? {
        SatStatus::Separated { axis } => {
            log::trace!("separating axis found at candidate {}", axis);
            Ok(None)
        }
        SatStatus::Penetrating(penetration) => Ok(Some(penetration)),
    }
}
