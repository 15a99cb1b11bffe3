use core::cmp::Ordering;
use core::mem;

use arrayvec::ArrayVec;
use num::Bounded;

use crate::math::{Point, Real, UnitVector, Vector};
use crate::query::clip;
use crate::query::contact::{ContactManifold, Penetration};
use crate::query::QueryError;
use crate::shape::WorldPolygon;

/// Projection tolerance used to group vertices reaching the same support
/// distance, and to merge coincident contact points.
///
/// Exact float equality would miss vertices of a face that is parallel to
/// the penetration normal but rotated through arithmetic noise.
pub const SUPPORT_GROUP_EPSILON: Real = 1.0e-4;

/// The reference-face candidate of one polygon: the edge around the
/// polygon's deepest vertices whose outward normal is most parallel to the
/// penetration direction.
struct FaceCandidate {
    edge_index: usize,
    normal: UnitVector,
    closeness: Real,
}

fn reference_candidate(poly: &WorldPolygon, dir: &Vector) -> Result<FaceCandidate, QueryError> {
    let points = poly.points();

    let mut deepest = -Real::max_value();
    for pt in points {
        deepest = deepest.max(pt.coords.dot(dir));
    }

    let significant: Vec<bool> = points
        .iter()
        .map(|pt| pt.coords.dot(dir) >= deepest - SUPPORT_GROUP_EPSILON)
        .collect();

    let mut best: Option<FaceCandidate> = None;
    let mut best_dot = -Real::max_value();

    for (i, edge) in poly.edges().enumerate() {
        if !significant[edge.start] && !significant[edge.end] {
            continue;
        }

        let normal = poly.edge_normal(edge)?;
        let dot = normal.dot(dir);

        if dot > best_dot {
            best_dot = dot;
            best = Some(FaceCandidate {
                edge_index: i,
                normal,
                closeness: dot.abs(),
            });
        }
    }

    // At least one vertex reaches the deepest projection, so its incident
    // edges always produce a candidate.
    best.ok_or(QueryError::DegenerateNumeric)
}

/// Computes up to two contact points for a pair of overlapping polygons by
/// Sutherland-Hodgman clipping, given a penetration normal obtained from EPA
/// or SAT (pointing from `g2` toward `g1`).
///
/// The polygon whose candidate face is most parallel to the normal supplies
/// the reference face; the other polygon's full vertex list is clipped
/// against the faces adjacent to the reference face, then filtered against
/// the reference face itself. Coincident surviving points are merged and
/// the deepest two are kept.
pub fn contact_manifold_polygon_polygon(
    g1: &WorldPolygon,
    g2: &WorldPolygon,
    penetration: &Penetration,
) -> Result<ContactManifold, QueryError> {
    let normal = penetration.normal;

    // With the normal pointing from the second polygon toward the first,
    // each polygon's deepest vertices lie along the direction into the
    // other one: -normal for the first polygon, +normal for the second.
    let cand1 = reference_candidate(g1, &-*normal)?;
    let cand2 = reference_candidate(g2, &normal)?;

    let (reference_poly, reference, incident_poly) = if cand1.closeness > cand2.closeness {
        (g1, cand1, g2)
    } else {
        (g2, cand2, g1)
    };

    let nedges = reference_poly.num_edges();
    let prev = reference_poly.edge((reference.edge_index + nedges - 1) % nedges);
    let next = reference_poly.edge((reference.edge_index + 1) % nedges);

    let mut clipped: Vec<Point> = incident_poly.points().to_vec();
    let mut buffer = Vec::new();

    for edge in [prev, next] {
        let (edge_start, edge_end) = reference_poly.edge_vertices(edge);
        let edge_normal = reference_poly.edge_normal(edge)?;
        clip::clip_halfspace_polygon(&edge_start, &edge_end, &edge_normal, &clipped, &mut buffer)?;
        mem::swap(&mut clipped, &mut buffer);
    }

    // Keep the points on or behind the reference face.
    let ref_start = reference_poly.points()[reference.edge_index];
    let depth_of = |pt: &Point| (pt - ref_start).dot(&reference.normal);
    clipped.retain(|pt| depth_of(pt) <= 0.0);

    // Deepest points first, then merge coincident ones down to two.
    clipped.sort_by(|p, q| {
        depth_of(p)
            .partial_cmp(&depth_of(q))
            .unwrap_or(Ordering::Equal)
    });

    let mut points = ArrayVec::new();
    for pt in &clipped {
        if points.is_full() {
            break;
        }

        let distinct = points
            .iter()
            .all(|kept: &Point| (kept - pt).norm_squared() > SUPPORT_GROUP_EPSILON * SUPPORT_GROUP_EPSILON);

        if distinct {
            points.push(*pt);
        }
    }

    Ok(ContactManifold {
        normal,
        depth: penetration.depth,
        points,
    })
}
