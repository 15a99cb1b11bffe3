use num::Bounded;

use crate::math::{Point, Real, UnitVector, Vector};
use crate::query::contact::Penetration;
use crate::query::QueryError;
use crate::shape::WorldPolygon;

/// Two axes whose overlaps differ by less than this are considered equally
/// good; the tie goes to the axis better aligned with the polygon centers.
pub const AXIS_TIE_EPSILON: Real = 1.0e-6;

/// Result of the separating-axis test between two polygons.
#[derive(Clone, Debug)]
pub enum SatStatus {
    /// The projections onto one axis do not overlap.
    Separated {
        /// Index of the separating axis in the candidate list (the first
        /// polygon's edge normals in order, then the second polygon's).
        /// Candidates past this index were never examined.
        axis: usize,
    },
    /// Every axis overlaps; carries the minimum-overlap penetration.
    Penetrating(Penetration),
}

/// Tests two polygons for overlap by projecting them onto the outward edge
/// normals of both.
///
/// Returns [`SatStatus::Separated`] as soon as one axis yields disjoint
/// projection intervals. Otherwise the axis of minimal overlap wins, with
/// its direction oriented from the second polygon toward the first; among
/// near-equal overlaps the axis most aligned with the segment between the
/// polygon origins is preferred, which keeps the normal's sign stable across
/// frames.
pub fn sat_polygon_polygon(
    g1: &WorldPolygon,
    g2: &WorldPolygon,
) -> Result<SatStatus, QueryError> {
    let toward_first = g1.origin() - g2.origin();

    let mut min_overlap = Real::max_value();
    let mut best_alignment = -Real::max_value();
    let mut best_axis = None;
    let mut axis_id = 0;

    for poly in [g1, g2] {
        for edge in poly.edges() {
            let axis = poly.edge_normal(edge)?;

            let (min1, max1) = project_onto_axis(g1.points(), &axis);
            let (min2, max2) = project_onto_axis(g2.points(), &axis);

            let overlap = max1.min(max2) - min1.max(min2);
            if overlap < 0.0 {
                return Ok(SatStatus::Separated { axis: axis_id });
            }

            // Orient the candidate before comparing so opposite normals of
            // the two polygons compete on alignment, not on sign.
            let oriented = if axis.dot(&toward_first) >= 0.0 {
                axis
            } else {
                -axis
            };
            let alignment = oriented.dot(&toward_first);

            let better = if (overlap - min_overlap).abs() <= AXIS_TIE_EPSILON {
                alignment > best_alignment
            } else {
                overlap < min_overlap
            };

            if better {
                min_overlap = overlap;
                best_alignment = alignment;
                best_axis = Some(oriented);
            }

            axis_id += 1;
        }
    }

    let normal = best_axis.ok_or(QueryError::DegenerateNumeric)?;

    Ok(SatStatus::Penetrating(Penetration {
        depth: min_overlap,
        normal,
    }))
}

fn project_onto_axis(points: &[Point], axis: &UnitVector) -> (Real, Real) {
    let mut min = Real::max_value();
    let mut max = -Real::max_value();

    for pt in points {
        let proj = pt.coords.dot(axis);
        min = min.min(proj);
        max = max.max(proj);
    }

    (min, max)
}
