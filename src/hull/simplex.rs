use crate::error::{Degeneracy, Result};
use crate::math::distance_3d::{point_distance, point_line_distance, point_plane_distance};
use crate::math::Point3;

/// Selects four input points forming a non-degenerate tetrahedron to seed
/// the hull.
///
/// Returns `[p1, p2, p3, apex]` where the base triangle `(p1, p2, p3)` is
/// wound so its outward normal faces away from the apex. The base edge is
/// the widest-separated pair among the six axis-extreme points, the third
/// base point is the extreme farthest from that edge's line, and the apex
/// is the input point with the maximum *signed* distance from the base
/// plane (when that lands on the positive side, the base winding is
/// swapped instead of the sign). When no point lies on the positive side
/// the most negative point is the apex; it already faces the base's
/// winding, so no swap is needed.
///
/// # Errors
///
/// Returns [`Degeneracy`] when the input spans no volume: all points
/// coincident, collinear, or coplanar. Non-finite distances from a
/// degenerate base are classified the same way.
pub(crate) fn initial_simplex(points: &[Point3]) -> Result<[Point3; 4]> {
    let extremes = extreme_points(points);

    // Widest-separated pair of extremes forms the base edge.
    let mut p1 = extremes[0];
    let mut p2 = extremes[0];
    let mut best = f64::NEG_INFINITY;
    for a in &extremes {
        for b in &extremes {
            let d = point_distance(a, b);
            if d > best {
                best = d;
                p1 = *a;
                p2 = *b;
            }
        }
    }
    // The extremes bound every coordinate, so a zero diameter across them
    // means the whole input coincides.
    if best <= 0.0 {
        return Err(Degeneracy::SinglePoint.into());
    }

    // Extreme point farthest from the base line.
    let mut p3 = extremes[0];
    let mut best = f64::NEG_INFINITY;
    for e in &extremes {
        let d = point_line_distance(&p1, &p2, e);
        if d > best {
            best = d;
            p3 = *e;
        }
    }
    if best <= 0.0 {
        return Err(Degeneracy::Collinear.into());
    }

    // Input point farthest from the base plane, preferring the maximum
    // signed distance. The base corners themselves score 0, so when the
    // extreme-point triangle happens to be wound outward every other
    // point sits on the non-positive side and the maximum stays at 0; in
    // that case the most negative point supplies the apex, keeping the
    // selection independent of input order.
    let mut above = points[0];
    let mut best_above = f64::NEG_INFINITY;
    let mut below = points[0];
    let mut best_below = f64::INFINITY;
    for point in points {
        let d = point_plane_distance(&p1, &p2, &p3, point);
        if d > best_above {
            best_above = d;
            above = *point;
        }
        if d < best_below {
            best_below = d;
            below = *point;
        }
    }

    if best_above > 0.0 {
        // Apex on the positive side: swap the base winding away from it.
        Ok([p1, p3, p2, above])
    } else if best_below < 0.0 {
        Ok([p1, p2, p3, below])
    } else {
        // Nothing strictly off the base plane (non-finite distances from
        // broken inputs land here too).
        Err(Degeneracy::Coplanar.into())
    }
}

/// The six axis-extreme points in a single scan.
///
/// Order: min x, max x, min y, max y, min z, max z. Ties resolve
/// last-seen-wins (`<=` for minima, `>=` for maxima) so the selection is
/// reproducible for any fixed input order.
fn extreme_points(points: &[Point3]) -> [Point3; 6] {
    let mut min_x = points[0];
    let mut max_x = points[0];
    let mut min_y = points[0];
    let mut max_y = points[0];
    let mut min_z = points[0];
    let mut max_z = points[0];

    for point in points {
        if point.x <= min_x.x {
            min_x = *point;
        }
        if point.x >= max_x.x {
            max_x = *point;
        }
        if point.y <= min_y.y {
            min_y = *point;
        }
        if point.y >= max_y.y {
            max_y = *point;
        }
        if point.z <= min_z.z {
            min_z = *point;
        }
        if point.z >= max_z.z {
            max_z = *point;
        }
    }

    [min_x, max_x, min_y, max_y, min_z, max_z]
}
