use std::collections::VecDeque;

use slotmap::SlotMap;

use crate::error::{HullError, Result};
use crate::math::Point3;

use super::face::{assign_outside_points, Face};
use super::simplex::initial_simplex;

slotmap::new_key_type! {
    /// Identifier for a face in the hull arena.
    struct FaceKey;
}

/// Computes the convex hull of `points` as a set of outward-oriented
/// triangular faces.
///
/// `eps` is the visibility tolerance: a point within `eps` of a face's
/// plane counts as on the hull rather than outside it
/// ([`DEFAULT_EPSILON`](crate::math::DEFAULT_EPSILON) is the documented
/// reference value). Faces come back in discovery order, which is not a
/// semantic guarantee; callers needing a canonical order must sort by a
/// key of their own choosing.
///
/// # Errors
///
/// Returns [`HullError::InvalidInput`] when `points` is empty or `eps` is
/// negative or non-finite, and [`HullError::Degenerate`] when the input
/// spans no volume (all points coincident, collinear, or coplanar). No
/// partial hull is ever returned.
pub fn convex_hull(points: &[Point3], eps: f64) -> Result<Vec<Face>> {
    if points.is_empty() {
        return Err(HullError::InvalidInput("point set is empty".into()));
    }
    if !eps.is_finite() || eps < 0.0 {
        return Err(HullError::InvalidInput(format!(
            "epsilon must be finite and non-negative, got {eps}"
        )));
    }

    let [a, b, c, d] = initial_simplex(points)?;

    // The four outward faces of the seed tetrahedron: the base plus one
    // face per base edge and the apex, deduplicated by corner triple.
    let mut seed: Vec<Face> = Vec::new();
    for face in [
        Face::new(a, b, c),
        Face::new(c, d, a),
        Face::new(b, d, c),
        Face::new(a, d, b),
    ] {
        if !seed.iter().any(|f| f.same_corners(&face)) {
            seed.push(face);
        }
    }
    assign_outside_points(&mut seed, points, eps);

    let mut faces: SlotMap<FaceKey, Face> = SlotMap::with_key();
    let mut queue: VecDeque<FaceKey> = VecDeque::new();
    for face in seed {
        queue.push_back(faces.insert(face));
    }

    while let Some(key) = queue.pop_front() {
        // Queue entries are not invalidated on removal, so an entry may
        // refer to a face already absorbed by an earlier iteration.
        let Some(face) = faces.get(key) else { continue };
        let Some(furthest) = furthest_outside_point(face) else {
            continue;
        };

        // Every face the point can see must go, not just the queued one.
        let visible: Vec<FaceKey> = faces
            .iter()
            .filter(|(_, f)| f.is_visible_from(&furthest, eps))
            .map(|(k, _)| k)
            .collect();

        // Remove the visible set, pooling its orphaned outside points and
        // merging the replacement candidates with cancellation.
        let mut unclaimed: Vec<Point3> = Vec::new();
        let mut replacements: Vec<Face> = Vec::new();
        for &k in &visible {
            if let Some(removed) = faces.remove(k) {
                for candidate in removed.cone(furthest) {
                    merge_candidate(&mut replacements, candidate);
                }
                unclaimed.extend(removed.outside);
            }
        }

        assign_outside_points(&mut replacements, &unclaimed, eps);
        for face in replacements {
            queue.push_back(faces.insert(face));
        }
    }

    Ok(faces
        .into_iter()
        .map(|(_, mut face)| {
            face.outside.clear();
            face
        })
        .collect())
}

/// The owned point farthest from the face's plane, or `None` when the
/// outside set is empty.
///
/// Strict `>` comparison: the first point achieving the maximum wins.
fn furthest_outside_point(face: &Face) -> Option<Point3> {
    let mut furthest = None;
    let mut best = f64::NEG_INFINITY;
    for point in &face.outside {
        let d = face.plane_distance(point);
        if d > best {
            best = d;
            furthest = Some(*point);
        }
    }
    furthest
}

/// Adds `candidate` to the replacement set, cancelling duplicates.
///
/// A candidate matching an existing entry (as an unordered corner triple)
/// is a face interior to the visible region, generated once by each of
/// the two removed neighbors sharing its edge; both copies are dropped.
/// What survives the merge is exactly the horizon cone.
fn merge_candidate(replacements: &mut Vec<Face>, candidate: Face) {
    if let Some(at) = replacements.iter().position(|f| f.same_corners(&candidate)) {
        replacements.remove(at);
    } else {
        replacements.push(candidate);
    }
}
