use crate::math::distance_3d::point_plane_distance;
use crate::math::{Point3, Vector3};

/// An oriented triangular face of the (possibly incomplete) hull.
///
/// The corners `(p1, p2, p3)` define the plane; the outward normal is
/// `(p2 - p1) x (p3 - p1)`. Each face owns an "outside set": input points
/// not yet enclosed by the hull, attributed to this face because it is the
/// first face they are visible from.
#[derive(Debug, Clone)]
pub struct Face {
    corners: [Point3; 3],
    pub(crate) outside: Vec<Point3>,
}

impl Face {
    pub(crate) fn new(p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self {
            corners: [p1, p2, p3],
            outside: Vec::new(),
        }
    }

    /// The three corners in orientation order.
    #[must_use]
    pub fn corners(&self) -> &[Point3; 3] {
        &self.corners
    }

    /// Outward normal `(p2 - p1) x (p3 - p1)` (not normalized).
    #[must_use]
    pub fn normal(&self) -> Vector3 {
        let [p1, p2, p3] = &self.corners;
        (p2 - p1).cross(&(p3 - p1))
    }

    /// Signed distance from `point` to this face's plane.
    ///
    /// Positive on the outward side.
    #[must_use]
    pub fn plane_distance(&self, point: &Point3) -> f64 {
        let [p1, p2, p3] = &self.corners;
        point_plane_distance(p1, p2, p3, point)
    }

    /// Whether `point` lies strictly outside this face's plane.
    ///
    /// Points within `eps` of the plane count as on the hull, not outside.
    #[must_use]
    pub fn is_visible_from(&self, point: &Point3, eps: f64) -> bool {
        self.plane_distance(point) > eps
    }

    /// Whether `point` is one of this face's corners (exact value equality).
    #[must_use]
    pub fn has_corner(&self, point: &Point3) -> bool {
        self.corners.contains(point)
    }

    /// Whether both faces have the same corners as an unordered triple.
    ///
    /// Rotations and reflections of the corner order compare equal. The
    /// comparison is exact on coordinate values; no tolerance and no
    /// hashing of floats.
    #[must_use]
    pub fn same_corners(&self, other: &Face) -> bool {
        self.corners.iter().all(|c| other.has_corner(c))
            && other.corners.iter().all(|c| self.has_corner(c))
    }

    /// The three candidate faces replacing this one when `apex` is absorbed.
    ///
    /// Each candidate pairs one edge with the apex, reversed so that the
    /// new face inherits this face's winding and its normal keeps pointing
    /// away from the hull interior.
    pub(crate) fn cone(&self, apex: Point3) -> [Face; 3] {
        let [p1, p2, p3] = self.corners;
        [
            Face::new(p2, apex, p1),
            Face::new(p3, apex, p2),
            Face::new(p1, apex, p3),
        ]
    }
}

/// Distributes `points` among the outside sets of `faces`.
///
/// Faces are scanned in slice order and a point goes to the first face it
/// is visible from, so every point has at most one owner. A face never
/// owns one of its own corners.
pub(crate) fn assign_outside_points(faces: &mut [Face], points: &[Point3], eps: f64) {
    for point in points {
        for face in faces.iter_mut() {
            if face.has_corner(point) {
                continue;
            }
            if face.is_visible_from(point, eps) {
                face.outside.push(*point);
                break;
            }
        }
    }
}
