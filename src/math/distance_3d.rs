use super::{Point3, Vector3};

/// Scalar triple product `v1 . (v2 x v3)`.
///
/// Equals the signed volume of the parallelepiped spanned by the three
/// vectors; the sign encodes orientation (right-handed positive).
#[must_use]
pub fn triple_product(v1: &Vector3, v2: &Vector3, v3: &Vector3) -> f64 {
    v1.dot(&v2.cross(v3))
}

/// Euclidean distance between two points.
#[must_use]
pub fn point_distance(p1: &Point3, p2: &Point3) -> f64 {
    (p2 - p1).norm()
}

/// Distance from `point` to the infinite line through `l1` and `l2`.
///
/// The line must be non-degenerate: when `l1 == l2` the division yields a
/// non-finite value, and the caller is responsible for guarding against
/// that before calling.
#[must_use]
pub fn point_line_distance(l1: &Point3, l2: &Point3, point: &Point3) -> f64 {
    let line = l2 - l1;
    line.cross(&(point - l1)).norm() / line.norm()
}

/// Signed distance from `point` to the plane through `a`, `b`, `c`.
///
/// Positive on the side of the plane normal `(b - a) x (c - a)`, negative
/// on the other side. The plane must be non-degenerate: when `a`, `b`, `c`
/// are collinear the denominator is zero and the result is non-finite;
/// the caller is responsible for guarding against that before calling.
#[must_use]
pub fn point_plane_distance(a: &Point3, b: &Point3, c: &Point3, point: &Point3) -> f64 {
    let u = b - a;
    let v = c - a;
    triple_product(&u, &v, &(point - a)) / u.cross(&v).norm()
}
