pub mod distance_3d;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Reference tolerance for visibility tests.
///
/// Points within this signed distance of a face's plane are treated as
/// lying on the hull, not outside it. Callers of
/// [`convex_hull`](crate::hull::convex_hull) may pass any non-negative
/// tolerance; this is the documented default.
pub const DEFAULT_EPSILON: f64 = 1e-5;
