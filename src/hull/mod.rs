mod engine;
mod face;
mod simplex;

pub use engine::convex_hull;
pub use face::Face;
