pub mod error;
pub mod hull;
pub mod math;

pub use error::{Degeneracy, HullError, Result};
pub use hull::{convex_hull, Face};
