pub use nalgebra::{matrix, vector};
pub use num_traits::{Float, One, Zero};

mod aabb;
mod grid_float;
pub mod indexing;

pub use aabb::*;
pub use grid_float::*;

/// Row, column.
pub type Coord = nalgebra::Vector2<i32>;

/// Column 0 holds the min corner, column 1 the max corner.
pub type Bounds = nalgebra::Matrix2<i32>;
