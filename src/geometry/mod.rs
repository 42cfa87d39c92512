//! Geometry primitives: vectors and polynomial root solvers (§4.1, §3 Vector2).

mod roots;
mod vector2;

pub use roots::{solve_cubic, solve_quadratic, Roots2, Roots3};
pub use vector2::Vector2;
