//! Fixed-dimension vectors with projection and rejection, for simulation and
//! games.

#[macro_use]
mod macros;

pub mod projection;
pub mod random;
pub mod vector;

pub use projection::{Decomposition, InnerProductSpace, project, reject};
pub use vector::{Vector2, Vector3, Vector4};
