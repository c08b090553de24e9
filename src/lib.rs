pub mod error;
pub mod math;
pub mod path;

pub use error::{GeomkitError, MathError, PathError, Result};
