pub mod error;
pub mod tolerance;

pub use error::{AlignError, Result};
