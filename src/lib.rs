//! Exact arithmetic over the Eisenstein integers `ℤ[ω]`, with `ω² + ω + 1 = 0`.

mod eisenstein;
mod error;
pub mod traits;

pub use eisenstein::{EisensteinBase, EisensteinInt};
pub use error::EisensteinError;
pub use traits::IntegerPrimality;
