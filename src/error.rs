use thiserror::Error;

/// Errors raised by the Euclidean operations on Eisenstein integers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum EisensteinError {
    /// The divisor is the zero element (norm 0)
    #[error("attempt to divide by the zero element")]
    DivisionByZero,
}
