use thiserror::Error;

/// Errors raised by the vector math functions
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// A zero vector, or one with a non-finite component, was given to an
    /// operation that needs a direction
    #[error("degenerate vector in {operation}: zero length or non-finite component")]
    DegenerateVector {
        /// Name of the operation that rejected the input
        operation: &'static str,
    },
}
