//! Error types for Reed-Solomon encoding

use thiserror::Error;

/// Errors raised by field, polynomial and encoder operations.
///
/// None of these are caused by the data being encoded: any byte is a valid
/// field element. They all indicate a caller supplying parameters the QR
/// standard never asks for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsError {
    /// Fewer than two error correction bytes were requested
    #[error("Invalid error correction byte count {0}: at least 2 are required")]
    InvalidEcByteCount(usize),

    /// Field division with a zero divisor
    #[error("Division by zero in GF(2^8)")]
    DivisionByZero,

    /// Polynomial remainder with the zero polynomial as denominator
    #[error("Polynomial remainder by zero")]
    RemainderByZero,

    /// Polynomial does not fit in the requested number of bytes
    #[error("Polynomial with {terms} terms does not fit in {count} bytes")]
    TooManyTerms { terms: usize, count: usize },
}

/// Type alias for Result with RsError
pub type RsResult<T> = Result<T, RsError>;
