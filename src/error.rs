/*
    Errors
*/

use std::error::Error;
use std::fmt;

/// The error type shared by every fallible operation in this crate.
///
/// Numeric overflow is never an error: additions wrap, shifts past the
/// width produce zeros, float operations produce infinities or NaN.
/// Only the conditions below fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArithError {
    /// Integer division or remainder with a zero divisor.
    DivideByZero,

    /// An argument outside the domain of the operation, e.g. a bit range
    /// that leaves the width of the value, or a narrowing cast whose
    /// source value does not fit the destination.
    DomainError(String),

    /// The operation is declared but intentionally left unimplemented
    /// (valid interval arithmetic).
    NotImplemented(&'static str),
}

impl fmt::Display for ArithError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithError::DivideByZero => write!(f, "division by zero"),
            ArithError::DomainError(reason) => write!(f, "domain error: {}", reason),
            ArithError::NotImplemented(what) => write!(f, "{} is not implemented", what),
        }
    }
}

impl Error for ArithError {}
