//! Error types for proof generation and verification
//!
//! The constraint system itself has a single failure mode: a witness either
//! satisfies every constraint or is rejected outright. Everything else
//! (malformed inputs, encoding problems, proving-backend failures) is
//! reported through the same enum so callers deal with one error surface.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A constraint is unsatisfiable for the given witness. Fatal for that
    /// witness: no proof can be produced. The message names the offending
    /// constraint for debugging only; the accept/reject contract is binary.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// Input values outside the accepted shape (before any constraint runs).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Failed to parse or format a field-element value.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Failure inside the halo2 proving backend (keygen, transcript, ...).
    #[error("proving backend error: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, Error>;
