//! Parser-boundary errors. Engine-internal conditions (conflict,
//! tautology, empty resolvent, timeout) are control-flow values
//! ([`crate::engine::Verdict`]), never `Result` errors; only reading the
//! input file can fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid DIMACS header: {0}")]
    InvalidFormat(String),
}
