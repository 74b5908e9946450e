//! Error type for the `pm-*` crates.
//!
//! Roster operations themselves are total and never fail; errors only come
//! from validating configuration before a roster or driver is built.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PmError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `pm-*` crates.
pub type PmResult<T> = Result<T, PmError>;
