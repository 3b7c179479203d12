//! Shared error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `SnailError` via `From` impls, or keep them separate and wrap `SnailError`
//! as one variant.

use thiserror::Error;

use crate::SnailId;

/// The top-level error type for `snail-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SnailError {
    #[error("snail {0} not found")]
    UnknownSnail(SnailId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `snail-*` crates.
pub type SnailResult<T> = Result<T, SnailError>;
