use snail_core::SnailId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("roster parse error: {0}")]
    Parse(String),

    #[error("snail id {0} appears more than once in the roster")]
    DuplicateId(SnailId),

    #[error("roster is empty")]
    Empty,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RosterResult<T> = Result<T, RosterError>;
