use snail_core::{SnailError, SnailId};
use snail_roster::RosterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] SnailError),

    #[error("roster error: {0}")]
    Roster(#[from] RosterError),

    #[error("{what} length {got} does not match roster size {expected}")]
    CountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("snail {0} has no roster entry")]
    NotInRoster(SnailId),

    #[error("snail {0} appears more than once in the field")]
    DuplicateSnail(SnailId),

    #[error("frame delivered with no pending request")]
    NotScheduled,

    #[error("simulator has been torn down")]
    TornDown,
}

pub type SimResult<T> = Result<T, SimError>;
