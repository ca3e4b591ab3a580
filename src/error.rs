/// Errors surfaced by the rules engine and its record boundary.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A move violates the rules or has an impossible shape. The board it was applied to is
    /// left untouched.
    #[error("invalid move: {0}")]
    InvalidMove(String),

    /// An encoded board or move does not describe a valid value.
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_move(reason: impl Into<String>) -> Self {
        Self::InvalidMove(reason.into())
    }
}
