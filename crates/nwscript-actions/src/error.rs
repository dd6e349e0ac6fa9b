use crate::registry::Revision;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{revision} action ordinal {ordinal} out of range (count {count})")]
    OutOfRange {
        revision: Revision,
        ordinal: i64,
        count: usize,
    },

    #[error("{revision} has no action named '{name}'")]
    NotFound { revision: Revision, name: String },

    #[error("Invalid action type code: {0}")]
    InvalidTypeCode(u8),

    #[error("Unknown type keyword '{0}'")]
    UnknownTypeKeyword(String),

    #[error("Unknown revision '{0}', expected 'nwn1' or 'nwn2'")]
    UnknownRevision(String),

    #[error("Too few arguments for action {ordinal}: {supplied} supplied, at least {min} required")]
    TooFewArguments {
        ordinal: u32,
        supplied: usize,
        min: usize,
    },

    #[error("Too many arguments for action {ordinal}: {supplied} supplied, at most {max} accepted")]
    TooManyArguments {
        ordinal: u32,
        supplied: usize,
        max: usize,
    },

    #[error("{revision} action {ordinal} is malformed: {reason}")]
    InvariantViolation {
        revision: Revision,
        ordinal: u32,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
