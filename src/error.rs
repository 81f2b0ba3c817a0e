use thiserror::Error;

/// Broad classification of [`Error`] values.
///
/// `InvalidInput` is only produced while building a timeline; `InvalidArgument`
/// is only produced by feed motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    InvalidArgument,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid input: timeline requires at least one element")]
    EmptyTimeline,
    #[error("invalid input: duplicate element time {time} at input index {index}")]
    DuplicateTime { time: i64, index: usize },
    #[error("invalid argument: negative delta {0}")]
    NegativeDelta(i64),
    #[error("invalid argument: delta {delta} from position {position} overflows")]
    PositionOverflow { position: i64, delta: i64 },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyTimeline | Error::DuplicateTime { .. } => ErrorKind::InvalidInput,
            Error::NegativeDelta(_) | Error::PositionOverflow { .. } => {
                ErrorKind::InvalidArgument
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
