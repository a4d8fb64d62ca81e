use std::fmt::{Display, Formatter};

/// Typed failures of a transfer selection run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    /// No same-position pair keeps the squad legal.
    NoLegalTransfer,
    /// Fewer legal pairs than the selection window requires.
    InsufficientCandidates { available: usize, required: usize },
    InvalidInput(String),
}

impl Display for TransferError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TransferError::NoLegalTransfer => write!(f, "no legal transfer available"),
            TransferError::InsufficientCandidates { available, required } => write!(
                f,
                "insufficient candidates: {} legal transfers, {} required",
                available, required
            ),
            TransferError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
        }
    }
}

impl std::error::Error for TransferError {}

pub type TransferResult<T> = Result<T, TransferError>;
