use thiserror::Error;

/// Failures raised by the card, deck and shoe operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    #[error("invalid card: {0}")]
    InvalidCard(String),

    #[error("cannot deal {requested} card(s), only {available} left")]
    InsufficientCards { requested: usize, available: usize },

    #[error("shoe has not been built")]
    ShoeNotReady,

    #[error("shoe is still in play and has not reached the cut card")]
    ShoeInPlay,

    #[error("a shoe needs at least one deck")]
    NoDecks,
}

pub type Result<T, E = CardError> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BetError {
    #[error("bet must be greater than zero")]
    NotPositive,

    #[error("bet of {bet:.2} exceeds balance of {balance:.2}")]
    ExceedsBalance { bet: f64, balance: f64 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("a table needs between 1 and {max} players, got {got}")]
    PlayerCount { got: usize, max: usize },
}

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("save file: {0}")]
    Io(#[from] std::io::Error),

    #[error("save file format: {0}")]
    Csv(#[from] csv::Error),
}
