/// Errors produced by ledger substrate operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("ledger read failed for key {key}: {reason}")]
    Read { key: String, reason: String },

    #[error("ledger write failed for key {key}: {reason}")]
    Write { key: String, reason: String },

    #[error("ledger scan failed: {reason}")]
    Scan { reason: String },

    #[error("ledger lock poisoned")]
    Poisoned,
}

/// Result alias for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;
