use thiserror::Error;

use cadastre_crypto::HasherError;
use cadastre_ledger::LedgerError;
use cadastre_types::TitleId;

/// Errors produced by registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Create was called for an id that already holds a live record.
    #[error("land title {0} already exists")]
    AlreadyExists(TitleId),

    /// The operation targeted an id with no live record.
    #[error("land title {0} not found")]
    NotFound(TitleId),

    /// The title document could not be read for digesting.
    #[error("cannot digest document for title {id}: {source}")]
    Document {
        id: TitleId,
        #[source]
        source: HasherError,
    },

    /// A record could not be encoded, or stored bytes are not a valid record.
    #[error("malformed record for title {id}: {reason}")]
    Serialization { id: TitleId, reason: String },

    /// Substrate-level failure, propagated verbatim.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Result alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
