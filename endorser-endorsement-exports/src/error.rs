use displaydoc::Display;
use thiserror::Error;

/// endorsement result
pub type EndorsementResult<T, E = EndorsementError> = core::result::Result<T, E>;

/// endorsement error
#[non_exhaustive]
#[derive(Display, Error, Debug, Clone, PartialEq, Eq)]
pub enum EndorsementError {
    /// upstream chain RPC error: {0}
    BlockSourceError(String),
    /// ledger error: {0}
    LedgerError(String),
    /// endorsement rejected by the ledger: {0}
    SubmissionRejected(String),
    /// models error: {0}
    ModelsError(#[from] endorser_models::ModelsError),
}
