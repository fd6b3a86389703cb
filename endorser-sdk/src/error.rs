use displaydoc::Display;
use endorser_models::ModelsError;
use thiserror::Error;

/// sdk result
pub type SdkResult<T, E = SdkError> = core::result::Result<T, E>;

/// sdk error
#[non_exhaustive]
#[derive(Display, Error, Debug)]
pub enum SdkError {
    /// rpc client error: {0}
    RpcError(#[from] jsonrpsee::core::ClientError),
    /// unexpected response: {0}
    ModelsError(#[from] ModelsError),
    /// serialization error: {0}
    SerializationError(#[from] serde_json::Error),
}
