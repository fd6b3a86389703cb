use displaydoc::Display;
use jsonrpsee::types::{ErrorObject, ErrorObjectOwned};

/// Errors of the api component.
#[non_exhaustive]
#[derive(Display, thiserror::Error, Debug)]
pub enum ApiError {
    /// Server error: {0}
    ServerError(String),
    /// Not ready: {0}
    NotReady(String),
}

impl From<ApiError> for ErrorObjectOwned {
    fn from(err: ApiError) -> Self {
        // JSON-RPC Server errors codes must be between -32099 to -32000
        let code = match err {
            ApiError::ServerError(_) => -32001,
            ApiError::NotReady(_) => -32002,
        };

        ErrorObject::owned(code, err.to_string(), None::<()>)
    }
}
