use displaydoc::Display;
use thiserror::Error;

/// models result
pub type ModelsResult<T, E = ModelsError> = core::result::Result<T, E>;

/// models error
#[non_exhaustive]
#[derive(Display, Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelsError {
    /// invalid block hash: {0}
    BlockHashParseError(String),
    /// invalid account name: {0}
    AccountNameParseError(String),
    /// invalid transaction id: {0}
    TransactionIdParseError(String),
    /// settings error: {0}
    SettingsError(String),
}
