use crate::error::ModelsError;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::str::FromStr;

/// Maximum length of a ledger account name.
pub const MAX_ACCOUNT_NAME_LENGTH: usize = 12;

/// Ledger account identifier.
///
/// Names are 1 to 12 characters among `a-z`, `1-5` and `.`, and do not end with a `.`.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct AccountName(String);

impl AccountName {
    /// name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Debug for AccountName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for AccountName {
    type Err = ModelsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.len() > MAX_ACCOUNT_NAME_LENGTH {
            return Err(ModelsError::AccountNameParseError(format!(
                "{:?} must be 1 to {} characters long",
                s, MAX_ACCOUNT_NAME_LENGTH
            )));
        }
        if let Some(c) = s
            .chars()
            .find(|c| !matches!(c, 'a'..='z' | '1'..='5' | '.'))
        {
            return Err(ModelsError::AccountNameParseError(format!(
                "{:?} contains forbidden character {:?}",
                s, c
            )));
        }
        if s.ends_with('.') {
            return Err(ModelsError::AccountNameParseError(format!(
                "{:?} cannot end with a dot",
                s
            )));
        }
        Ok(AccountName(s.to_string()))
    }
}
