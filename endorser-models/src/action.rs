//! The `endorse` ledger action and its classified outcome.

use crate::account::AccountName;
use crate::block::{BlockHash, BlockHeight};
use crate::error::ModelsError;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::str::FromStr;

/// Name of the ledger action submitted by validators.
pub const ENDORSE_ACTION_NAME: &str = "endorse";

/// Arguments of the `endorse` action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndorseAction {
    /// contract receiving the action
    pub contract: AccountName,
    /// endorsing validator
    pub validator: AccountName,
    /// endorsed height
    pub height: BlockHeight,
    /// endorsed hash
    pub hash: BlockHash,
}

/// Ledger transaction identifier (64 hex characters).
#[derive(Clone, Eq, PartialEq, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct TransactionId(String);

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Debug for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for TransactionId {
    type Err = ModelsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes)
            .map_err(|e| ModelsError::TransactionIdParseError(format!("{}: {}", s, e)))?;
        Ok(TransactionId(s.to_ascii_lowercase()))
    }
}

/// Outcome of an `endorse` submission that reached the ledger.
///
/// Transport failures are not outcomes: they are reported as errors by the ledger client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EndorseOutcome {
    /// the action was included in a transaction
    Submitted {
        /// identifier of the transaction
        transaction_id: TransactionId,
    },
    /// the block was parsed before this submission landed, nothing left to endorse
    AlreadySettled,
    /// endorsements are paused network-wide
    EndorsementDisabled,
    /// any other rejection by the ledger
    Rejected(String),
}

impl EndorseOutcome {
    /// Whether the outcome means there is nothing left to do for this block.
    pub fn is_benign(&self) -> bool {
        !matches!(self, EndorseOutcome::Rejected(_))
    }
}
