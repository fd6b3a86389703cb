//! On-chain endorsement bookkeeping, as read from the ledger tables.

use crate::account::AccountName;
use crate::block::{BlockHash, BlockHeight};
use serde::{Deserialize, Serialize};

/// A validator entry of an endorsement record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorInfo {
    /// validator account
    pub account: AccountName,
    /// staked amount backing the validator, in the ledger's smallest unit
    #[serde(default)]
    pub staking: u64,
}

/// Who must endorse a block and who already has.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndorsementRecord {
    /// endorsed block height
    pub height: BlockHeight,
    /// endorsed block hash
    pub hash: BlockHash,
    /// validators selected to endorse this block
    #[serde(default)]
    pub requested_validators: Vec<ValidatorInfo>,
    /// validators that already endorsed this block
    #[serde(default)]
    pub provider_validators: Vec<ValidatorInfo>,
}

/// Ledger finality progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainState {
    /// highest upstream height the ledger considers final
    pub irreversible_height: BlockHeight,
}
