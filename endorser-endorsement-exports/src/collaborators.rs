//! Interfaces of the external services the endorsement worker drives.
//!
//! Calls are blocking. Timeouts are enforced by the implementations.

use crate::EndorsementResult;
use endorser_models::{
    action::{EndorseAction, EndorseOutcome},
    block::{BlockHash, BlockHeight, BlockRef},
    endorsement::{ChainState, EndorsementRecord},
};

/// Upstream chain RPC.
#[cfg_attr(any(test, feature = "test-exports"), mockall::automock)]
pub trait BlockSource: Send + Sync {
    /// Current best block of the upstream chain.
    fn get_chain_tip(&self) -> EndorsementResult<BlockRef>;

    /// Hash of the block at `height` on the best chain.
    fn get_hash_at(&self, height: BlockHeight) -> EndorsementResult<BlockHash>;
}

/// Ledger tables and write access.
#[cfg_attr(any(test, feature = "test-exports"), mockall::automock)]
pub trait LedgerApi: Send + Sync {
    /// Endorsement bookkeeping of a block, `None` if nobody endorsed it yet.
    fn get_endorsement_record(
        &self,
        height: BlockHeight,
        hash: &BlockHash,
    ) -> EndorsementResult<Option<EndorsementRecord>>;

    /// Finality progress of the ledger.
    fn get_chain_state(&self) -> EndorsementResult<ChainState>;

    /// Whether the network has been launched.
    fn get_network_launched(&self) -> EndorsementResult<bool>;

    /// Submits an `endorse` action.
    ///
    /// Rejections by the ledger are classified into [`EndorseOutcome`];
    /// `Err` is reserved for failures to reach the ledger.
    fn submit_endorsement(&self, action: &EndorseAction) -> EndorsementResult<EndorseOutcome>;
}
