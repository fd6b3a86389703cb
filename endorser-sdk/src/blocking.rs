//! Synchronous adapters of the async clients.
//!
//! Each adapter owns a handle on the node's tokio runtime and blocks the
//! calling thread on it. They must not be called from a runtime thread.

use crate::{BitcoinRpcClient, LedgerRpcClient, SdkError};
use endorser_endorsement_exports::{BlockSource, EndorsementError, EndorsementResult, LedgerApi};
use endorser_models::account::AccountName;
use endorser_models::action::{EndorseAction, EndorseOutcome};
use endorser_models::block::{BlockHash, BlockHeight, BlockRef};
use endorser_models::endorsement::{ChainState, EndorsementRecord};
use tokio::runtime::Handle;

/// [`BlockSource`] backed by a [`BitcoinRpcClient`].
pub struct BlockingBitcoinClient {
    client: BitcoinRpcClient,
    runtime: Handle,
}

impl BlockingBitcoinClient {
    /// Wraps `client`, running its requests on `runtime`.
    pub fn new(client: BitcoinRpcClient, runtime: Handle) -> Self {
        BlockingBitcoinClient { client, runtime }
    }
}

impl BlockSource for BlockingBitcoinClient {
    fn get_chain_tip(&self) -> EndorsementResult<BlockRef> {
        self.runtime
            .block_on(self.client.get_chain_tip())
            .map_err(|err| EndorsementError::BlockSourceError(err.to_string()))
    }

    fn get_hash_at(&self, height: BlockHeight) -> EndorsementResult<BlockHash> {
        self.runtime
            .block_on(self.client.get_block_hash(height))
            .map_err(|err| {
                EndorsementError::BlockSourceError(format!("hash at height {}: {}", height, err))
            })
    }
}

/// [`LedgerApi`] backed by a [`LedgerRpcClient`].
pub struct BlockingLedgerClient {
    client: LedgerRpcClient,
    endorse_contract: AccountName,
    runtime: Handle,
}

impl BlockingLedgerClient {
    /// Wraps `client`, reading endorsement records from `endorse_contract`.
    pub fn new(
        client: LedgerRpcClient,
        endorse_contract: AccountName,
        runtime: Handle,
    ) -> Self {
        BlockingLedgerClient {
            client,
            endorse_contract,
            runtime,
        }
    }
}

fn ledger_error(err: SdkError) -> EndorsementError {
    EndorsementError::LedgerError(err.to_string())
}

impl LedgerApi for BlockingLedgerClient {
    fn get_endorsement_record(
        &self,
        height: BlockHeight,
        hash: &BlockHash,
    ) -> EndorsementResult<Option<EndorsementRecord>> {
        self.runtime
            .block_on(
                self.client
                    .get_endorsement(&self.endorse_contract, height, hash),
            )
            .map_err(ledger_error)
    }

    fn get_chain_state(&self) -> EndorsementResult<ChainState> {
        self.runtime
            .block_on(self.client.get_chain_state())
            .map_err(ledger_error)
    }

    fn get_network_launched(&self) -> EndorsementResult<bool> {
        self.runtime
            .block_on(self.client.get_config())
            .map(|config| config.launched)
            .map_err(ledger_error)
    }

    fn submit_endorsement(&self, action: &EndorseAction) -> EndorsementResult<EndorseOutcome> {
        self.runtime
            .block_on(self.client.submit_endorsement(action))
            .map_err(ledger_error)
    }
}
