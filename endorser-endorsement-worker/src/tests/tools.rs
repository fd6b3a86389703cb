use crate::context::EndorsementContext;
use endorser_endorsement_exports::{
    EndorsementChannels, EndorsementConfig, MockBlockSource, MockLedgerApi,
};
use endorser_models::action::{EndorseOutcome, TransactionId};
use std::str::FromStr;
use std::sync::Arc;

pub(crate) fn create_context(
    block_source: MockBlockSource,
    ledger: MockLedgerApi,
) -> EndorsementContext {
    EndorsementContext::new(
        EndorsementConfig::default(),
        EndorsementChannels {
            block_source: Arc::new(block_source),
            ledger: Arc::new(ledger),
        },
    )
}

pub(crate) fn submitted(n: u64) -> EndorseOutcome {
    EndorseOutcome::Submitted {
        transaction_id: TransactionId::from_str(&format!("{:064x}", n))
            .expect("valid transaction id"),
    }
}

/// Ledger mock on which the network is already launched.
pub(crate) fn launched_ledger() -> MockLedgerApi {
    let mut ledger = MockLedgerApi::new();
    ledger.expect_get_network_launched().returning(|| Ok(true));
    ledger
}
