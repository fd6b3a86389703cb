//! Decides whether a block needs our endorsement and submits it if so.

use crate::context::EndorsementContext;
use crate::qualification::is_qualified;
use endorser_endorsement_exports::EndorsementResult;
use endorser_models::action::EndorseOutcome;
use endorser_models::block::{BlockHash, BlockHeight};
use tracing::debug;

/// What a reconciliation did for one block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Reconciliation {
    /// an `endorse` action was sent
    Submitted(EndorseOutcome),
    /// the account is not among the requested validators
    NotRequested,
    /// the account already endorsed this block
    AlreadyProvided,
}

impl EndorsementContext {
    /// Submits an endorsement for `(height, hash)` unless the ledger record shows
    /// it is not ours to give or already given.
    ///
    /// Reconciliations of the regular and catch-up tasks are serialized: the
    /// second one for a height reads the record after the first one's submission.
    pub(crate) fn check_and_submit(
        &self,
        height: BlockHeight,
        hash: &BlockHash,
    ) -> EndorsementResult<Reconciliation> {
        let _reconciling = self.state.reconcile_lock.lock();
        let account = &self.cfg.account;
        let record = self
            .channels
            .ledger
            .get_endorsement_record(height, hash)?;

        if let Some(record) = record {
            if !is_qualified(&record.requested_validators, account) {
                debug!("{} not requested to endorse height {}", account, height);
                return Ok(Reconciliation::NotRequested);
            }
            if is_qualified(&record.provider_validators, account) {
                debug!("{} already endorsed height {}", account, height);
                return Ok(Reconciliation::AlreadyProvided);
            }
        }

        let outcome = self.submit(height, hash)?;
        if let EndorseOutcome::Submitted { .. } = outcome {
            self.state.record_submission(height);
        }
        Ok(Reconciliation::Submitted(outcome))
    }
}
