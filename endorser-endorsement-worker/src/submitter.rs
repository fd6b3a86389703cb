//! Submission of a single `endorse` action and classification of its outcome.

use crate::context::EndorsementContext;
use endorser_endorsement_exports::{EndorsementError, EndorsementResult};
use endorser_logging::endorser_trace;
use endorser_models::action::{EndorseAction, EndorseOutcome};
use endorser_models::block::{BlockHash, BlockHeight};
use tracing::{error, info};

impl EndorsementContext {
    /// Endorses `hash` at `height` with the configured validator account.
    ///
    /// Benign rejections (block already parsed, endorsement disabled) are `Ok`.
    /// Any other rejection or a transport failure is logged and returned as an
    /// error; it is not retried here, the next scheduled cycle will.
    pub(crate) fn submit(
        &self,
        height: BlockHeight,
        hash: &BlockHash,
    ) -> EndorsementResult<EndorseOutcome> {
        let action = EndorseAction {
            contract: self.cfg.endorse_contract.clone(),
            validator: self.cfg.account.clone(),
            height,
            hash: *hash,
        };
        let outcome = self
            .channels
            .ledger
            .submit_endorsement(&action)
            .map_err(|err| {
                error!(
                    "could not submit endorsement of block {} at height {}: {}",
                    hash, height, err
                );
                err
            })?;

        match &outcome {
            EndorseOutcome::Submitted { transaction_id } => {
                self.state.record_endorsement(height);
                info!(
                    "{} endorsed block {} at height {}, transaction {}",
                    self.cfg.account, hash, height, transaction_id
                );
            }
            EndorseOutcome::AlreadySettled => {
                info!(
                    "block {} at height {} has already been parsed and does not need to be endorsed",
                    hash, height
                );
            }
            EndorseOutcome::EndorsementDisabled => {
                info!(
                    "endorsement is disabled on the ledger, block {} at height {} not endorsed",
                    hash, height
                );
            }
            EndorseOutcome::Rejected(detail) => {
                error!(
                    "ledger rejected endorsement of block {} at height {}: {}",
                    hash, height, detail
                );
                return Err(EndorsementError::SubmissionRejected(detail.clone()));
            }
        }
        endorser_trace!("endorse_submission", {
            "height": height,
            "hash": hash.to_string(),
            "outcome": format!("{:?}", outcome),
        });
        Ok(outcome)
    }
}
