//! Catch-up scan: re-reconciles every block between the ledger's finality point
//! and the chain tip, to recover endorsements missed while the process was down
//! or while cycles were failing.

use crate::context::EndorsementContext;
use endorser_endorsement_exports::EndorsementResult;
use endorser_logging::endorser_trace;
use endorser_models::block::BlockHeight;
use tracing::{debug, info};

/// Result of one catch-up cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CheckReport {
    /// the startup gate is still closed
    Skipped,
    /// heights `start..=tip` were reconciled, in order
    Scanned {
        start: BlockHeight,
        tip: BlockHeight,
    },
}

/// First height of a catch-up scan.
///
/// The scan normally starts right after the irreversible height. The last
/// endorsed height is preferred when it is ahead of that point while lagging
/// more than `resume_window` blocks behind the tip.
pub(crate) fn compute_start_height(
    irreversible_height: BlockHeight,
    last_endorse_height: BlockHeight,
    tip: BlockHeight,
    resume_window: u64,
) -> BlockHeight {
    let start_height = irreversible_height.saturating_add(1);
    if last_endorse_height > start_height
        && last_endorse_height < tip.saturating_sub(resume_window)
    {
        last_endorse_height
    } else {
        start_height
    }
}

impl EndorsementContext {
    /// Runs one catch-up cycle.
    ///
    /// Heights are processed strictly in ascending order. The first error aborts
    /// the rest of the scan; heights already reconciled stay reconciled and the
    /// next cycle recomputes its start the same way.
    pub(crate) fn run_check(&self) -> EndorsementResult<CheckReport> {
        if !self.startup_confirmed() {
            debug!("endorse check skipped: network not launched");
            return Ok(CheckReport::Skipped);
        }

        let chain_state = self.channels.ledger.get_chain_state()?;
        let tip = self.channels.block_source.get_chain_tip()?;
        let start = compute_start_height(
            chain_state.irreversible_height,
            self.state.last_endorse_height(),
            tip.height,
            self.cfg.resume_window,
        );
        endorser_trace!("endorse_check_start", {
            "irreversible_height": chain_state.irreversible_height,
            "start": start,
            "tip": tip.height,
        });

        for height in start..=tip.height {
            let hash = self.channels.block_source.get_hash_at(height)?;
            self.check_and_submit(height, &hash)?;
        }

        if start <= tip.height {
            info!("endorse check reconciled heights {} to {}", start, tip.height);
        }
        Ok(CheckReport::Scanned {
            start,
            tip: tip.height,
        })
    }
}
