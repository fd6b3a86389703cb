use crate::collaborators::{BlockSource, LedgerApi};
use endorser_models::{account::AccountName, block::BlockHeight};
use endorser_time::EndorserTime;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// External services the endorsement worker talks to
#[derive(Clone)]
pub struct EndorsementChannels {
    /// upstream chain RPC
    pub block_source: Arc<dyn BlockSource>,
    /// ledger read and write access
    pub ledger: Arc<dyn LedgerApi>,
}

/// Run state of the endorsement worker, as reported by the liveness probe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndorsementStatus {
    /// validator account
    pub account: AccountName,
    /// the network reported itself launched, scheduled work is enabled
    pub startup_confirmed: bool,
    /// a regular endorsement cycle is in progress
    pub endorse_running: bool,
    /// a catch-up cycle is in progress
    pub check_running: bool,
    /// height of the last accepted `endorse` transaction, 0 if none yet
    pub last_endorse_height: BlockHeight,
    /// highest height endorsed by this process, 0 if none yet
    pub last_submitted_height: BlockHeight,
    /// time of the last accepted `endorse` transaction
    pub last_submission_time: Option<EndorserTime>,
}
