//! This file defines the endorsement worker settings

use endorser_models::account::AccountName;
use endorser_time::EndorserTime;

/// Structure defining the settings of the endorsement worker
#[derive(Debug, Clone)]
pub struct EndorsementConfig {
    /// validator account endorsing blocks
    pub account: AccountName,

    /// contract receiving `endorse` actions
    pub endorse_contract: AccountName,

    /// period of the regular endorsement task (chain tip only)
    pub endorse_interval: EndorserTime,

    /// period of the catch-up task
    pub check_interval: EndorserTime,

    /// pause after a failed regular cycle before the task may run again
    pub retry_interval: EndorserTime,

    /// the last endorsed height is used as catch-up start only when it lies
    /// more than this many blocks below the tip
    pub resume_window: u64,
}
