//! DEFAULT VALUES USED TO INITIALIZE DIVERS CONFIGURATIONS STRUCTURES
//!
//! Each crate may contain a `config.rs` whose `Default` implementation takes
//! its values from this file. These are passed with dependency injection in a
//! `cfg` parameter to each worker, which keeps unit tests independent from the
//! configuration files.
use endorser_time::EndorserTime;

/// Period of the regular endorsement task.
pub const ENDORSE_INTERVAL: EndorserTime = EndorserTime::from_millis(5_000);
/// Period of the catch-up task.
pub const ENDORSE_CHECK_INTERVAL: EndorserTime = EndorserTime::from_millis(10_000);
/// Pause after a failed regular endorsement cycle, before the next one may start.
pub const RETRY_INTERVAL: EndorserTime = EndorserTime::from_millis(3_000);
/// A remembered endorsement height is only used as catch-up resume point
/// when it lies more than this many blocks below the chain tip.
pub const CATCH_UP_RESUME_WINDOW: u64 = 6;
/// Timeout of a single upstream or ledger RPC call.
pub const RPC_REQUEST_TIMEOUT: EndorserTime = EndorserTime::from_millis(10_000);
/// Contract handling endorsements on the ledger.
pub const ENDORSE_CONTRACT: &str = "blkendt.xsat";
/// Keystore file format version.
pub const KEYSTORE_VERSION: u64 = 1;
