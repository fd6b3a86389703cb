//! Clients of the external services of an endorser node: the upstream chain
//! RPC (block heights and hashes) and the ledger RPC (endorsement records,
//! chain state, action submission).
//!
//! The clients are async. The endorsement worker runs on plain threads and
//! talks to them through the blocking adapters of the [`blocking`] module.

#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

mod bitcoin;
pub mod blocking;
mod error;
mod ledger;

pub use bitcoin::BitcoinRpcClient;
pub use blocking::{BlockingBitcoinClient, BlockingLedgerClient};
pub use error::{SdkError, SdkResult};
pub use ledger::{
    classify_rejection, EndorseData, LedgerConfig, LedgerRpcClient, PushActionResponse,
    SignedAction, UnsignedAction, ALREADY_SETTLED_MARKER, ENDORSEMENT_DISABLED_MARKER,
};
