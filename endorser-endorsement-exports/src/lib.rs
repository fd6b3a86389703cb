//! Definition and exports of the endorsement worker types and errors.
//!
//! The worker itself lives in `endorser-endorsement-worker`; the clients of the
//! upstream chain and of the ledger implement the collaborator traits defined here.

#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

mod collaborators;
mod config;
mod controller_traits;
mod error;
mod types;

pub use collaborators::{BlockSource, LedgerApi};
#[cfg(any(test, feature = "test-exports"))]
pub use collaborators::{MockBlockSource, MockLedgerApi};
pub use config::EndorsementConfig;
pub use controller_traits::{EndorsementController, EndorsementManager};
#[cfg(any(test, feature = "test-exports"))]
pub use controller_traits::MockEndorsementController;
pub use error::{EndorsementError, EndorsementResult};
pub use types::{EndorsementChannels, EndorsementStatus};

/// Tests utils
#[cfg(feature = "test-exports")]
pub mod test_exports;
