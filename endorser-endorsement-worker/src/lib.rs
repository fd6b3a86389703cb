//! Endorsement reconciliation engine.
//!
//! For each upstream block the worker decides whether the local validator
//! account must endorse it and, if so, submits the `endorse` action. Two
//! periodic tasks drive it: a regular one for the chain tip and a catch-up
//! one scanning everything between the ledger's irreversible height and the tip.
//! Both stay idle until the ledger reports the network as launched.

#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

mod catch_up;
mod context;
mod controller;
mod qualification;
mod reconciler;
mod run_state;
mod submitter;
mod worker;

pub use controller::{EndorsementControllerImpl, EndorsementManagerImpl};
pub use worker::start_endorsement_worker;

#[cfg(test)]
mod tests;
