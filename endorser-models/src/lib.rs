//! Data types shared by the endorser crates.
#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

/// ledger account names
pub mod account;
pub mod action;
pub mod block;
pub mod config;
pub mod endorsement;
/// models error
pub mod error;

pub use error::ModelsError;
