//! Default values and settings loading.

mod constants;
mod endorser_settings;

pub use constants::*;
pub use endorser_settings::{build_endorser_settings, build_endorser_settings_from};
