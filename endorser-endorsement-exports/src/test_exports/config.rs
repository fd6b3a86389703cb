use crate::EndorsementConfig;
use endorser_models::account::AccountName;
use endorser_models::config::{
    CATCH_UP_RESUME_WINDOW, ENDORSE_CHECK_INTERVAL, ENDORSE_CONTRACT, ENDORSE_INTERVAL,
    RETRY_INTERVAL,
};
use std::str::FromStr;

impl Default for EndorsementConfig {
    fn default() -> Self {
        EndorsementConfig {
            account: AccountName::from_str("me").expect("valid test account"),
            endorse_contract: AccountName::from_str(ENDORSE_CONTRACT)
                .expect("valid default contract"),
            endorse_interval: ENDORSE_INTERVAL,
            check_interval: ENDORSE_CHECK_INTERVAL,
            retry_interval: RETRY_INTERVAL,
            resume_window: CATCH_UP_RESUME_WINDOW,
        }
    }
}
