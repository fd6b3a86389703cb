use endorser_models::account::AccountName;
use endorser_models::block::{BlockHash, BlockHeight};
use endorser_models::endorsement::{EndorsementRecord, ValidatorInfo};
use std::str::FromStr;

/// Account name for tests. Panics on an invalid name.
pub fn account(name: &str) -> AccountName {
    AccountName::from_str(name).expect("invalid test account name")
}

/// Deterministic hash for a test height.
pub fn hash_for_height(height: BlockHeight) -> BlockHash {
    let mut bytes = [0u8; 32];
    bytes[24..].copy_from_slice(&height.to_be_bytes());
    BlockHash::from_bytes(bytes)
}

/// Builds an endorsement record with the given requested and provider validators.
pub fn create_record(
    height: BlockHeight,
    hash: BlockHash,
    requested: &[&str],
    provided: &[&str],
) -> EndorsementRecord {
    let to_infos = |names: &[&str]| {
        names
            .iter()
            .map(|name| ValidatorInfo {
                account: account(name),
                staking: 100,
            })
            .collect()
    };
    EndorsementRecord {
        height,
        hash,
        requested_validators: to_infos(requested),
        provider_validators: to_infos(provided),
    }
}
