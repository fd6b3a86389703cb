use endorser_models::account::AccountName;
use endorser_models::endorsement::ValidatorInfo;

/// Whether `account` belongs to a validator set of an endorsement record.
///
/// Used against the requested set (must we endorse?) and the provider set (did we already?).
pub(crate) fn is_qualified(validators: &[ValidatorInfo], account: &AccountName) -> bool {
    validators.iter().any(|validator| &validator.account == account)
}
