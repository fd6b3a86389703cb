//! Ledger node JSON-RPC client.

use crate::error::{SdkError, SdkResult};
use endorser_keystore::{AccountIdentity, PublicKey, Signature};
use endorser_models::account::AccountName;
use endorser_models::action::{EndorseAction, EndorseOutcome, TransactionId, ENDORSE_ACTION_NAME};
use endorser_models::block::{BlockHash, BlockHeight};
use endorser_models::endorsement::{ChainState, EndorsementRecord};
use endorser_time::EndorserTime;
use jsonrpsee::core::client::{ClientT, Error as ClientError};
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::rpc_params;
use jsonrpsee::types::ErrorObjectOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Part of the ledger error message when the block was parsed before the endorsement landed.
pub const ALREADY_SETTLED_MARKER: &str =
    "block has been parsed and does not need to be endorsed";
/// Part of the ledger error message when endorsements are paused network-wide.
pub const ENDORSEMENT_DISABLED_MARKER: &str = "endorsement status is disabled";

/// Network parameters of the ledger that matter to an endorser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// the network has been launched, endorsements are expected
    pub launched: bool,
}

/// Data of an `endorse` action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndorseData {
    /// endorsing validator
    pub validator: AccountName,
    /// endorsed height
    pub height: BlockHeight,
    /// endorsed hash
    pub hash: BlockHash,
}

/// The signed part of an action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsignedAction {
    /// contract receiving the action
    pub contract: AccountName,
    /// action name
    pub action: String,
    /// action arguments
    pub data: EndorseData,
}

impl From<&EndorseAction> for UnsignedAction {
    fn from(action: &EndorseAction) -> Self {
        UnsignedAction {
            contract: action.contract.clone(),
            action: ENDORSE_ACTION_NAME.to_string(),
            data: EndorseData {
                validator: action.validator.clone(),
                height: action.height,
                hash: action.hash,
            },
        }
    }
}

impl UnsignedAction {
    /// Bytes covered by the signature: the JSON serialization of the action.
    pub fn to_signing_bytes(&self) -> SdkResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Signs the action with the validator identity.
    pub fn sign(self, identity: &AccountIdentity) -> SdkResult<SignedAction> {
        let signature = identity.keypair.sign(&self.to_signing_bytes()?);
        Ok(SignedAction {
            content: self,
            authorizer: identity.account_name.clone(),
            public_key: identity.keypair.get_public_key(),
            signature,
        })
    }
}

/// Action ready to be pushed to the ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedAction {
    /// signed content
    #[serde(flatten)]
    pub content: UnsignedAction,
    /// account authorizing the action
    pub authorizer: AccountName,
    /// key of the authorizing account
    pub public_key: PublicKey,
    /// signature of [`UnsignedAction::to_signing_bytes`]
    pub signature: Signature,
}

/// Answer of `push_action`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushActionResponse {
    /// identifier of the transaction including the action
    pub transaction_id: TransactionId,
}

/// Classifies a ledger rejection of an `endorse` action from its message.
///
/// ## Example
/// ```rust
/// # use endorser_sdk::classify_rejection;
/// # use endorser_models::action::EndorseOutcome;
/// let outcome = classify_rejection("assertion failure: current endorsement status is disabled");
/// assert_eq!(outcome, EndorseOutcome::EndorsementDisabled);
/// ```
pub fn classify_rejection(detail: &str) -> EndorseOutcome {
    if detail.contains(ALREADY_SETTLED_MARKER) {
        EndorseOutcome::AlreadySettled
    } else if detail.contains(ENDORSEMENT_DISABLED_MARKER) {
        EndorseOutcome::EndorsementDisabled
    } else {
        EndorseOutcome::Rejected(detail.to_string())
    }
}

fn rejection_detail(err: &ErrorObjectOwned) -> String {
    match err.data() {
        Some(data) => format!("{}: {}", err.message(), data.get()),
        None => err.message().to_string(),
    }
}

/// Client of the ledger node, signing actions with the validator identity.
pub struct LedgerRpcClient {
    client: HttpClient,
    identity: AccountIdentity,
}

impl LedgerRpcClient {
    /// Builds a client. No request is sent.
    pub fn from_url(
        url: &str,
        request_timeout: EndorserTime,
        identity: AccountIdentity,
    ) -> SdkResult<LedgerRpcClient> {
        let client = HttpClientBuilder::default()
            .request_timeout(request_timeout.to_duration())
            .build(url)?;
        Ok(LedgerRpcClient { client, identity })
    }

    /// Validator account the client signs for.
    pub fn account(&self) -> &AccountName {
        &self.identity.account_name
    }

    /// Endorsement record of `(height, hash)` in `contract`, `None` if nobody endorsed it yet.
    pub async fn get_endorsement(
        &self,
        contract: &AccountName,
        height: BlockHeight,
        hash: &BlockHash,
    ) -> SdkResult<Option<EndorsementRecord>> {
        Ok(self
            .client
            .request("get_endorsement", rpc_params![contract, height, hash])
            .await?)
    }

    /// Finality progress of the ledger.
    pub async fn get_chain_state(&self) -> SdkResult<ChainState> {
        Ok(self.client.request("get_chain_state", rpc_params![]).await?)
    }

    /// Network parameters.
    pub async fn get_config(&self) -> SdkResult<LedgerConfig> {
        Ok(self.client.request("get_config", rpc_params![]).await?)
    }

    /// Pushes a signed action.
    pub async fn push_action(&self, action: &SignedAction) -> SdkResult<PushActionResponse> {
        Ok(self
            .client
            .request("push_action", rpc_params![action])
            .await?)
    }

    /// Signs and pushes an `endorse` action.
    ///
    /// A rejection by the ledger is an `Ok` outcome, see [`classify_rejection`].
    /// Only failures to reach the ledger or to read its answer are errors.
    pub async fn submit_endorsement(&self, action: &EndorseAction) -> SdkResult<EndorseOutcome> {
        let signed = UnsignedAction::from(action).sign(&self.identity)?;
        match self.push_action(&signed).await {
            Ok(response) => Ok(EndorseOutcome::Submitted {
                transaction_id: response.transaction_id,
            }),
            Err(SdkError::RpcError(ClientError::Call(err))) => {
                let detail = rejection_detail(&err);
                debug!("endorse action rejected by the ledger: {}", detail);
                Ok(classify_rejection(&detail))
            }
            Err(err) => Err(err),
        }
    }
}
