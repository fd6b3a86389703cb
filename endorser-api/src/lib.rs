//! JSON-RPC liveness API of an endorser node.
//!
//! `get_status` reports the endorsement worker's run state. `system_health`
//! reports the last endorsed height and is also served as `GET /health` for
//! monitoring probes that do not speak JSON-RPC.

#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

use endorser_endorsement_exports::{EndorsementController, EndorsementStatus};
use endorser_models::block::BlockHeight;
use jsonrpsee::core::RpcResult;
use jsonrpsee::proc_macros::rpc;
use jsonrpsee::server::middleware::http::ProxyGetRequestLayer;
use jsonrpsee::server::{Server, ServerHandle};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tracing::{info, warn};

mod config;
mod error;

pub use config::APIConfig;
pub use error::ApiError;

/// Path of the plain HTTP health probe.
pub const HEALTH_PATH: &str = "/health";

/// Answer of the health probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    /// highest height endorsed by this process, 0 if none yet
    pub last_submitted_height: BlockHeight,
}

/// Exposed API methods
#[cfg_attr(not(test), rpc(server))]
#[cfg_attr(test, rpc(server, client))]
pub trait EndorserRpc {
    /// Run state of the endorsement worker.
    #[method(name = "get_status")]
    fn get_status(&self) -> RpcResult<EndorsementStatus>;

    /// Last endorsed height. Fails until the network is launched.
    #[method(name = "system_health")]
    fn system_health(&self) -> RpcResult<Health>;
}

/// The API wrapper
pub struct API {
    endorsement_controller: Box<dyn EndorsementController>,
}

impl API {
    /// Creates the API over the endorsement worker's controller.
    pub fn new(endorsement_controller: Box<dyn EndorsementController>) -> Self {
        API {
            endorsement_controller,
        }
    }

    /// Start the API
    pub async fn serve(self, api_config: &APIConfig) -> Result<StopHandle, ApiError> {
        let health_proxy = ProxyGetRequestLayer::new(HEALTH_PATH, "system_health")
            .map_err(|err| ApiError::ServerError(err.to_string()))?;
        let middleware = tower::ServiceBuilder::new().layer(health_proxy);

        let server = Server::builder()
            .max_connections(api_config.max_connections)
            .max_request_body_size(api_config.max_request_body_size)
            .set_http_middleware(middleware)
            .build(api_config.bind)
            .await
            .map_err(|err| {
                ApiError::ServerError(format!("could not bind {}: {}", api_config.bind, err))
            })?;
        let local_addr = server
            .local_addr()
            .map_err(|err| ApiError::ServerError(err.to_string()))?;

        let server_handler = server.start(self.into_rpc());
        info!("API listening on {}", local_addr);
        Ok(StopHandle {
            server_handler,
            local_addr,
        })
    }
}

impl EndorserRpcServer for API {
    fn get_status(&self) -> RpcResult<EndorsementStatus> {
        Ok(self.endorsement_controller.get_status())
    }

    fn system_health(&self) -> RpcResult<Health> {
        let status = self.endorsement_controller.get_status();
        if !status.startup_confirmed {
            return Err(ApiError::NotReady("network not launched".into()).into());
        }
        Ok(Health {
            last_submitted_height: status.last_submitted_height,
        })
    }
}

/// Used to be able to stop the API
pub struct StopHandle {
    server_handler: ServerHandle,
    local_addr: SocketAddr,
}

impl StopHandle {
    /// Address the API actually listens on.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// stop the API gracefully
    pub async fn stop(self) {
        match self.server_handler.stop() {
            Ok(_) => {
                info!("API stop signal sent successfully");
            }
            Err(err) => warn!("API thread panicked: {:?}", err),
        }
        self.server_handler.stopped().await;
    }
}
