pub mod config;

pub use config::ChannelConfig;

use crate::error::{GrpcError, GrpcResult};
use tonic::transport::{Channel, Endpoint};

fn build_endpoint(addr: &str, config: ChannelConfig) -> GrpcResult<Endpoint> {
  config.validate()?;

  let endpoint = Endpoint::from_shared(addr.to_string()).map_err(|e| {
    tracing::error!(target: "grpc_client", addr = %addr, error = ?e, "Invalid URI");
    GrpcError::InvalidUri(e)
  })?;

  Ok(config.apply_to_endpoint(endpoint))
}

/// Creates a lazy gRPC channel that connects on first request
///
/// Returns immediately without touching the network. Useful for one-shot
/// commands where an unreachable API should surface as the RPC's own error.
/// Must be called from within a tokio runtime.
pub fn create_channel_lazy_with_config(
  addr: impl Into<String>,
  config: ChannelConfig,
) -> GrpcResult<Channel> {
  let addr = addr.into();
  let endpoint = build_endpoint(&addr, config)?;

  tracing::debug!(
    target: "grpc_client",
    addr = %addr,
    "Creating lazy gRPC channel (connects on first request)"
  );

  Ok(endpoint.connect_lazy())
}

/// Creates a gRPC channel and connects eagerly
///
/// ## Example
/// ```ignore
/// use grpc_client::{create_channel_with_config, ChannelConfig};
/// use std::time::Duration;
///
/// let config = ChannelConfig::default()
///     .with_connect_timeout(Duration::from_secs(2));
///
/// let channel = create_channel_with_config("http://127.0.0.1:10085", config).await?;
/// ```
pub async fn create_channel_with_config(
  addr: impl Into<String>,
  config: ChannelConfig,
) -> GrpcResult<Channel> {
  let addr = addr.into();
  let endpoint = build_endpoint(&addr, config)?;

  tracing::debug!(target: "grpc_client", addr = %addr, "Creating gRPC channel");

  endpoint.connect().await.map_err(|e| {
    tracing::error!(
      target: "grpc_client",
      addr = %addr,
      error = ?e,
      "Failed to connect to gRPC service"
    );
    GrpcError::ConnectionFailed { addr, source: e }
  })
}
