use std::time::Duration;
use tonic::transport::Endpoint;

use crate::error::{GrpcError, GrpcResult};

/// Settings applied to the tonic `Endpoint` behind an Xray API channel
///
/// The API is one plaintext control-plane connection that can sit idle for
/// long stretches between commands, so HTTP/2 pings keep it warm by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelConfig {
  /// HTTP/2 ping interval; `None` sends no pings
  pub keep_alive_interval: Option<Duration>,
  pub keep_alive_timeout: Duration,
  pub connect_timeout: Duration,
  /// Deadline for each RPC
  pub request_timeout: Duration,
  pub tcp_nodelay: bool,
}

impl Default for ChannelConfig {
  fn default() -> Self {
    Self {
      keep_alive_interval: Some(Duration::from_secs(30)),
      keep_alive_timeout: Duration::from_secs(10),
      connect_timeout: Duration::from_secs(5),
      request_timeout: Duration::from_secs(30),
      tcp_nodelay: true,
    }
  }
}

impl ChannelConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
    self.connect_timeout = timeout;
    self
  }

  pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
    self.request_timeout = timeout;
    self
  }

  pub fn with_keep_alive_interval(mut self, interval: Duration) -> Self {
    self.keep_alive_interval = Some(interval);
    self
  }

  pub fn without_keep_alive(mut self) -> Self {
    self.keep_alive_interval = None;
    self
  }

  /// Reject settings tonic would accept but that can never complete an RPC
  pub fn validate(&self) -> GrpcResult<()> {
    if self.connect_timeout.is_zero() {
      return Err(GrpcError::InvalidConfig(
        "connect timeout must be non-zero".to_string(),
      ));
    }
    if self.request_timeout.is_zero() {
      return Err(GrpcError::InvalidConfig(
        "request timeout must be non-zero".to_string(),
      ));
    }
    if self.keep_alive_interval.is_some_and(|interval| interval.is_zero()) {
      return Err(GrpcError::InvalidConfig(
        "keep-alive interval must be non-zero, disable it instead".to_string(),
      ));
    }
    Ok(())
  }

  pub(crate) fn apply_to_endpoint(self, mut endpoint: Endpoint) -> Endpoint {
    if let Some(interval) = self.keep_alive_interval {
      endpoint = endpoint
        .http2_keep_alive_interval(interval)
        .keep_alive_timeout(self.keep_alive_timeout)
        .keep_alive_while_idle(true);
    }

    endpoint
      .connect_timeout(self.connect_timeout)
      .timeout(self.request_timeout)
      .tcp_nodelay(self.tcp_nodelay)
  }
}
