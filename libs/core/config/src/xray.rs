use crate::{env_or_default, env_parse_or_default, ConfigError, FromEnv};
use std::time::Duration;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 10085;
pub const DEFAULT_INBOUND_TAG: &str = "main-inbound";

/// Connection settings for the Xray gRPC API (`api` inbound of the proxy)
#[derive(Clone, Debug)]
pub struct XrayApiConfig {
    pub host: String,
    pub port: u16,
    /// Inbound tag used when an operation does not name one
    pub inbound_tag: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// HTTP/2 ping interval; `None` disables pings
    pub keep_alive: Option<Duration>,
}

impl XrayApiConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    pub fn with_inbound_tag(mut self, tag: impl Into<String>) -> Self {
        self.inbound_tag = tag.into();
        self
    }

    /// Get the API address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Plaintext HTTP/2 endpoint URI understood by tonic
    pub fn endpoint(&self) -> String {
        format!("http://{}", self.address())
    }
}

impl FromEnv for XrayApiConfig {
    /// Reads from environment variables with defaults matching a stock Xray API inbound:
    /// - XRAY_API_HOST: defaults to localhost
    /// - XRAY_API_PORT: defaults to 10085
    /// - XRAY_INBOUND_TAG: defaults to main-inbound
    /// - XRAY_CONNECT_TIMEOUT_SECS / XRAY_REQUEST_TIMEOUT_SECS: 5 / 30
    /// - XRAY_KEEP_ALIVE_SECS: defaults to 30, 0 disables keep-alive
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("XRAY_API_HOST", DEFAULT_HOST);
        let port = env_parse_or_default("XRAY_API_PORT", &DEFAULT_PORT.to_string())?;
        let inbound_tag = env_or_default("XRAY_INBOUND_TAG", DEFAULT_INBOUND_TAG);
        let connect_timeout: u64 = env_parse_or_default("XRAY_CONNECT_TIMEOUT_SECS", "5")?;
        let request_timeout: u64 = env_parse_or_default("XRAY_REQUEST_TIMEOUT_SECS", "30")?;
        let keep_alive: u64 = env_parse_or_default("XRAY_KEEP_ALIVE_SECS", "30")?;

        Ok(Self {
            host,
            port,
            inbound_tag,
            connect_timeout: Duration::from_secs(connect_timeout),
            request_timeout: Duration::from_secs(request_timeout),
            keep_alive: (keep_alive > 0).then(|| Duration::from_secs(keep_alive)),
        })
    }
}

impl Default for XrayApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            inbound_tag: DEFAULT_INBOUND_TAG.to_string(),
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(30),
            keep_alive: Some(Duration::from_secs(30)),
        }
    }
}
