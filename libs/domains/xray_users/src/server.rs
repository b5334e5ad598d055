use core_config::XrayApiConfig;
use grpc_client::{ChannelConfig, create_channel_lazy_with_config, create_channel_with_config};
use protos::xray::app::proxyman::command::handler_service_client::HandlerServiceClient;
use tonic::transport::Channel;

use crate::error::UserResult;
use crate::service::UserManager;

pub type XrayUserManager = UserManager<HandlerServiceClient<Channel>>;

/// A session with one Xray API endpoint
///
/// Owns the gRPC channel; dropping the session closes it.
#[derive(Debug, Clone)]
pub struct XrayServer {
    users: XrayUserManager,
}

fn channel_config(config: &XrayApiConfig) -> ChannelConfig {
    let channel = ChannelConfig::new()
        .with_connect_timeout(config.connect_timeout)
        .with_request_timeout(config.request_timeout);

    match config.keep_alive {
        Some(interval) => channel.with_keep_alive_interval(interval),
        None => channel.without_keep_alive(),
    }
}

impl XrayServer {
    /// Connect eagerly; fails if the API is unreachable
    pub async fn connect(config: &XrayApiConfig) -> UserResult<Self> {
        let channel = create_channel_with_config(config.endpoint(), channel_config(config)).await?;
        tracing::info!(addr = %config.address(), "Connected to Xray API");
        Ok(Self::from_channel(channel, config))
    }

    /// Build the session without connecting; the first RPC establishes the connection
    pub fn connect_lazy(config: &XrayApiConfig) -> UserResult<Self> {
        let channel = create_channel_lazy_with_config(config.endpoint(), channel_config(config))?;
        Ok(Self::from_channel(channel, config))
    }

    /// Wrap an already established channel
    pub fn from_channel(channel: Channel, config: &XrayApiConfig) -> Self {
        let users = UserManager::new(HandlerServiceClient::new(channel))
            .with_default_tag(config.inbound_tag.clone());
        Self { users }
    }

    pub fn users(&self) -> &XrayUserManager {
        &self.users
    }
}
