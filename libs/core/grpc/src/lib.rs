//! # gRPC Client Library
//!
//! Channel creation for talking to the Xray gRPC API with HTTP/2 tuning
//! suited to a long-lived control-plane connection.
//!
//! Only channel construction lives here. Generated stubs come from the
//! `protos` crate and the user-management logic from `domain_xray_users`.
//!
//! ## Quick Start
//!
//! ```ignore
//! use grpc_client::{create_channel_with_config, ChannelConfig};
//! use protos::xray::app::proxyman::command::handler_service_client::HandlerServiceClient;
//!
//! let channel = create_channel_with_config("http://127.0.0.1:10085", ChannelConfig::default()).await?;
//! let client = HandlerServiceClient::new(channel);
//! ```
//!
//! ### With Custom Configuration
//! ```ignore
//! use grpc_client::{create_channel_lazy_with_config, ChannelConfig};
//! use std::time::Duration;
//!
//! let config = ChannelConfig::default()
//!     .with_connect_timeout(Duration::from_secs(10))
//!     .with_request_timeout(Duration::from_secs(60));
//!
//! // Connects on the first RPC
//! let channel = create_channel_lazy_with_config("http://127.0.0.1:10085", config)?;
//! ```

pub mod channel;
pub mod error;

pub use channel::{ChannelConfig, create_channel_lazy_with_config, create_channel_with_config};
pub use error::{GrpcError, GrpcResult};
