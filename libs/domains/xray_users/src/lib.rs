//! Xray Users Domain
//!
//! Adds, lists and removes VLESS users on an Xray inbound through the
//! `HandlerService` gRPC API.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │  XrayServer  │  ← owns the gRPC channel
//! └──────┬───────┘
//!        │
//! ┌──────▼───────┐
//! │ UserManager  │  ← validation, error mapping, one RPC per call
//! └──────┬───────┘
//!        │
//! ┌──────▼───────┐     ┌───────────┐
//! │   builders   │ ──► │ typed_msg │  ← TypedMessage envelopes
//! └──────┬───────┘     └───────────┘
//!        │
//! ┌──────▼───────┐
//! │  transport   │  ← HandlerTransport (tonic client or a test double)
//! └──────┬───────┘
//!        │
//! ┌──────▼───────┐
//! │   listing    │  ← per-user account decoding of GetInboundUsers
//! └──────────────┘
//! ```
//!
//! # Logging
//!
//! The crate only emits `tracing` events. Installing a subscriber is left to
//! the binary (see `core_config::tracing::init_tracing`).
//!
//! # Usage
//!
//! ```rust,no_run
//! use core_config::XrayApiConfig;
//! use domain_xray_users::{CreateUser, RemoveUser, UserFilter, XrayServer};
//!
//! # async fn run() -> Result<(), domain_xray_users::UserError> {
//! let server = XrayServer::connect(&XrayApiConfig::default()).await?;
//!
//! let created = server.users().create(CreateUser::new("User@Example.com")).await?;
//! let listing = server.users().get(UserFilter::new()).await?;
//! server.users().remove(RemoveUser::new(created.email)).await?;
//! # let _ = listing;
//! # Ok(())
//! # }
//! ```

pub mod builders;
pub mod error;
pub mod listing;
pub mod models;
pub mod server;
pub mod service;
pub mod transport;
pub mod typed_message;
pub mod validation;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use listing::AccountOutcome;
pub use models::{
    AccountField, CreateUser, CreatedUser, InboundUser, InboundUsers, RemoveUser, UserFilter,
    VlessAccount,
};
pub use server::{XrayServer, XrayUserManager};
pub use service::UserManager;
pub use transport::HandlerTransport;
pub use validation::{IdentifierPolicy, ensure_identifier, is_identifier_v4, validate_identity};
