use core_config::xray::DEFAULT_INBOUND_TAG;

use crate::builders::{
    build_account, build_add_operation, build_alter_request, build_remove_operation,
    build_users_query,
};
use crate::error::{UserError, UserResult};
use crate::listing::unwrap_users;
use crate::models::{CreateUser, CreatedUser, InboundUsers, RawInboundUser, RemoveUser, UserFilter};
use crate::transport::HandlerTransport;
use crate::validation::{IdentifierPolicy, resolve_identifier, validate_identity};

/// Facade over the HandlerService for managing an inbound's users
///
/// Holds no mutable state: each operation validates, builds its request and
/// performs exactly one RPC over the shared transport.
#[derive(Debug, Clone)]
pub struct UserManager<T> {
    transport: T,
    default_tag: String,
    identifier_policy: IdentifierPolicy,
}

impl<T: HandlerTransport> UserManager<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            default_tag: DEFAULT_INBOUND_TAG.to_string(),
            identifier_policy: IdentifierPolicy::default(),
        }
    }

    /// Inbound tag used when a request does not name one
    pub fn with_default_tag(mut self, tag: impl Into<String>) -> Self {
        self.default_tag = tag.into();
        self
    }

    pub fn with_identifier_policy(mut self, policy: IdentifierPolicy) -> Self {
        self.identifier_policy = policy;
        self
    }

    pub fn default_tag(&self) -> &str {
        &self.default_tag
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn tag_or_default<'a>(&'a self, tag: Option<&'a str>) -> &'a str {
        tag.unwrap_or(&self.default_tag)
    }

    /// Add a VLESS user to an inbound
    ///
    /// Validation happens before any RPC, so invalid input never reaches Xray.
    /// Transport failures are logged and returned.
    #[tracing::instrument(skip_all, fields(email = %input.email))]
    pub async fn create(&self, input: CreateUser) -> UserResult<CreatedUser> {
        let email = validate_identity(&input.email)?;
        let uuid = resolve_identifier(input.uuid.as_deref(), self.identifier_policy)?;
        let tag = self.tag_or_default(input.tag.as_deref());

        let operation = build_add_operation(&email, build_account(&uuid));
        let request = build_alter_request(tag, operation);

        match self.transport.alter_inbound(request).await {
            Ok(_) => {
                tracing::info!(email = %email, uuid = %uuid, tag = %tag, "Created user");
                Ok(CreatedUser { uuid, email })
            }
            Err(status) => {
                let err = UserError::from(status);
                tracing::error!(code = ?err.code(), error = %err, "Can't add user");
                Err(err)
            }
        }
    }

    /// List the users of an inbound, decoding their accounts
    ///
    /// Best-effort: a failed RPC yields an empty listing and a corrupt account
    /// yields a `null` value for that user only.
    /// An account of a type other than VLESS fails the whole call.
    #[tracing::instrument(skip_all, fields(tag = ?filter.tag))]
    pub async fn get(&self, filter: UserFilter) -> UserResult<InboundUsers> {
        let tag = self.tag_or_default(filter.tag.as_deref());
        let request = build_users_query(tag, filter.email.as_deref());

        let response = match self.transport.get_inbound_users(request).await {
            Ok(response) => response,
            Err(status) => {
                let err = UserError::from(status);
                tracing::warn!(code = ?err.code(), error = %err, "Can't get user(s)");
                return Ok(InboundUsers::default());
            }
        };

        let raw_users = response.users.into_iter().map(RawInboundUser::from).collect();
        unwrap_users(raw_users)
    }

    /// Remove a user from an inbound
    ///
    /// Removing a user Xray does not know is a no-op, not an error.
    #[tracing::instrument(skip_all, fields(email = %input.email))]
    pub async fn remove(&self, input: RemoveUser) -> UserResult<()> {
        let email = validate_identity(&input.email)?;
        let tag = self.tag_or_default(input.tag.as_deref());

        let request = build_alter_request(tag, build_remove_operation(&email));

        match self.transport.alter_inbound(request).await {
            Ok(_) => {
                tracing::info!(email = %email, tag = %tag, "Removed user");
                Ok(())
            }
            Err(status) => {
                let err = UserError::from(status);
                if err.is_not_found() {
                    tracing::warn!(
                        email = %email,
                        tag = %tag,
                        "User not found in inbound, nothing to remove (ignored)"
                    );
                    return Ok(());
                }
                tracing::error!(code = ?err.code(), error = %err, "Can't remove user");
                Err(err)
            }
        }
    }
}
