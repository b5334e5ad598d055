use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use serde::{Deserialize, Serialize};

use protos::xray::common::protocol::User;
use protos::xray::common::serial::TypedMessage;
use protos::xray::proxy::vless::Account;

/// Input for adding a user to an inbound
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUser {
    pub email: String,
    /// UUID v4 to use as the VLESS id; generated when absent
    pub uuid: Option<String>,
    /// Target inbound; the manager's default tag when absent
    pub tag: Option<String>,
}

impl CreateUser {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            uuid: None,
            tag: None,
        }
    }

    pub fn with_uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = Some(uuid.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// Result of a successful create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedUser {
    pub uuid: String,
    pub email: String,
}

/// Listing query; the email filter is passed to Xray unvalidated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub tag: Option<String>,
    pub email: Option<String>,
}

impl UserFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Input for removing a user from an inbound
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveUser {
    pub email: String,
    pub tag: Option<String>,
}

impl RemoveUser {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            tag: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// Decoded VLESS account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VlessAccount {
    pub id: String,
    pub flow: String,
    pub encryption: String,
}

impl From<Account> for VlessAccount {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            flow: account.flow,
            encryption: account.encryption,
        }
    }
}

/// Account payload as listed, before decoding: the type tag plus the
/// serialized account as base64 text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedPayload {
    #[serde(rename = "type")]
    pub type_tag: String,
    pub value: String,
}

impl From<TypedMessage> for EncodedPayload {
    fn from(message: TypedMessage) -> Self {
        Self {
            type_tag: message.r#type,
            value: BASE64.encode(message.value),
        }
    }
}

/// User entry as returned by `GetInboundUsers`, account still encoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInboundUser {
    pub level: u32,
    pub email: String,
    pub account: Option<EncodedPayload>,
}

impl From<User> for RawInboundUser {
    fn from(user: User) -> Self {
        Self {
            level: user.level,
            email: user.email,
            account: user.account.map(EncodedPayload::from),
        }
    }
}

/// Account field after decoding; `value` is `None` when the payload was corrupt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountField {
    #[serde(rename = "type")]
    pub type_tag: String,
    pub value: Option<VlessAccount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundUser {
    pub level: u32,
    pub email: String,
    pub account: Option<AccountField>,
}

/// Users of one inbound in server order; empty when the listing failed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundUsers {
    pub users: Vec<InboundUser>,
}

impl InboundUsers {
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn find(&self, email: &str) -> Option<&InboundUser> {
        self.users.iter().find(|user| user.email == email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_builder() {
        let input = CreateUser::new("user@example.com")
            .with_uuid("66ad4540-b58c-4ad2-9926-ea63445a9b57")
            .with_tag("vless-in");
        assert_eq!(input.email, "user@example.com");
        assert_eq!(input.uuid.as_deref(), Some("66ad4540-b58c-4ad2-9926-ea63445a9b57"));
        assert_eq!(input.tag.as_deref(), Some("vless-in"));
    }

    #[test]
    fn test_raw_user_from_proto_encodes_payload() {
        let user = User {
            level: 0,
            email: "user@example.com".to_string(),
            account: Some(TypedMessage {
                r#type: "xray.proxy.vless.Account".to_string(),
                value: vec![0x0a, 0x01, b'x'],
            }),
        };

        let raw = RawInboundUser::from(user);
        let account = raw.account.unwrap();
        assert_eq!(account.type_tag, "xray.proxy.vless.Account");
        assert_eq!(account.value, "CgF4");
    }

    #[test]
    fn test_listing_serializes_null_account_value() {
        let users = InboundUsers {
            users: vec![InboundUser {
                level: 0,
                email: "user@example.com".to_string(),
                account: Some(AccountField {
                    type_tag: "xray.proxy.vless.Account".to_string(),
                    value: None,
                }),
            }],
        };

        let json = serde_json::to_value(&users).unwrap();
        assert_eq!(json["users"][0]["account"]["type"], "xray.proxy.vless.Account");
        assert!(json["users"][0]["account"]["value"].is_null());
    }
}
