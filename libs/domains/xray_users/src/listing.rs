//! Post-processing of `GetInboundUsers` responses.
//!
//! Each user's account arrives as a nested `TypedMessage`. Decoding is done
//! per record: a corrupt payload nulls that record's account and the rest of
//! the listing is still returned.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use protos::xray::common::serial::TypedMessage;
use protos::xray::proxy::vless::Account;

use crate::builders::VLESS_ACCOUNT_TYPE;
use crate::error::{UserError, UserResult};
use crate::models::{AccountField, EncodedPayload, InboundUser, InboundUsers, RawInboundUser, VlessAccount};
use crate::typed_message::unwrap;

/// Result of decoding one user's account payload
#[derive(Debug)]
pub enum AccountOutcome {
    Decoded(VlessAccount),
    Corrupt(UserError),
}

impl AccountOutcome {
    pub fn into_account(self) -> Option<VlessAccount> {
        match self {
            AccountOutcome::Decoded(account) => Some(account),
            AccountOutcome::Corrupt(_) => None,
        }
    }
}

/// Decode base64 text, then the bytes as a VLESS account.
///
/// A payload tagged with any other account type is `Unexpected`: the inbound
/// is not a VLESS one and its accounts cannot be read by this crate.
pub fn decode_account(payload: &EncodedPayload) -> UserResult<VlessAccount> {
    if payload.type_tag != VLESS_ACCOUNT_TYPE {
        return Err(UserError::Unexpected(format!(
            "unsupported account type '{}'",
            payload.type_tag
        )));
    }

    let bytes = BASE64.decode(&payload.value)?;
    let message = TypedMessage {
        r#type: payload.type_tag.clone(),
        value: bytes,
    };
    let account: Account = unwrap(&message)?;
    Ok(account.into())
}

/// Decode failures become `Corrupt`; any other error is returned as-is.
pub fn resolve_account(payload: &EncodedPayload) -> UserResult<AccountOutcome> {
    match decode_account(payload) {
        Ok(account) => Ok(AccountOutcome::Decoded(account)),
        Err(err) if err.is_decode() => Ok(AccountOutcome::Corrupt(err)),
        Err(err) => Err(err),
    }
}

/// Replace every encoded account with its decoded form.
///
/// Stops at the first non-decode error without processing the remaining users.
pub fn unwrap_users(raw_users: Vec<RawInboundUser>) -> UserResult<InboundUsers> {
    let mut users = Vec::with_capacity(raw_users.len());

    for raw in raw_users {
        let account = match raw.account {
            Some(payload) => {
                let value = match resolve_account(&payload)? {
                    AccountOutcome::Decoded(account) => Some(account),
                    AccountOutcome::Corrupt(err) => {
                        tracing::warn!(
                            email = %raw.email,
                            error = %err,
                            "Failed to decode/parse account for user"
                        );
                        None
                    }
                };
                Some(AccountField {
                    type_tag: payload.type_tag,
                    value,
                })
            }
            None => None,
        };

        users.push(InboundUser {
            level: raw.level,
            email: raw.email,
            account,
        });
    }

    Ok(InboundUsers { users })
}
