//! Request construction for the HandlerService.
//!
//! Every builder is pure; inputs are validated by the caller beforehand.

use protos::xray::app::proxyman::command::{
    AddUserOperation, AlterInboundRequest, GetInboundUserRequest, RemoveUserOperation,
};
use protos::xray::common::protocol::User;
use protos::xray::common::serial::TypedMessage;
use protos::xray::proxy::vless::Account;

use crate::typed_message::wrap;

/// Type names Xray dispatches on. Must match the protobuf full names exactly.
pub const VLESS_ACCOUNT_TYPE: &str = "xray.proxy.vless.Account";
pub const ADD_USER_OPERATION_TYPE: &str = "xray.app.proxyman.command.AddUserOperation";
pub const REMOVE_USER_OPERATION_TYPE: &str = "xray.app.proxyman.command.RemoveUserOperation";

pub const VISION_FLOW: &str = "xtls-rprx-vision";
pub const NO_ENCRYPTION: &str = "none";
pub const USER_LEVEL: u32 = 0;

pub fn build_account(identifier: &str) -> TypedMessage {
    let account = Account {
        id: identifier.to_string(),
        flow: VISION_FLOW.to_string(),
        encryption: NO_ENCRYPTION.to_string(),
    };
    wrap(VLESS_ACCOUNT_TYPE, &account)
}

pub fn build_add_operation(email: &str, account: TypedMessage) -> TypedMessage {
    let operation = AddUserOperation {
        user: Some(User {
            level: USER_LEVEL,
            email: email.to_string(),
            account: Some(account),
        }),
    };
    wrap(ADD_USER_OPERATION_TYPE, &operation)
}

pub fn build_remove_operation(email: &str) -> TypedMessage {
    let operation = RemoveUserOperation {
        email: email.to_string(),
    };
    wrap(REMOVE_USER_OPERATION_TYPE, &operation)
}

pub fn build_alter_request(tag: &str, operation: TypedMessage) -> AlterInboundRequest {
    AlterInboundRequest {
        tag: tag.to_string(),
        operation: Some(operation),
    }
}

/// An absent email filter is sent as the empty string, which Xray reads as "all users".
pub fn build_users_query(tag: &str, email: Option<&str>) -> GetInboundUserRequest {
    GetInboundUserRequest {
        tag: tag.to_string(),
        email: email.unwrap_or_default().to_string(),
    }
}
