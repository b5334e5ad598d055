//! `TypedMessage` envelope: a type name plus the serialized message.
//!
//! There is no registry mapping type names to decoders. Each call site picks
//! the message type it expects and decodes with it, so the tag only tells
//! Xray which decoder to use on its side.

use prost::Message;
use protos::xray::common::serial::TypedMessage;

use crate::error::UserResult;

/// Serialize `message` and tag it with `type_tag`.
pub fn wrap<M: Message>(type_tag: &str, message: &M) -> TypedMessage {
    TypedMessage {
        r#type: type_tag.to_string(),
        value: message.encode_to_vec(),
    }
}

/// Decode the payload bytes as `M`, ignoring the tag.
pub fn unwrap<M: Message + Default>(payload: &TypedMessage) -> UserResult<M> {
    Ok(M::decode(payload.value.as_slice())?)
}
