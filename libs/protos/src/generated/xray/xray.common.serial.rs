// @generated
// This file is @generated by prost-build.
/// TypedMessage is a serialized proto message along with its type name.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct TypedMessage {
    /// The name of the message type, retrieved from protobuf API.
    #[prost(string, tag = "1")]
    pub r#type: ::prost::alloc::string::String,
    /// Serialized proto message.
    #[prost(bytes = "vec", tag = "2")]
    pub value: ::prost::alloc::vec::Vec<u8>,
}
impl ::prost::Name for TypedMessage {
    const NAME: &'static str = "TypedMessage";
    const PACKAGE: &'static str = "xray.common.serial";
    fn full_name() -> ::prost::alloc::string::String {
        "xray.common.serial.TypedMessage".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "/xray.common.serial.TypedMessage".into()
    }
}
