// @generated
// This file is @generated by prost-build.
/// User is a generic user for all protocols.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct User {
    #[prost(uint32, tag = "1")]
    pub level: u32,
    #[prost(string, tag = "2")]
    pub email: ::prost::alloc::string::String,
    /// Protocol specific account information. Must be the account proto in one of
    /// the proxies.
    #[prost(message, optional, tag = "3")]
    pub account: ::core::option::Option<super::serial::TypedMessage>,
}
impl ::prost::Name for User {
    const NAME: &'static str = "User";
    const PACKAGE: &'static str = "xray.common.protocol";
    fn full_name() -> ::prost::alloc::string::String {
        "xray.common.protocol.User".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "/xray.common.protocol.User".into()
    }
}
