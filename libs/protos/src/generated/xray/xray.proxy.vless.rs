// @generated
// This file is @generated by prost-build.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Account {
    /// ID of the account, in the form of a UUID, e.g., "66ad4540-b58c-4ad2-9926-ea63445a9b57".
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    /// Flow settings. May be "xtls-rprx-vision".
    #[prost(string, tag = "2")]
    pub flow: ::prost::alloc::string::String,
    /// Encryption settings. Only applies to client side, and only accepts "none" for now.
    #[prost(string, tag = "3")]
    pub encryption: ::prost::alloc::string::String,
}
impl ::prost::Name for Account {
    const NAME: &'static str = "Account";
    const PACKAGE: &'static str = "xray.proxy.vless";
    fn full_name() -> ::prost::alloc::string::String {
        "xray.proxy.vless.Account".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "/xray.proxy.vless.Account".into()
    }
}
