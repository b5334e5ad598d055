// @generated
// This file is @generated by prost-build.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct AddUserOperation {
    #[prost(message, optional, tag = "1")]
    pub user: ::core::option::Option<super::super::super::common::protocol::User>,
}
impl ::prost::Name for AddUserOperation {
    const NAME: &'static str = "AddUserOperation";
    const PACKAGE: &'static str = "xray.app.proxyman.command";
    fn full_name() -> ::prost::alloc::string::String {
        "xray.app.proxyman.command.AddUserOperation".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "/xray.app.proxyman.command.AddUserOperation".into()
    }
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct RemoveUserOperation {
    #[prost(string, tag = "1")]
    pub email: ::prost::alloc::string::String,
}
impl ::prost::Name for RemoveUserOperation {
    const NAME: &'static str = "RemoveUserOperation";
    const PACKAGE: &'static str = "xray.app.proxyman.command";
    fn full_name() -> ::prost::alloc::string::String {
        "xray.app.proxyman.command.RemoveUserOperation".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "/xray.app.proxyman.command.RemoveUserOperation".into()
    }
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct AlterInboundRequest {
    #[prost(string, tag = "1")]
    pub tag: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub operation: ::core::option::Option<
        super::super::super::common::serial::TypedMessage,
    >,
}
impl ::prost::Name for AlterInboundRequest {
    const NAME: &'static str = "AlterInboundRequest";
    const PACKAGE: &'static str = "xray.app.proxyman.command";
    fn full_name() -> ::prost::alloc::string::String {
        "xray.app.proxyman.command.AlterInboundRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "/xray.app.proxyman.command.AlterInboundRequest".into()
    }
}
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct AlterInboundResponse {}
impl ::prost::Name for AlterInboundResponse {
    const NAME: &'static str = "AlterInboundResponse";
    const PACKAGE: &'static str = "xray.app.proxyman.command";
    fn full_name() -> ::prost::alloc::string::String {
        "xray.app.proxyman.command.AlterInboundResponse".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "/xray.app.proxyman.command.AlterInboundResponse".into()
    }
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct GetInboundUserRequest {
    #[prost(string, tag = "1")]
    pub tag: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub email: ::prost::alloc::string::String,
}
impl ::prost::Name for GetInboundUserRequest {
    const NAME: &'static str = "GetInboundUserRequest";
    const PACKAGE: &'static str = "xray.app.proxyman.command";
    fn full_name() -> ::prost::alloc::string::String {
        "xray.app.proxyman.command.GetInboundUserRequest".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "/xray.app.proxyman.command.GetInboundUserRequest".into()
    }
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct GetInboundUserResponse {
    #[prost(message, repeated, tag = "1")]
    pub users: ::prost::alloc::vec::Vec<
        super::super::super::common::protocol::User,
    >,
}
impl ::prost::Name for GetInboundUserResponse {
    const NAME: &'static str = "GetInboundUserResponse";
    const PACKAGE: &'static str = "xray.app.proxyman.command";
    fn full_name() -> ::prost::alloc::string::String {
        "xray.app.proxyman.command.GetInboundUserResponse".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "/xray.app.proxyman.command.GetInboundUserResponse".into()
    }
}
