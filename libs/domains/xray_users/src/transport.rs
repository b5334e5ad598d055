use async_trait::async_trait;
use protos::xray::app::proxyman::command::{
    AlterInboundRequest, AlterInboundResponse, GetInboundUserRequest, GetInboundUserResponse,
    handler_service_client::HandlerServiceClient,
};
use tonic::Status;
use tonic::transport::Channel;

/// The two HandlerService RPCs the user manager needs
///
/// Implemented for the generated client over a tonic `Channel`. Whoever
/// builds the channel owns its lifecycle; implementations only issue calls.
/// Concurrent use is as safe as the underlying channel makes it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HandlerTransport: Send + Sync {
    async fn alter_inbound(
        &self,
        request: AlterInboundRequest,
    ) -> Result<AlterInboundResponse, Status>;

    async fn get_inbound_users(
        &self,
        request: GetInboundUserRequest,
    ) -> Result<GetInboundUserResponse, Status>;
}

#[async_trait]
impl HandlerTransport for HandlerServiceClient<Channel> {
    async fn alter_inbound(
        &self,
        request: AlterInboundRequest,
    ) -> Result<AlterInboundResponse, Status> {
        // Clones share the underlying channel
        let mut client = self.clone();
        HandlerServiceClient::alter_inbound(&mut client, request)
            .await
            .map(tonic::Response::into_inner)
    }

    async fn get_inbound_users(
        &self,
        request: GetInboundUserRequest,
    ) -> Result<GetInboundUserResponse, Status> {
        let mut client = self.clone();
        HandlerServiceClient::get_inbound_users(&mut client, request)
            .await
            .map(tonic::Response::into_inner)
    }
}
