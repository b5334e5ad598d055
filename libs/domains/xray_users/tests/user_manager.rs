//! End-to-end behaviour of `UserManager` against a recording transport.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use domain_xray_users::builders::{ADD_USER_OPERATION_TYPE, VLESS_ACCOUNT_TYPE, build_account};
use domain_xray_users::typed_message::unwrap;
use domain_xray_users::{
    CreateUser, HandlerTransport, IdentifierPolicy, RemoveUser, UserError, UserFilter,
    UserManager, is_identifier_v4,
};
use protos::xray::app::proxyman::command::{
    AddUserOperation, AlterInboundRequest, AlterInboundResponse, GetInboundUserRequest,
    GetInboundUserResponse,
};
use protos::xray::common::protocol::User;
use protos::xray::common::serial::TypedMessage;
use protos::xray::proxy::vless::Account;
use tonic::{Code, Status};

const KNOWN_UUID: &str = "66ad4540-b58c-4ad2-9926-ea63445a9b57";

/// Transport double that records requests and replays a scripted outcome.
#[derive(Default)]
struct RecordingTransport {
    alter_calls: AtomicUsize,
    list_calls: AtomicUsize,
    alter_requests: Mutex<Vec<AlterInboundRequest>>,
    list_requests: Mutex<Vec<GetInboundUserRequest>>,
    alter_error: Option<(Code, &'static str)>,
    list_error: Option<(Code, &'static str)>,
    users: Vec<User>,
}

impl RecordingTransport {
    fn failing_alter(code: Code, message: &'static str) -> Self {
        Self {
            alter_error: Some((code, message)),
            ..Default::default()
        }
    }

    fn failing_list(code: Code, message: &'static str) -> Self {
        Self {
            list_error: Some((code, message)),
            ..Default::default()
        }
    }

    fn with_users(users: Vec<User>) -> Self {
        Self {
            users,
            ..Default::default()
        }
    }

    fn rpc_count(&self) -> usize {
        self.alter_calls.load(Ordering::SeqCst) + self.list_calls.load(Ordering::SeqCst)
    }

    fn last_alter(&self) -> AlterInboundRequest {
        self.alter_requests.lock().unwrap().last().cloned().unwrap()
    }

    fn last_list(&self) -> GetInboundUserRequest {
        self.list_requests.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl HandlerTransport for RecordingTransport {
    async fn alter_inbound(
        &self,
        request: AlterInboundRequest,
    ) -> Result<AlterInboundResponse, Status> {
        self.alter_calls.fetch_add(1, Ordering::SeqCst);
        self.alter_requests.lock().unwrap().push(request);
        match self.alter_error {
            Some((code, message)) => Err(Status::new(code, message)),
            None => Ok(AlterInboundResponse {}),
        }
    }

    async fn get_inbound_users(
        &self,
        request: GetInboundUserRequest,
    ) -> Result<GetInboundUserResponse, Status> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.list_requests.lock().unwrap().push(request);
        match self.list_error {
            Some((code, message)) => Err(Status::new(code, message)),
            None => Ok(GetInboundUserResponse {
                users: self.users.clone(),
            }),
        }
    }
}

fn vless_user(email: &str, account: TypedMessage) -> User {
    User {
        level: 0,
        email: email.to_string(),
        account: Some(account),
    }
}

#[tokio::test]
async fn create_then_list_round_trip() {
    let manager = UserManager::new(RecordingTransport::default());

    let created = manager
        .create(CreateUser::new("User@Example.com"))
        .await
        .unwrap();
    assert_eq!(created.email, "user@example.com");
    assert!(is_identifier_v4(&created.uuid));

    let request = manager.transport().last_alter();
    assert_eq!(request.tag, "main-inbound");
    assert_eq!(
        request.operation.as_ref().map(|op| op.r#type.as_str()),
        Some(ADD_USER_OPERATION_TYPE)
    );
    let operation: AddUserOperation = unwrap(request.operation.as_ref().unwrap()).unwrap();
    let user = operation.user.unwrap();
    assert_eq!(user.email, created.email);
    assert_eq!(user.level, 0);

    let account_message = user.account.unwrap();
    assert_eq!(account_message.r#type, VLESS_ACCOUNT_TYPE);
    let account: Account = unwrap(&account_message).unwrap();
    assert_eq!(account.id, created.uuid);
    assert_eq!(account.flow, "xtls-rprx-vision");
    assert_eq!(account.encryption, "none");
}

#[tokio::test]
async fn invalid_identity_never_reaches_transport() {
    let manager = UserManager::new(RecordingTransport::default());

    for bad in ["BAD EMAIL", "user@localhost", "user@", "@example.com"] {
        let err = manager.create(CreateUser::new(bad)).await.unwrap_err();
        assert!(matches!(err, UserError::InvalidIdentity { .. }));

        let err = manager.remove(RemoveUser::new(bad)).await.unwrap_err();
        assert!(matches!(err, UserError::InvalidIdentity { .. }));
    }

    assert_eq!(manager.transport().rpc_count(), 0);
}

#[tokio::test]
async fn supplied_identifier_is_kept_or_replaced() {
    let manager = UserManager::new(RecordingTransport::default());

    let kept = manager
        .create(CreateUser::new("a@example.com").with_uuid(KNOWN_UUID))
        .await
        .unwrap();
    assert_eq!(kept.uuid, KNOWN_UUID);

    let replaced = manager
        .create(CreateUser::new("b@example.com").with_uuid("12345"))
        .await
        .unwrap();
    assert_ne!(replaced.uuid, "12345");
    assert!(is_identifier_v4(&replaced.uuid));

    let canonical = manager
        .create(CreateUser::new("c@example.com").with_uuid(format!("urn:uuid:{KNOWN_UUID}")))
        .await
        .unwrap();
    assert_eq!(canonical.uuid, KNOWN_UUID);
}

#[tokio::test]
async fn strict_policy_rejects_before_rpc() {
    let manager = UserManager::new(RecordingTransport::default())
        .with_identifier_policy(IdentifierPolicy::Reject);

    let err = manager
        .create(CreateUser::new("a@example.com").with_uuid("12345"))
        .await
        .unwrap_err();
    assert!(matches!(err, UserError::InvalidIdentifier(_)));
    assert_eq!(manager.transport().rpc_count(), 0);
}

#[tokio::test]
async fn create_failure_surfaces_status() {
    let manager = UserManager::new(RecordingTransport::failing_alter(
        Code::Unknown,
        "app/proxyman/inbound: User a@example.com already exists.",
    ));

    let err = manager
        .create(CreateUser::new("a@example.com"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), Some(Code::Unknown));
    assert_eq!(manager.transport().rpc_count(), 1);
}

#[tokio::test]
async fn remove_is_idempotent_for_unknown_user() {
    let manager = UserManager::new(RecordingTransport::failing_alter(
        Code::Unknown,
        "app/proxyman/inbound: User ghost@example.com Not Found.",
    ));

    manager
        .remove(RemoveUser::new("ghost@example.com"))
        .await
        .unwrap();
    manager
        .remove(RemoveUser::new("ghost@example.com"))
        .await
        .unwrap();
    assert_eq!(manager.transport().rpc_count(), 2);
}

#[tokio::test]
async fn remove_surfaces_other_failures() {
    for (code, message) in [
        (Code::Unavailable, "connection refused"),
        (Code::NotFound, "handler not found"),
        (Code::Unknown, "permission denied"),
    ] {
        let manager = UserManager::new(RecordingTransport::failing_alter(code, message));
        let err = manager
            .remove(RemoveUser::new("a@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some(code));
    }
}

#[tokio::test]
async fn remove_targets_requested_inbound() {
    let manager = UserManager::new(RecordingTransport::default()).with_default_tag("vless-in");

    manager
        .remove(RemoveUser::new("Someone@Example.com").with_tag("other-in"))
        .await
        .unwrap();

    let request = manager.transport().last_alter();
    assert_eq!(request.tag, "other-in");
}

#[tokio::test]
async fn listing_degrades_to_empty_on_failure() {
    let manager = UserManager::new(RecordingTransport::failing_list(
        Code::Unavailable,
        "connection refused",
    ));

    let listing = manager.get(UserFilter::new()).await.unwrap();
    assert!(listing.is_empty());
    assert_eq!(manager.transport().rpc_count(), 1);
}

#[tokio::test]
async fn listing_isolates_corrupt_accounts() {
    let manager = UserManager::new(RecordingTransport::with_users(vec![
        vless_user("good@example.com", build_account(KNOWN_UUID)),
        vless_user(
            "bad@example.com",
            TypedMessage {
                r#type: VLESS_ACCOUNT_TYPE.to_string(),
                value: vec![0xff, 0xff],
            },
        ),
    ]));

    let listing = manager.get(UserFilter::new()).await.unwrap();
    assert_eq!(listing.len(), 2);

    let good = listing.find("good@example.com").unwrap();
    let account = good.account.as_ref().unwrap().value.as_ref().unwrap();
    assert_eq!(account.id, KNOWN_UUID);

    let bad = listing.find("bad@example.com").unwrap();
    assert!(bad.account.as_ref().unwrap().value.is_none());
}

#[tokio::test]
async fn listing_forwards_filter() {
    let manager = UserManager::new(RecordingTransport::default());

    manager
        .get(UserFilter::new().with_tag("vless-in").with_email("x@example.com"))
        .await
        .unwrap();

    let request = manager.transport().last_list();
    assert_eq!(request.tag, "vless-in");
    assert_eq!(request.email, "x@example.com");
}
