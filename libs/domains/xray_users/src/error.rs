use thiserror::Error;
use tonic::Code;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Wrong email address '{input}': {reason}")]
    InvalidIdentity { input: String, reason: String },

    #[error("Invalid UUID v4 identifier '{0}'")]
    InvalidIdentifier(String),

    #[error("Xray API call failed ({:?}): {}", .0.code(), .0.message())]
    Transport(#[from] tonic::Status),

    #[error("Malformed base64 payload: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("Malformed protobuf payload: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("Xray API connection error: {0}")]
    Connection(#[from] grpc_client::GrpcError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl UserError {
    pub(crate) fn invalid_identity(input: &str, reason: impl Into<String>) -> Self {
        UserError::InvalidIdentity {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// gRPC status code for transport failures
    pub fn code(&self) -> Option<Code> {
        match self {
            UserError::Transport(status) => Some(status.code()),
            _ => None,
        }
    }

    /// Payload could not be decoded (outer base64 or inner protobuf)
    pub fn is_decode(&self) -> bool {
        matches!(self, UserError::Encoding(_) | UserError::Decode(_))
    }

    /// Xray reports a missing user as `Unknown` with "not found" in the detail text
    pub fn is_not_found(&self) -> bool {
        match self {
            UserError::Transport(status) => {
                status.code() == Code::Unknown
                    && status.message().to_lowercase().contains("not found")
            }
            _ => false,
        }
    }
}
