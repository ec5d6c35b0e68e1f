use derive_more::Display;

/// Message shown for every failed prediction request, whatever the cause.
pub const GENERIC_FAILURE: &str = "Prediction failed. Check backend or network.";

#[derive(Debug, Clone, PartialEq, Display)]
pub enum ClientError {
    #[display(fmt = "Please upload an image first.")]
    NoFileSelected,
    #[display(fmt = "{}", GENERIC_FAILURE)]
    RequestFailed(FailureCause),
}

impl std::error::Error for ClientError {}

/// Underlying reason a request failed. Kept for logs; only the status detail
/// is ever shown to the user.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum FailureCause {
    #[display(fmt = "server responded {}: {}", status, detail)]
    Status { status: u16, detail: String },
    #[display(fmt = "malformed response: {}", _0)]
    Malformed(String),
    #[display(fmt = "network error: {}", _0)]
    Network(String),
}

impl ClientError {
    /// Builds the error for a non-2xx response. An empty body falls back to
    /// the status code.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = match body.trim() {
            "" => format!("HTTP {}", status),
            _ => body.to_string(),
        };
        ClientError::RequestFailed(FailureCause::Status { status, detail })
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        ClientError::RequestFailed(FailureCause::Malformed(reason.into()))
    }

    pub fn network(reason: impl Into<String>) -> Self {
        ClientError::RequestFailed(FailureCause::Network(reason.into()))
    }

    /// Server-authored text safe to show under the generic message.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ClientError::RequestFailed(FailureCause::Status { detail, .. }) => Some(detail),
            _ => None,
        }
    }

    pub fn cause(&self) -> Option<&FailureCause> {
        match self {
            ClientError::RequestFailed(cause) => Some(cause),
            ClientError::NoFileSelected => None,
        }
    }
}
