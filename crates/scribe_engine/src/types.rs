use std::fmt;

use thiserror::Error;

pub use scribe_core::RequestId;

/// Remote operations the service exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Summarize,
    Generate,
}

impl Endpoint {
    /// Path relative to the configured origin.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Summarize => "summarize/",
            Endpoint::Generate => "generate/",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Summarize => write!(f, "summarize"),
            Endpoint::Generate => write!(f, "generate"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    RequestCompleted {
        request_id: RequestId,
        endpoint: Endpoint,
        result: Result<String, ApiError>,
    },
    ServiceProbed { result: Result<String, ApiError> },
    /// The copy-indicator timer scheduled for `generation` elapsed.
    CopyIndicatorExpired { generation: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
    /// Error text supplied by the service in its response body.
    pub server_message: Option<String>,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            server_message: None,
        }
    }

    pub(crate) fn with_server_message(mut self, server_message: Option<String>) -> Self {
        self.server_message = server_message;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    /// Request body could not be serialized; nothing was sent.
    RequestEncoding,
    HttpStatus(u16),
    Timeout,
    Network,
    /// 2xx response whose body carried an `error` field instead of a result.
    ServiceRejected,
    /// Body did not match the expected schema.
    MalformedResponse,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::RequestEncoding => write!(f, "request encoding failed"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::ServiceRejected => write!(f, "service rejected request"),
            FailureKind::MalformedResponse => write!(f, "malformed response"),
        }
    }
}
