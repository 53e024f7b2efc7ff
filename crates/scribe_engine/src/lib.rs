//! Scribe engine: HTTP calls to the summarize/generate service and effect execution.
mod client;
mod engine;
mod timer;
mod types;
mod wire;

pub use client::{ApiClient, ClientSettings, ReqwestApiClient};
pub use engine::{ChannelEventSink, EngineError, EngineHandle, EventSink};
pub use timer::CopyTimer;
pub use types::{ApiError, Endpoint, EngineEvent, FailureKind, RequestId};
