use std::time::Duration;

use crate::{RequestId, Task};

/// How long the "copied" confirmation stays visible.
pub const COPY_INDICATOR_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST the input to the task's endpoint; the outcome comes back as
    /// `Msg::RequestSucceeded` or `Msg::RequestFailed` with the same id.
    SubmitRequest {
        request_id: RequestId,
        task: Task,
        input: String,
    },
    /// Probe the service origin once at startup.
    ProbeService,
    WriteClipboard { text: String },
    /// Replace any pending indicator timer; fire `Msg::CopyIndicatorExpired` after `after`.
    ScheduleCopyReset { generation: u64, after: Duration },
}
