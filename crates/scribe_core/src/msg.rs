use std::fmt;

use crate::{CopyTag, RequestId, Task};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// App finished setting up; kicks off the service probe.
    Started,
    /// User edited the input of a task.
    InputChanged { task: Task, text: String },
    /// User pressed the task's action button.
    SubmitClicked(Task),
    /// Engine delivered the response for a request.
    RequestSucceeded {
        task: Task,
        request_id: RequestId,
        output: String,
    },
    /// Engine reported a failed request. `server_message` is the service's own
    /// error text when it sent one.
    RequestFailed {
        task: Task,
        request_id: RequestId,
        server_message: Option<String>,
    },
    ClearClicked(Task),
    HistoryEntrySelected { task: Task, index: usize },
    CopyRequested { value: String, tag: CopyTag },
    /// Copy-indicator timer fired for the given copy generation.
    CopyIndicatorExpired { generation: u64 },
    ClipboardWriteFailed { reason: String },
    /// Result of probing the service origin: greeting on success, reason on failure.
    ServiceProbed(Result<String, String>),
    ThemeToggled,
    SidebarToggled,
    TabSelected(Task),
}

/// Log-safe rendering: text payloads are reduced to their length.
impl fmt::Display for Msg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Msg::Started => write!(f, "Started"),
            Msg::InputChanged { task, text } => {
                write!(f, "InputChanged {task:?} ({} chars)", text.chars().count())
            }
            Msg::SubmitClicked(task) => write!(f, "SubmitClicked {task:?}"),
            Msg::RequestSucceeded {
                task,
                request_id,
                output,
            } => write!(
                f,
                "RequestSucceeded {task:?} request_id={request_id} ({} chars)",
                output.chars().count()
            ),
            Msg::RequestFailed {
                task,
                request_id,
                server_message,
            } => write!(
                f,
                "RequestFailed {task:?} request_id={request_id} server_message={}",
                server_message.is_some()
            ),
            Msg::ClearClicked(task) => write!(f, "ClearClicked {task:?}"),
            Msg::HistoryEntrySelected { task, index } => {
                write!(f, "HistoryEntrySelected {task:?} index={index}")
            }
            Msg::CopyRequested { value, tag } => {
                write!(f, "CopyRequested {tag:?} ({} chars)", value.chars().count())
            }
            Msg::CopyIndicatorExpired { generation } => {
                write!(f, "CopyIndicatorExpired generation={generation}")
            }
            Msg::ClipboardWriteFailed { reason } => write!(f, "ClipboardWriteFailed: {reason}"),
            Msg::ServiceProbed(Ok(_)) => write!(f, "ServiceProbed ok"),
            Msg::ServiceProbed(Err(reason)) => write!(f, "ServiceProbed failed: {reason}"),
            Msg::ThemeToggled => write!(f, "ThemeToggled"),
            Msg::SidebarToggled => write!(f, "SidebarToggled"),
            Msg::TabSelected(task) => write!(f, "TabSelected {task:?}"),
        }
    }
}
