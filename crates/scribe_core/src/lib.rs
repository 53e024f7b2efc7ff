//! Scribe core: pure state machine and view-model helpers.
mod effect;
mod history;
mod msg;
mod state;
mod task;
mod update;
mod view_model;

pub use effect::{Effect, COPY_INDICATOR_DURATION};
pub use history::{HistoryEntry, RecentHistory, HISTORY_LIMIT};
pub use msg::Msg;
pub use state::{AppState, RequestId, ServiceStatus};
pub use task::{CopyTag, Task};
pub use update::update;
pub use view_model::{preview, AppViewModel, HistoryRowView, TaskPanelView, PREVIEW_CHARS};
