use crate::view_model::{AppViewModel, HistoryRowView, TaskPanelView};
use crate::{preview, CopyTag, HistoryEntry, RecentHistory, Task, PREVIEW_CHARS};

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ServiceStatus {
    #[default]
    Unknown,
    Reachable(String),
    Unreachable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PendingRequest {
    pub(crate) request_id: RequestId,
    /// Input as submitted; later edits do not change what history records.
    pub(crate) input: String,
}

/// Everything one task panel shows, plus its recent history.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct TaskPanel {
    pub(crate) input: String,
    pub(crate) output: String,
    pub(crate) error: Option<String>,
    /// Request in flight; `Some` exactly while loading.
    pub(crate) in_flight: Option<PendingRequest>,
    pub(crate) history: RecentHistory,
}

impl TaskPanel {
    pub(crate) fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    fn view(&self, task: Task) -> TaskPanelView {
        let loading = self.is_loading();
        TaskPanelView {
            task,
            input: self.input.clone(),
            input_chars: self.input.chars().count(),
            output: self.output.clone(),
            output_chars: self.output.chars().count(),
            error: self.error.clone(),
            loading,
            action_label: task.action_label(loading),
            history: self
                .history
                .iter()
                .enumerate()
                .map(|(index, entry)| HistoryRowView {
                    index,
                    input_preview: preview(&entry.original_input, PREVIEW_CHARS),
                    result_preview: preview(&entry.result, PREVIEW_CHARS),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    summarize: TaskPanel,
    generate: TaskPanel,
    active_tab: Task,
    dark_mode: bool,
    sidebar_open: bool,
    copied: Option<CopyTag>,
    copy_generation: u64,
    next_request_id: RequestId,
    service: ServiceStatus,
    clipboard_notice: Option<String>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            summarize: TaskPanel::default(),
            generate: TaskPanel::default(),
            active_tab: Task::Summarize,
            dark_mode: false,
            sidebar_open: true,
            copied: None,
            copy_generation: 0,
            next_request_id: 1,
            service: ServiceStatus::Unknown,
            clipboard_notice: None,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            active_tab: self.active_tab,
            dark_mode: self.dark_mode,
            sidebar_open: self.sidebar_open,
            summarize: self.summarize.view(Task::Summarize),
            generate: self.generate.view(Task::Generate),
            copied: self.copied,
            service: self.service.clone(),
            clipboard_notice: self.clipboard_notice.clone(),
        }
    }

    /// Returns whether anything changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn active_tab(&self) -> Task {
        self.active_tab
    }

    pub fn is_loading(&self, task: Task) -> bool {
        self.panel(task).is_loading()
    }

    pub fn history(&self, task: Task) -> &RecentHistory {
        &self.panel(task).history
    }

    pub fn copied(&self) -> Option<CopyTag> {
        self.copied
    }

    pub(crate) fn panel(&self, task: Task) -> &TaskPanel {
        match task {
            Task::Summarize => &self.summarize,
            Task::Generate => &self.generate,
        }
    }

    pub(crate) fn panel_mut(&mut self, task: Task) -> &mut TaskPanel {
        self.dirty = true;
        match task {
            Task::Summarize => &mut self.summarize,
            Task::Generate => &mut self.generate,
        }
    }

    pub(crate) fn set_input(&mut self, task: Task, text: String) {
        let panel = self.panel_mut(task);
        panel.input = text;
    }

    /// Marks the task as loading with its current input and returns the new request id.
    pub(crate) fn begin_request(&mut self, task: Task) -> (RequestId, String) {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        let panel = self.panel_mut(task);
        let input = panel.input.clone();
        panel.error = None;
        panel.in_flight = Some(PendingRequest {
            request_id,
            input: input.clone(),
        });
        (request_id, input)
    }

    /// Takes the in-flight request if `request_id` is the one the task is waiting for.
    pub(crate) fn finish_request(&mut self, task: Task, request_id: RequestId) -> Option<String> {
        match &self.panel(task).in_flight {
            Some(pending) if pending.request_id == request_id => {}
            _ => return None,
        }
        self.panel_mut(task)
            .in_flight
            .take()
            .map(|pending| pending.input)
    }

    pub(crate) fn record_success(&mut self, task: Task, submitted: String, output: String) {
        let panel = self.panel_mut(task);
        panel.error = None;
        panel
            .history
            .push(HistoryEntry::new(submitted, output.clone()));
        panel.output = output;
    }

    pub(crate) fn set_error(&mut self, task: Task, message: impl Into<String>) {
        self.panel_mut(task).error = Some(message.into());
    }

    pub(crate) fn clear_task(&mut self, task: Task) {
        let panel = self.panel_mut(task);
        panel.input.clear();
        panel.output.clear();
        panel.error = None;
    }

    /// Restores a history entry into its task and activates that task.
    pub(crate) fn recall(&mut self, task: Task, index: usize) -> bool {
        let Some(entry) = self.panel(task).history.get(index).cloned() else {
            return false;
        };
        let panel = self.panel_mut(task);
        panel.input = entry.original_input;
        panel.output = entry.result;
        panel.error = None;
        self.active_tab = task;
        true
    }

    pub(crate) fn set_active_tab(&mut self, task: Task) {
        if self.active_tab != task {
            self.active_tab = task;
            self.dirty = true;
        }
    }

    pub(crate) fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.dirty = true;
    }

    pub(crate) fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
        self.dirty = true;
    }

    /// Shows the indicator for `tag` and returns the generation the reset timer must carry.
    pub(crate) fn mark_copied(&mut self, tag: CopyTag) -> u64 {
        self.copy_generation += 1;
        self.copied = Some(tag);
        self.clipboard_notice = None;
        self.dirty = true;
        self.copy_generation
    }

    pub(crate) fn expire_copied(&mut self, generation: u64) {
        if generation == self.copy_generation && self.copied.is_some() {
            self.copied = None;
            self.dirty = true;
        }
    }

    pub(crate) fn clipboard_failed(&mut self, reason: String) {
        self.copied = None;
        self.clipboard_notice = Some(reason);
        self.dirty = true;
    }

    pub(crate) fn set_service(&mut self, status: ServiceStatus) {
        self.service = status;
        self.dirty = true;
    }
}
