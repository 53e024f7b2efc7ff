use crate::{CopyTag, ServiceStatus, Task};

/// Characters kept in history previews before the ellipsis.
pub const PREVIEW_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub active_tab: Task,
    pub dark_mode: bool,
    pub sidebar_open: bool,
    pub summarize: TaskPanelView,
    pub generate: TaskPanelView,
    pub copied: Option<CopyTag>,
    pub service: ServiceStatus,
    pub clipboard_notice: Option<String>,
}

impl AppViewModel {
    pub fn panel(&self, task: Task) -> &TaskPanelView {
        match task {
            Task::Summarize => &self.summarize,
            Task::Generate => &self.generate,
        }
    }

    pub fn active_panel(&self) -> &TaskPanelView {
        self.panel(self.active_tab)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPanelView {
    pub task: Task,
    pub input: String,
    pub input_chars: usize,
    pub output: String,
    pub output_chars: usize,
    pub error: Option<String>,
    pub loading: bool,
    pub action_label: &'static str,
    pub history: Vec<HistoryRowView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRowView {
    pub index: usize,
    pub input_preview: String,
    pub result_preview: String,
}

/// Single-line preview: newlines folded to spaces, cut at `max_chars` with a trailing `...`.
pub fn preview(text: &str, max_chars: usize) -> String {
    let flat: String = text
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let head: String = flat.chars().take(max_chars).collect();
    format!("{}...", head.trim_end())
}

#[cfg(test)]
mod tests {
    use super::preview;

    #[test]
    fn short_text_kept_as_is() {
        assert_eq!(preview("short", 10), "short");
    }

    #[test]
    fn long_text_is_cut_on_char_boundary() {
        let text = "é".repeat(60);
        let out = preview(&text, 50);
        assert_eq!(out.chars().count(), 53);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn newlines_fold_into_single_line() {
        assert_eq!(preview("line one\n\n  line two", 50), "line one line two");
    }
}
