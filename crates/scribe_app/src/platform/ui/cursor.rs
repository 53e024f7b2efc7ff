use scribe_core::{AppViewModel, Task};

/// Selection in the history sidebar, which lists summaries first, then generations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryCursor {
    position: usize,
}

impl HistoryCursor {
    /// Sidebar rows in display order as `(task, index within that task's history)`.
    pub fn rows(view: &AppViewModel) -> Vec<(Task, usize)> {
        Task::ALL
            .iter()
            .flat_map(|&task| view.panel(task).history.iter().map(move |row| (task, row.index)))
            .collect()
    }

    pub fn move_by(&mut self, delta: isize, view: &AppViewModel) {
        let count = Self::rows(view).len();
        if count == 0 {
            self.position = 0;
            return;
        }
        let current = self.position.min(count - 1);
        self.position = current.saturating_add_signed(delta).min(count - 1);
    }

    /// Selected row, clamped to what the sidebar currently shows.
    pub fn selected(&self, view: &AppViewModel) -> Option<(Task, usize)> {
        let rows = Self::rows(view);
        let last = rows.len().checked_sub(1)?;
        rows.get(self.position.min(last)).copied()
    }
}
