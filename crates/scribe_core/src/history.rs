use std::collections::VecDeque;

/// Maximum number of entries kept per task.
pub const HISTORY_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub original_input: String,
    pub result: String,
}

impl HistoryEntry {
    pub fn new(original_input: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            original_input: original_input.into(),
            result: result.into(),
        }
    }
}

/// Newest-first list capped at [`HISTORY_LIMIT`]; the oldest entry is evicted on overflow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecentHistory {
    entries: VecDeque<HistoryEntry>,
}

impl RecentHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(HISTORY_LIMIT);
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}
