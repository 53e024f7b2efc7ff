/// One of the two operations the remote service offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Task {
    #[default]
    Summarize,
    Generate,
}

impl Task {
    pub const ALL: [Task; 2] = [Task::Summarize, Task::Generate];

    pub fn other(self) -> Task {
        match self {
            Task::Summarize => Task::Generate,
            Task::Generate => Task::Summarize,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Task::Summarize => "Text Summarization",
            Task::Generate => "Content Generation",
        }
    }

    pub fn input_label(self) -> &'static str {
        match self {
            Task::Summarize => "Text",
            Task::Generate => "Prompt",
        }
    }

    pub fn result_label(self) -> &'static str {
        match self {
            Task::Summarize => "Summary",
            Task::Generate => "Generated Text",
        }
    }

    pub fn action_label(self, loading: bool) -> &'static str {
        match (self, loading) {
            (Task::Summarize, false) => "Summarize",
            (Task::Summarize, true) => "Summarizing...",
            (Task::Generate, false) => "Generate Content",
            (Task::Generate, true) => "Generating...",
        }
    }

    pub fn empty_input_message(self) -> &'static str {
        match self {
            Task::Summarize => "Please enter text to summarize!",
            Task::Generate => "Please enter a prompt for content generation!",
        }
    }

    /// Shown when a request fails and the service gave no usable message.
    pub fn fallback_error(self) -> &'static str {
        match self {
            Task::Summarize => "Failed to summarize text. Please try again.",
            Task::Generate => "Failed to generate content. Please try again.",
        }
    }

    /// Clipboard tag for this task's result.
    pub fn result_tag(self) -> CopyTag {
        match self {
            Task::Summarize => CopyTag::Summary,
            Task::Generate => CopyTag::GeneratedText,
        }
    }
}

/// Which value the copy indicator is confirming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyTag {
    Summary,
    GeneratedText,
}
