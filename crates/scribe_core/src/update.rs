use crate::{AppState, Effect, Msg, ServiceStatus, COPY_INDICATOR_DURATION};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => vec![Effect::ProbeService],
        Msg::InputChanged { task, text } => {
            state.set_input(task, text);
            Vec::new()
        }
        Msg::SubmitClicked(task) => {
            // One request per task at a time; the action is disabled while loading.
            if state.is_loading(task) {
                return (state, Vec::new());
            }
            if state.panel(task).input.trim().is_empty() {
                state.set_error(task, task.empty_input_message());
                return (state, Vec::new());
            }
            let (request_id, input) = state.begin_request(task);
            vec![Effect::SubmitRequest {
                request_id,
                task,
                input,
            }]
        }
        Msg::RequestSucceeded {
            task,
            request_id,
            output,
        } => {
            if let Some(submitted) = state.finish_request(task, request_id) {
                state.record_success(task, submitted, output);
            }
            Vec::new()
        }
        Msg::RequestFailed {
            task,
            request_id,
            server_message,
        } => {
            if state.finish_request(task, request_id).is_some() {
                let message = server_message
                    .filter(|message| !message.trim().is_empty())
                    .unwrap_or_else(|| task.fallback_error().to_string());
                state.set_error(task, message);
            }
            Vec::new()
        }
        Msg::ClearClicked(task) => {
            state.clear_task(task);
            Vec::new()
        }
        Msg::HistoryEntrySelected { task, index } => {
            state.recall(task, index);
            Vec::new()
        }
        Msg::CopyRequested { value, tag } => {
            if value.is_empty() {
                return (state, Vec::new());
            }
            let generation = state.mark_copied(tag);
            vec![
                Effect::WriteClipboard { text: value },
                Effect::ScheduleCopyReset {
                    generation,
                    after: COPY_INDICATOR_DURATION,
                },
            ]
        }
        Msg::CopyIndicatorExpired { generation } => {
            state.expire_copied(generation);
            Vec::new()
        }
        Msg::ClipboardWriteFailed { reason } => {
            state.clipboard_failed(reason);
            Vec::new()
        }
        Msg::ServiceProbed(result) => {
            state.set_service(match result {
                Ok(greeting) => ServiceStatus::Reachable(greeting),
                Err(reason) => ServiceStatus::Unreachable(reason),
            });
            Vec::new()
        }
        Msg::ThemeToggled => {
            state.toggle_theme();
            Vec::new()
        }
        Msg::SidebarToggled => {
            state.toggle_sidebar();
            Vec::new()
        }
        Msg::TabSelected(task) => {
            state.set_active_tab(task);
            Vec::new()
        }
    };

    (state, effects)
}
