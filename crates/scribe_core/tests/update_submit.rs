use std::sync::Once;

use pretty_assertions::assert_eq;
use scribe_core::{update, AppState, Effect, HistoryEntry, Msg, Task};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(scribe_logging::initialize_for_tests);
}

fn type_and_submit(state: AppState, task: Task, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(
        state,
        Msg::InputChanged {
            task,
            text: input.to_string(),
        },
    );
    update(state, Msg::SubmitClicked(task))
}

fn request_id_of(effects: &[Effect]) -> u64 {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::SubmitRequest { request_id, .. } => Some(*request_id),
            _ => None,
        })
        .expect("submit effect")
}

#[test]
fn non_empty_text_issues_exactly_one_request() {
    init_logging();
    let (mut state, effects) = type_and_submit(AppState::new(), Task::Summarize, "some text");

    assert_eq!(
        effects,
        vec![Effect::SubmitRequest {
            request_id: 1,
            task: Task::Summarize,
            input: "some text".to_string(),
        }]
    );
    let view = state.view();
    assert!(view.summarize.loading);
    assert_eq!(view.summarize.action_label, "Summarizing...");
    assert_eq!(view.summarize.error, None);
    assert!(!view.generate.loading);
    assert!(state.consume_dirty());
}

#[test]
fn whitespace_only_text_fails_locally() {
    init_logging();
    let (state, effects) = type_and_submit(AppState::new(), Task::Summarize, "  \n\t ");

    assert!(effects.is_empty());
    let view = state.view();
    assert!(!view.summarize.loading);
    assert_eq!(
        view.summarize.error.as_deref(),
        Some("Please enter text to summarize!")
    );
    assert_eq!(view.generate.error, None);
}

#[test]
fn empty_prompt_sets_generation_error_without_request() {
    init_logging();
    let (state, effects) = type_and_submit(AppState::new(), Task::Generate, "");

    assert!(effects.is_empty());
    assert_eq!(
        state.view().generate.error.as_deref(),
        Some("Please enter a prompt for content generation!")
    );
}

#[test]
fn successful_summary_updates_result_and_history() {
    init_logging();
    let input = "The quick brown fox...";
    let (state, effects) = type_and_submit(AppState::new(), Task::Summarize, input);
    let request_id = request_id_of(&effects);

    let (state, effects) = update(
        state,
        Msg::RequestSucceeded {
            task: Task::Summarize,
            request_id,
            output: "A fox story.".to_string(),
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.summarize.output, "A fox story.");
    assert_eq!(view.summarize.output_chars, 12);
    assert!(!view.summarize.loading);
    assert_eq!(view.summarize.action_label, "Summarize");
    assert_eq!(
        state.history(Task::Summarize).get(0),
        Some(&HistoryEntry::new(input, "A fox story."))
    );
    assert!(state.history(Task::Generate).is_empty());
}

#[test]
fn generate_uses_generate_request() {
    init_logging();
    let (state, effects) = type_and_submit(AppState::new(), Task::Generate, "a poem");
    assert_eq!(
        effects,
        vec![Effect::SubmitRequest {
            request_id: 1,
            task: Task::Generate,
            input: "a poem".to_string(),
        }]
    );

    let (state, _) = update(
        state,
        Msg::RequestSucceeded {
            task: Task::Generate,
            request_id: 1,
            output: "Roses are red".to_string(),
        },
    );
    let view = state.view();
    assert_eq!(view.generate.output, "Roses are red");
    assert_eq!(view.generate.history.len(), 1);
    assert_eq!(view.summarize.output, "");
}

#[test]
fn server_error_message_is_shown_verbatim() {
    init_logging();
    let (state, effects) = type_and_submit(AppState::new(), Task::Summarize, "text");
    let request_id = request_id_of(&effects);

    let (state, _) = update(
        state,
        Msg::RequestFailed {
            task: Task::Summarize,
            request_id,
            server_message: Some("rate limited".to_string()),
        },
    );

    let view = state.view();
    assert_eq!(view.summarize.error.as_deref(), Some("rate limited"));
    assert!(!view.summarize.loading);
    assert!(state.history(Task::Summarize).is_empty());
}

#[test]
fn blank_server_message_uses_fallback() {
    init_logging();
    let (state, effects) = type_and_submit(AppState::new(), Task::Summarize, "some text");
    let request_id = request_id_of(&effects);

    let (state, _) = update(
        state,
        Msg::RequestFailed {
            task: Task::Summarize,
            request_id,
            server_message: Some("  \n\t ".to_string()),
        },
    );

    assert_eq!(
        state.view().summarize.error.as_deref(),
        Some("Failed to summarize text. Please try again.")
    );
    assert!(!state.is_loading(Task::Summarize));
}

#[test]
fn failure_without_server_message_uses_fallback() {
    init_logging();
    let (state, effects) = type_and_submit(AppState::new(), Task::Generate, "prompt");
    let request_id = request_id_of(&effects);

    let (state, _) = update(
        state,
        Msg::RequestFailed {
            task: Task::Generate,
            request_id,
            server_message: None,
        },
    );

    assert_eq!(
        state.view().generate.error.as_deref(),
        Some("Failed to generate content. Please try again.")
    );
}

#[test]
fn new_request_clears_previous_error_and_success_keeps_it_cleared() {
    init_logging();
    let (state, _) = type_and_submit(AppState::new(), Task::Summarize, "");
    assert!(state.view().summarize.error.is_some());

    let (state, effects) = type_and_submit(state, Task::Summarize, "now with text");
    assert_eq!(state.view().summarize.error, None);

    let (state, _) = update(
        state,
        Msg::RequestSucceeded {
            task: Task::Summarize,
            request_id: request_id_of(&effects),
            output: "short".to_string(),
        },
    );
    assert_eq!(state.view().summarize.error, None);
}

#[test]
fn submit_while_loading_is_ignored() {
    init_logging();
    let (state, first) = type_and_submit(AppState::new(), Task::Summarize, "text");
    assert_eq!(first.len(), 1);

    let (state, second) = update(state, Msg::SubmitClicked(Task::Summarize));
    assert!(second.is_empty());
    assert!(state.is_loading(Task::Summarize));
}

#[test]
fn both_tasks_can_be_in_flight_together() {
    init_logging();
    let (state, summarize) = type_and_submit(AppState::new(), Task::Summarize, "text");
    let (state, generate) = type_and_submit(state, Task::Generate, "prompt");

    assert_eq!(request_id_of(&summarize), 1);
    assert_eq!(request_id_of(&generate), 2);
    assert!(state.is_loading(Task::Summarize));
    assert!(state.is_loading(Task::Generate));

    let (state, _) = update(
        state,
        Msg::RequestSucceeded {
            task: Task::Generate,
            request_id: 2,
            output: "done".to_string(),
        },
    );
    assert!(state.is_loading(Task::Summarize));
    assert!(!state.is_loading(Task::Generate));
}

#[test]
fn stale_response_is_dropped() {
    init_logging();
    let (state, _) = type_and_submit(AppState::new(), Task::Summarize, "text");

    let (state, _) = update(
        state,
        Msg::RequestSucceeded {
            task: Task::Summarize,
            request_id: 99,
            output: "stray".to_string(),
        },
    );

    let view = state.view();
    assert!(view.summarize.loading);
    assert_eq!(view.summarize.output, "");
    assert!(view.summarize.history.is_empty());
}

#[test]
fn history_records_submitted_input_not_later_edits() {
    init_logging();
    let (state, effects) = type_and_submit(AppState::new(), Task::Summarize, "original");
    let (state, _) = update(
        state,
        Msg::InputChanged {
            task: Task::Summarize,
            text: "edited while waiting".to_string(),
        },
    );
    let (state, _) = update(
        state,
        Msg::RequestSucceeded {
            task: Task::Summarize,
            request_id: request_id_of(&effects),
            output: "result".to_string(),
        },
    );

    assert_eq!(
        state.history(Task::Summarize).get(0),
        Some(&HistoryEntry::new("original", "result"))
    );
    assert_eq!(state.view().summarize.input, "edited while waiting");
}

#[test]
fn started_probes_service() {
    let (_, effects) = update(AppState::new(), Msg::Started);
    assert_eq!(effects, vec![Effect::ProbeService]);
}
