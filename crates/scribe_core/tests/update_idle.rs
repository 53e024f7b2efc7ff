use scribe_core::{update, AppState, Msg, Task};

#[test]
fn completion_for_idle_task_changes_nothing() {
    let state = AppState::new();
    let (mut next, effects) = update(
        state.clone(),
        Msg::RequestSucceeded {
            task: Task::Summarize,
            request_id: 1,
            output: "unexpected".to_string(),
        },
    );

    assert_eq!(state, next);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}

#[test]
fn expiry_without_copy_changes_nothing() {
    let state = AppState::new();
    let (mut next, effects) = update(state.clone(), Msg::CopyIndicatorExpired { generation: 0 });

    assert_eq!(state, next);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}
