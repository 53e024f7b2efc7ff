use scribe_core::{update, AppState, Msg, ServiceStatus, Task};

#[test]
fn defaults_show_light_summarize_with_sidebar() {
    let view = AppState::new().view();

    assert!(!view.dark_mode);
    assert!(view.sidebar_open);
    assert_eq!(view.active_tab, Task::Summarize);
    assert_eq!(view.copied, None);
    assert_eq!(view.service, ServiceStatus::Unknown);
}

#[test]
fn theme_and_sidebar_toggle_back_and_forth() {
    let (state, effects) = update(AppState::new(), Msg::ThemeToggled);
    assert!(effects.is_empty());
    assert!(state.view().dark_mode);

    let (state, _) = update(state, Msg::ThemeToggled);
    assert!(!state.view().dark_mode);

    let (state, _) = update(state, Msg::SidebarToggled);
    assert!(!state.view().sidebar_open);
    let (mut state, _) = update(state, Msg::SidebarToggled);
    assert!(state.view().sidebar_open);
    assert!(state.consume_dirty());
}

#[test]
fn selecting_current_tab_is_not_a_change() {
    let (mut state, _) = update(AppState::new(), Msg::TabSelected(Task::Summarize));
    assert!(!state.consume_dirty());

    let (mut state, _) = update(state, Msg::TabSelected(Task::Generate));
    assert!(state.consume_dirty());
    assert_eq!(state.active_tab(), Task::Generate);
    assert_eq!(state.view().active_panel().task, Task::Generate);
}

#[test]
fn probe_outcome_sets_service_status() {
    let (state, _) = update(
        AppState::new(),
        Msg::ServiceProbed(Ok("Welcome".to_string())),
    );
    assert_eq!(
        state.view().service,
        ServiceStatus::Reachable("Welcome".to_string())
    );

    let (state, _) = update(
        state,
        Msg::ServiceProbed(Err("connection refused".to_string())),
    );
    assert_eq!(
        state.view().service,
        ServiceStatus::Unreachable("connection refused".to_string())
    );
}
