use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use scribe_core::{AppViewModel, Msg, Task};

use super::cursor::HistoryCursor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Dispatch(Msg),
    /// Moves the sidebar selection; purely local to the UI.
    MoveCursor(isize),
    Quit,
}

/// Maps a key press to what the app should do, given what is on screen.
pub fn translate(key: KeyEvent, view: &AppViewModel, cursor: &HistoryCursor) -> Option<UiAction> {
    let active = view.active_tab;
    let panel = view.active_panel();
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    let msg = match key.code {
        KeyCode::Esc => return Some(UiAction::Quit),
        KeyCode::Char('q' | 'c') if ctrl => return Some(UiAction::Quit),
        KeyCode::Char('l') if ctrl => Msg::ClearClicked(active),
        KeyCode::Char('y') if ctrl => Msg::CopyRequested {
            value: panel.output.clone(),
            tag: active.result_tag(),
        },
        KeyCode::Char('t') if ctrl => Msg::ThemeToggled,
        KeyCode::Char('b') if ctrl => Msg::SidebarToggled,
        KeyCode::Char('r') if ctrl => {
            if !view.sidebar_open {
                return None;
            }
            let (task, index) = cursor.selected(view)?;
            Msg::HistoryEntrySelected { task, index }
        }
        KeyCode::Up if view.sidebar_open => return Some(UiAction::MoveCursor(-1)),
        KeyCode::Down if view.sidebar_open => return Some(UiAction::MoveCursor(1)),
        KeyCode::Tab | KeyCode::BackTab => Msg::TabSelected(active.other()),
        KeyCode::F(1) => Msg::TabSelected(Task::Summarize),
        KeyCode::F(2) => Msg::TabSelected(Task::Generate),
        KeyCode::Enter if alt || key.modifiers.contains(KeyModifiers::SHIFT) => {
            edit(active, &panel.input, |text| text.push('\n'))
        }
        KeyCode::Enter => Msg::SubmitClicked(active),
        KeyCode::Backspace => {
            if panel.input.is_empty() {
                return None;
            }
            edit(active, &panel.input, |text| {
                text.pop();
            })
        }
        KeyCode::Char(c) if !ctrl && !alt => edit(active, &panel.input, |text| text.push(c)),
        _ => return None,
    };
    Some(UiAction::Dispatch(msg))
}

/// Appends pasted text to the active input.
pub fn paste(text: &str, view: &AppViewModel) -> Option<Msg> {
    if text.is_empty() {
        return None;
    }
    let panel = view.active_panel();
    // Terminals deliver pasted newlines as carriage returns.
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    Some(edit(view.active_tab, &panel.input, |input| {
        input.push_str(&normalized)
    }))
}

fn edit(task: Task, current: &str, change: impl FnOnce(&mut String)) -> Msg {
    let mut text = current.to_string();
    change(&mut text);
    Msg::InputChanged { task, text }
}
