use std::io::{self, Stdout};
use std::sync::mpsc;

use anyhow::Context;
use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use scribe_core::{update, AppState, Msg};
use scribe_logging::{scribe_debug, scribe_error, scribe_info};

use super::clipboard::SystemClipboard;
use super::config::AppConfig;
use super::effects::EffectRunner;
use super::logging;
use super::ui::constants::POLL_INTERVAL;
use super::ui::cursor::HistoryCursor;
use super::ui::keymap::{self, UiAction};
use super::ui::render;

type Term = Terminal<CrosstermBackend<Stdout>>;

pub fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    logging::initialize(config.log_level()?, &config.log_file);
    let settings = config.client_settings()?;
    scribe_info!("scribe starting, service at {}", settings.base_url());

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let mut effects = EffectRunner::new(settings, Box::new(SystemClipboard::new()), msg_tx.clone())
        .context("starting request engine")?;

    let mut terminal = TerminalGuard::enter().context("preparing terminal")?;
    let result = event_loop(&mut terminal.terminal, &mut effects, &msg_tx, &msg_rx);
    drop(terminal);

    effects.shutdown();
    if let Err(err) = &result {
        scribe_error!("scribe stopped with error: {:#}", err);
    } else {
        scribe_info!("scribe stopped");
    }
    result
}

fn event_loop(
    terminal: &mut Term,
    effects: &mut EffectRunner,
    msg_tx: &mpsc::Sender<Msg>,
    msg_rx: &mpsc::Receiver<Msg>,
) -> anyhow::Result<()> {
    let mut state = AppState::new();
    let mut cursor = HistoryCursor::default();
    let mut redraw = true;
    let _ = msg_tx.send(Msg::Started);

    loop {
        while let Ok(msg) = msg_rx.try_recv() {
            scribe_debug!("msg {}", msg);
            let (next, new_effects) = update(state, msg);
            state = next;
            effects.enqueue(new_effects);
        }

        if state.consume_dirty() || redraw {
            let view = state.view();
            terminal
                .draw(|frame| render::draw(frame, &view, &cursor))
                .context("drawing frame")?;
            redraw = false;
        }

        if !event::poll(POLL_INTERVAL).context("polling terminal")? {
            continue;
        }
        let view = state.view();
        match event::read().context("reading terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match keymap::translate(key, &view, &cursor) {
                    Some(UiAction::Dispatch(msg)) => {
                        let _ = msg_tx.send(msg);
                    }
                    Some(UiAction::MoveCursor(delta)) => {
                        cursor.move_by(delta, &view);
                        redraw = true;
                    }
                    Some(UiAction::Quit) => return Ok(()),
                    None => {}
                }
            }
            Event::Paste(text) => {
                if let Some(msg) = keymap::paste(&text, &view) {
                    let _ = msg_tx.send(msg);
                }
            }
            Event::Resize(_, _) => redraw = true,
            _ => {}
        }
    }
}

/// Raw mode plus alternate screen for as long as it lives.
struct TerminalGuard {
    terminal: Term,
}

impl TerminalGuard {
    fn enter() -> anyhow::Result<Self> {
        let terminal = with_rollback(
            || {
                enable_raw_mode()?;
                execute!(io::stdout(), EnterAlternateScreen, EnableBracketedPaste)
            },
            || Terminal::new(CrosstermBackend::new(io::stdout())),
            restore_terminal,
        )?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
        let _ = self.terminal.show_cursor();
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
}

/// Runs `enter` then `build`. If either fails, `leave` runs before the error is returned.
fn with_rollback<T>(
    enter: impl FnOnce() -> io::Result<()>,
    build: impl FnOnce() -> io::Result<T>,
    leave: impl FnOnce(),
) -> io::Result<T> {
    match enter().and_then(|()| build()) {
        Ok(value) => Ok(value),
        Err(err) => {
            leave();
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn failing() -> io::Error {
        io::Error::other("no tty")
    }

    #[test]
    fn rollback_runs_when_build_fails() {
        let left = Cell::new(0);
        let result: io::Result<()> =
            with_rollback(|| Ok(()), || Err(failing()), || left.set(left.get() + 1));

        assert!(result.is_err());
        assert_eq!(left.get(), 1);
    }

    #[test]
    fn rollback_runs_when_enter_fails_and_skips_build() {
        let left = Cell::new(0);
        let built = Cell::new(false);
        let result = with_rollback(
            || Err(failing()),
            || {
                built.set(true);
                Ok(())
            },
            || left.set(left.get() + 1),
        );

        assert!(result.is_err());
        assert!(!built.get());
        assert_eq!(left.get(), 1);
    }

    #[test]
    fn success_keeps_terminal_entered() {
        let left = Cell::new(0);
        let result = with_rollback(|| Ok(()), || Ok(7), || left.set(left.get() + 1));

        assert_eq!(result.unwrap(), 7);
        assert_eq!(left.get(), 0);
    }
}
