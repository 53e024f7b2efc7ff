use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph, Tabs, Wrap};
use ratatui::Frame;
use scribe_core::{AppViewModel, ServiceStatus, Task, TaskPanelView};

use super::constants::{APP_TITLE, HEADER_HEIGHT, KEY_HINTS, SIDEBAR_WIDTH, STATUS_HEIGHT};
use super::cursor::HistoryCursor;
use super::theme::Palette;

/// Renders the whole screen from the view model.
pub fn draw(frame: &mut Frame, view: &AppViewModel, cursor: &HistoryCursor) {
    let palette = Palette::for_mode(view.dark_mode);
    let area = frame.area();
    frame.render_widget(
        Block::new().style(Style::new().bg(palette.background).fg(palette.foreground)),
        area,
    );

    let [header, body, status] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .areas(area);

    draw_header(frame, header, view, &palette);
    let main = if view.sidebar_open {
        let [sidebar, main] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .areas(body);
        draw_sidebar(frame, sidebar, view, cursor, &palette);
        main
    } else {
        body
    };
    draw_panel(frame, main, view, &palette);
    draw_status(frame, status, view, &palette);
}

fn bordered(title: impl Into<Line<'static>>, palette: &Palette) -> Block<'static> {
    Block::bordered()
        .title(title)
        .border_style(Style::new().fg(palette.border))
}

fn draw_header(frame: &mut Frame, area: Rect, view: &AppViewModel, palette: &Palette) {
    let selected = Task::ALL
        .iter()
        .position(|&task| task == view.active_tab)
        .unwrap_or(0);
    let titles: Vec<Line> = Task::ALL.iter().map(|task| Line::from(task.title())).collect();
    let theme = format!(" theme: {} ", Palette::label(view.dark_mode));

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::new().fg(palette.muted))
        .highlight_style(
            Style::new()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .block(bordered(APP_TITLE, palette).title(Line::from(theme).right_aligned()));
    frame.render_widget(tabs, area);
}

fn draw_sidebar(
    frame: &mut Frame,
    area: Rect,
    view: &AppViewModel,
    cursor: &HistoryCursor,
    palette: &Palette,
) {
    let mut items = Vec::new();
    for task in Task::ALL {
        for row in &view.panel(task).history {
            items.push(ListItem::new(vec![
                Line::from(Span::styled(
                    format!("{} {}", task.input_label(), row.input_preview),
                    Style::new().fg(palette.foreground),
                )),
                Line::from(Span::styled(
                    format!("  {}", row.result_preview),
                    Style::new().fg(palette.muted),
                )),
            ]));
        }
    }

    let block = bordered(" History ", palette);
    if items.is_empty() {
        let empty = Paragraph::new(Span::styled("No history yet", Style::new().fg(palette.muted)))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let selected = cursor
        .selected(view)
        .and_then(|target| HistoryCursor::rows(view).iter().position(|row| *row == target));
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::new().bg(palette.highlight));
    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_panel(frame: &mut Frame, area: Rect, view: &AppViewModel, palette: &Palette) {
    let panel = view.active_panel();
    let [input, action, output] = Layout::vertical([
        Constraint::Percentage(45),
        Constraint::Length(2),
        Constraint::Min(3),
    ])
    .areas(area);

    let input_title = format!(" {} ({} chars) ", panel.task.input_label(), panel.input_chars);
    let input_widget = Paragraph::new(panel.input.as_str())
        .wrap(Wrap { trim: false })
        .block(bordered(input_title, palette));
    frame.render_widget(input_widget, input);

    frame.render_widget(Paragraph::new(action_lines(panel, palette)), action);

    let mut output_block = bordered(
        format!(" {} ({} chars) ", panel.task.result_label(), panel.output_chars),
        palette,
    );
    if view.copied == Some(panel.task.result_tag()) {
        output_block = output_block.title(
            Line::from(Span::styled(" Copied! ", Style::new().fg(palette.success)))
                .right_aligned(),
        );
    }
    let output_widget = Paragraph::new(panel.output.as_str())
        .wrap(Wrap { trim: false })
        .block(output_block);
    frame.render_widget(output_widget, output);
}

fn action_lines(panel: &TaskPanelView, palette: &Palette) -> Vec<Line<'static>> {
    let action_style = if panel.loading {
        Style::new().fg(palette.muted).add_modifier(Modifier::ITALIC)
    } else {
        Style::new().fg(palette.accent).add_modifier(Modifier::BOLD)
    };
    let mut lines = vec![Line::from(Span::styled(
        format!("[ {} ]", panel.action_label),
        action_style,
    ))];
    if let Some(error) = &panel.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::new().fg(palette.error),
        )));
    }
    lines
}

fn draw_status(frame: &mut Frame, area: Rect, view: &AppViewModel, palette: &Palette) {
    let service = match &view.service {
        ServiceStatus::Unknown => Span::styled("service: checking", Style::new().fg(palette.muted)),
        ServiceStatus::Reachable(message) => Span::styled(
            format!("service: {message}"),
            Style::new().fg(palette.success),
        ),
        ServiceStatus::Unreachable(reason) => Span::styled(
            format!("service unreachable: {reason}"),
            Style::new().fg(palette.error),
        ),
    };
    let mut spans = vec![service];
    if let Some(notice) = &view.clipboard_notice {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(notice.clone(), Style::new().fg(palette.error)));
    }

    let status = Paragraph::new(Line::from(spans)).block(
        bordered(Line::default(), palette)
            .title_bottom(Line::from(Span::styled(KEY_HINTS, Style::new().fg(palette.muted)))),
    );
    frame.render_widget(status, area);
}
