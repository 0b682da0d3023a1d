//! Draws the timer window

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::app::{Focus, WindowApp};
use crate::state::{Dialog, DialogKind, ViewState};

const WINDOW_TITLE: &str = " Timer App ";
const PROMPT: &str = "Enter time in seconds:";
const HELP: &str = "Enter start/stop · Tab focus · Esc stop · Ctrl+Q quit";

/// Render the whole window for the given view
pub fn render(frame: &mut Frame, app: &WindowApp, view: &ViewState) {
    let area = frame.area();
    let window = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(WINDOW_TITLE)
        .title_alignment(Alignment::Center);
    let inner = window.inner(area);
    frame.render_widget(window, area);

    let [prompt, field, buttons, label, help] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(Paragraph::new(PROMPT).alignment(Alignment::Center), prompt);
    render_field(frame, app, view, centered(field, 30));
    render_buttons(frame, app, view, buttons);

    let time = Paragraph::new(view.display.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(time, label.inner(ratatui::layout::Margin::new(0, 1)));
    frame.render_widget(Paragraph::new(HELP).alignment(Alignment::Center).dim(), help);

    if let Some(dialog) = &view.dialog {
        render_dialog(frame, dialog, area);
    }
}

fn render_field(frame: &mut Frame, app: &WindowApp, view: &ViewState, area: Rect) {
    let enabled = view.controls.input_enabled;
    let focused = enabled && app.focus == Focus::Input;
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else if enabled {
        Style::default()
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };

    let block = Block::default().borders(Borders::ALL).border_style(border);
    let text_area = block.inner(area);
    let text = Paragraph::new(app.input.content()).block(block);
    frame.render_widget(if enabled { text } else { text.dim() }, area);

    if focused && view.dialog.is_none() {
        let column = text_area.x + (app.input.cursor() as u16).min(text_area.width.saturating_sub(1));
        frame.set_cursor_position((column, text_area.y));
    }
}

fn render_buttons(frame: &mut Frame, app: &WindowApp, view: &ViewState, area: Rect) {
    let controls = view.controls;
    let button = |label: &str, focus: Focus| {
        let style = if !focus.is_enabled(controls) {
            Style::default().add_modifier(Modifier::DIM)
        } else if app.focus == focus {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        Span::styled(format!("[ {label} ]"), style)
    };

    let line = Line::from(vec![
        button("Start Timer", Focus::Start),
        Span::raw("   "),
        button("Stop Timer", Focus::Stop),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_dialog(frame: &mut Frame, dialog: &Dialog, area: Rect) {
    let (color, hint) = match dialog.kind {
        DialogKind::Error => (Color::Red, "Enter OK"),
        DialogKind::Info => (Color::Blue, "any key to close"),
    };
    let popup = centered(area, 44);
    let [popup] = Layout::vertical([Constraint::Length(5)]).flex(Flex::Center).areas(popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(color))
        .title(format!(" {} ", dialog.title))
        .title_bottom(Line::from(format!(" {hint} ")).right_aligned());
    let body = Paragraph::new(dialog.message.as_str())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(Clear, popup);
    frame.render_widget(body, popup);
}

/// Horizontally centre a box of `width` columns inside `area`
fn centered(area: Rect, width: u16) -> Rect {
    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    column
}
