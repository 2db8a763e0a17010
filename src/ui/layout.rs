//! Layout components (header, sidebar, status bar)

use super::components::{render_step_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::platform::{NEXT_STEP_SHORTCUT, PREV_STEP_SHORTCUT, SAVE_SHORTCUT};
use crate::state::{FieldKind, Step, StepController};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

/// Header height: step caption + progress gauge
const HEADER_HEIGHT: u16 = 2;

/// Split into sidebar, header and main content
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20), // Sidebar
            Constraint::Min(0),     // Main content
        ])
        .split(area);

    // Reserve bottom line for status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Progress
            Constraint::Min(0),                // Content
            Constraint::Length(1),             // Status bar
        ])
        .split(chunks[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Sidebar content
            Constraint::Length(1), // Status bar continuation
        ])
        .split(chunks[0]);

    (sidebar_chunks[0], main_chunks[0], main_chunks[1])
}

/// Draw the step list as boxed buttons
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints = vec![Constraint::Min(0)]; // Top padding (flex)
    constraints.extend(Step::ALL.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0)); // Bottom padding (flex)

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let current = app.state.wizard.step();
    for (idx, step) in Step::ALL.iter().enumerate() {
        render_step_button(
            frame,
            chunks[idx + 1],
            step.number(),
            step.title(),
            *step == current,
        );
    }
}

/// Draw the step caption and the completion gauge
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let steps = app.state.wizard.steps();
    let completion = app.state.wizard.completion();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let caption = Line::from(vec![
        Span::styled(
            format!(" Step {} of {} ", steps.current(), steps.total()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {completion}% Complete / முடிந்தது"),
            Style::default().fg(Color::Gray),
        ),
    ]);
    frame.render_widget(Paragraph::new(caption), chunks[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .percent(u16::from(completion.min(100)))
        .label("");
    frame.render_widget(gauge, chunks[1]);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::raw(" ")];

    let kind = app.state.active_field_id().map(|f| f.kind());
    let hints = get_hints(app.state.wizard.steps(), kind);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));

    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current step and focused field
fn get_hints(steps: &StepController, kind: Option<FieldKind>) -> String {
    let mut nav = vec!["Tab:next".to_string()];
    if !steps.is_last() {
        nav.push(format!("PgDn/{NEXT_STEP_SHORTCUT}:step"));
    }
    if !steps.is_first() {
        nav.push(format!("PgUp/{PREV_STEP_SHORTCUT}:back"));
    }
    let field = match kind {
        _ if steps.step() == Step::Review => "Enter:run  wheel:scroll",
        Some(FieldKind::Choice) => "←/→:choose",
        Some(FieldKind::Toggle) => "Space:toggle",
        Some(FieldKind::Action) => "Enter:run",
        Some(FieldKind::Multiline) => "Enter:newline  Del:clear",
        Some(_) => "type to edit  Del:clear",
        None => "",
    };
    format!("{}  {field}  {SAVE_SHORTCUT}:save PDF", nav.join("  "))
}
