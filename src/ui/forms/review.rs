//! Review step: read-only summary with the save and submit actions

use crate::app::App;
use crate::document::sections::{build_sections, Entry, Section};
use crate::state::FieldId;
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the summary (left) and action panel (right)
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Summary
            Constraint::Length(26), // Action panel
        ])
        .split(area);

    draw_summary(frame, chunks[0], app);
    draw_action_panel(frame, chunks[1], app);
}

fn draw_summary(frame: &mut Frame, area: Rect, app: &App) {
    let sections = build_sections(app.state.wizard.form());
    let block = Block::default()
        .title(format!(" {} ", app.state.wizard.step().heading()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(summary_lines(&sections))
        .wrap(Wrap { trim: false })
        .scroll((app.state.review_scroll, 0))
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Summary text in the same order as the printed document
pub fn summary_lines(sections: &[Section]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for section in sections {
        lines.push(Line::from(Span::styled(
            section.title.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for entry in &section.entries {
            match entry {
                Entry::Field { label, value } => lines.push(Line::from(vec![
                    Span::styled(format!("  {label}: "), Style::default().fg(Color::Gray)),
                    Span::raw(value.clone()),
                ])),
                Entry::Spacer => lines.push(Line::from("")),
            }
        }
        lines.push(Line::from(""));
    }
    lines
}

fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Save PDF
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),
        ])
        .split(inner);

    let active = app.state.active_field_id();
    render_action_button(
        frame,
        chunks[0],
        &FieldId::SaveDocument.label(),
        active == Some(FieldId::SaveDocument),
        None,
    );
    render_action_button(
        frame,
        chunks[1],
        &FieldId::Submit.label(),
        active == Some(FieldId::Submit),
        Some(Color::Green),
    );

    let note = Paragraph::new(
        "Submitting sends the form, photos, documents and the PDF summary.",
    )
    .style(Style::default().fg(Color::DarkGray))
    .wrap(Wrap { trim: true });
    frame.render_widget(note, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_summary_lines_follow_sections() {
        let sections = vec![Section {
            title: "Personal Information / தனிப்பட்ட தகவல்".to_string(),
            entries: vec![
                Entry::Field {
                    label: "Name / பெயர்".to_string(),
                    value: "Kumar".to_string(),
                },
                Entry::Spacer,
            ],
        }];

        let lines = summary_lines(&sections);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].to_string(), "Personal Information / தனிப்பட்ட தகவல்");
        assert_eq!(lines[1].to_string(), "  Name / பெயர்: Kumar");
        assert_eq!(lines[2].to_string(), "");
    }
}
