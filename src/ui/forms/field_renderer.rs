//! Field rendering utilities for forms

use crate::state::{FieldId, FieldKind, FormState};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field occupies, borders included
pub fn field_height(kind: FieldKind) -> u16 {
    match kind {
        FieldKind::Multiline => 5,
        FieldKind::Action => BUTTON_HEIGHT,
        _ => 3,
    }
}

/// Draw one field of the registration form
pub fn draw_field(frame: &mut Frame, area: Rect, field: FieldId, form: &FormState, is_active: bool) {
    let kind = field.kind();
    if kind == FieldKind::Action {
        let accent = if field.label().starts_with('-') {
            Color::Red
        } else {
            Color::Green
        };
        render_action_button(frame, area, &field.label(), is_active, Some(accent));
        return;
    }

    let read_only = field.is_read_only(form);
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let style = if read_only {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let value = field.value(form);
    let content = match kind {
        FieldKind::Choice => {
            let shown = if value.is_empty() {
                "Select / தேர்ந்தெடுக்கவும்".to_string()
            } else {
                value
            };
            if is_active {
                Paragraph::new(Line::from(vec![
                    Span::styled("◀ ", Style::default().fg(Color::Cyan)),
                    Span::styled(shown, style),
                    Span::styled(" ▶", Style::default().fg(Color::Cyan)),
                ]))
            } else {
                Paragraph::new(Line::from(Span::styled(shown, style)))
            }
        }
        FieldKind::Toggle => Paragraph::new(Line::from(Span::styled(value, style))),
        FieldKind::Multiline => Paragraph::new(text_lines(&value, style, is_active && !read_only)),
        _ => {
            let display = if value.is_empty() && !is_active {
                "(empty)".to_string()
            } else {
                value
            };
            let mut spans = vec![Span::styled(display, style)];
            if is_active && !read_only {
                spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
            }
            Paragraph::new(Line::from(spans))
        }
    };

    let title = if read_only {
        format!(" {} (same as mobile) ", field.label())
    } else {
        format!(" {} ", field.label())
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

fn text_lines(value: &str, style: Style, with_cursor: bool) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = value
        .split('\n')
        .map(|l| Line::from(Span::styled(l.to_string(), style)))
        .collect();
    if with_cursor {
        let cursor = Span::styled("▌", Style::default().fg(Color::Cyan));
        match lines.last_mut() {
            Some(last) => last.spans.push(cursor),
            None => lines.push(Line::from(cursor)),
        }
    }
    lines
}

/// Index of the first field to draw so that `active` is on screen. Scrolls
/// only as far as needed.
pub fn first_visible(heights: &[u16], active: usize, available: u16) -> usize {
    let Some(&active_height) = heights.get(active) else {
        return 0;
    };
    let mut start = active;
    let mut used = active_height;
    while start > 0 && used + heights[start - 1] <= available {
        start -= 1;
        used += heights[start];
    }
    start
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_scroll_when_active_fits() {
        assert_eq!(first_visible(&[3, 3, 3], 2, 20), 0);
        assert_eq!(first_visible(&[3, 3, 3, 3], 1, 6), 0);
    }

    #[test]
    fn test_scrolls_to_keep_active_at_bottom() {
        // 4 fields of 3 rows in a 7 row window: field 3 needs fields 2..=3
        assert_eq!(first_visible(&[3, 3, 3, 3], 3, 7), 2);
        assert_eq!(first_visible(&[3, 5, 3, 3], 2, 8), 1);
    }

    #[test]
    fn test_tall_active_field_is_first() {
        assert_eq!(first_visible(&[3, 3, 5], 2, 4), 2);
    }

    #[test]
    fn test_out_of_range_active_is_top() {
        assert_eq!(first_visible(&[3, 3], 7, 10), 0);
        assert_eq!(first_visible(&[], 0, 10), 0);
    }

    #[test]
    fn test_multiline_fields_are_taller() {
        assert!(field_height(FieldKind::Multiline) > field_height(FieldKind::Text));
        assert_eq!(field_height(FieldKind::Action), BUTTON_HEIGHT);
    }
}
