//! Centered modal shared by the error and progress overlays

use crate::text::wrap_text;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

/// Border plus one column of padding on each side
const CHROME: u16 = 4;

pub struct Dialog<'a> {
    pub title: &'a str,
    /// Title and border color
    pub accent: Color,
    /// Body text, `\n` starts a new paragraph
    pub message: &'a str,
    /// Key hint on the last row
    pub hint: Option<Vec<Span<'a>>>,
    pub max_width: u16,
}

impl<'a> Dialog<'a> {
    fn hint_width(&self) -> usize {
        self.hint.as_ref().map_or(0, |spans| {
            spans.iter().map(|span| span.content.chars().count()).sum()
        })
    }

    /// Wrapped body lines and the dialog rectangle centered in `area`
    fn measure(&self, area: Rect) -> (Vec<String>, Rect) {
        let max_width = self.max_width.min(area.width).max(CHROME + 1);
        let text_width = usize::from(max_width - CHROME);
        let lines = wrap_text(self.message, text_width);

        let hint_width = self.hint_width();
        let content = lines
            .iter()
            .map(|line| line.chars().count())
            .chain([self.title.chars().count(), hint_width])
            .max()
            .unwrap_or(0)
            .min(text_width);

        // Blank separator plus however many rows the hint wraps onto
        let hint_rows = match self.hint {
            Some(_) => 1 + hint_width.div_ceil(text_width).max(1),
            None => 0,
        };
        // Borders, title and the blank row under it
        let rows = lines.len() + hint_rows + 4;

        let width = (content as u16 + CHROME).min(area.width);
        let height = rows.min(usize::from(area.height)) as u16;
        let rect = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        };
        (lines, rect)
    }

    pub fn render(self, frame: &mut Frame) {
        let (lines, rect) = self.measure(frame.area());

        let mut content = vec![
            Line::from(Span::styled(
                self.title,
                Style::default()
                    .fg(self.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        content.extend(lines.into_iter().map(Line::from));
        if let Some(hint) = self.hint {
            content.push(Line::from(""));
            content.push(Line::from(hint));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.accent))
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(Color::Black));

        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(content)
                .block(block)
                .wrap(Wrap { trim: false }),
            rect,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dialog<'a>(message: &'a str, hint: Option<Vec<Span<'a>>>) -> Dialog<'a> {
        Dialog {
            title: "Error",
            accent: Color::Red,
            message,
            hint,
            max_width: 70,
        }
    }

    #[test]
    fn test_hint_sets_width_for_short_message() {
        let hint = vec![Span::raw("Press "), Span::raw("Esc"), Span::raw(" to dismiss")];
        let (lines, rect) = dialog("Oops", Some(hint)).measure(Rect::new(0, 0, 120, 40));
        assert_eq!(lines, vec!["Oops".to_string()]);
        // 20 hint chars + chrome
        assert_eq!(rect.width, 24);
        // borders, title, blank, one line, blank, hint
        assert_eq!(rect.height, 7);
        assert_eq!(rect.x, 48);
    }

    #[test]
    fn test_long_hint_wraps_within_max_width() {
        let hint = vec![Span::raw("x".repeat(100))];
        let (_, rect) = dialog("short", Some(hint)).measure(Rect::new(0, 0, 120, 40));
        assert_eq!(rect.width, 70);
        // hint takes two rows of 66
        assert_eq!(rect.height, 8);
    }

    #[test]
    fn test_clamped_to_small_terminal() {
        let message = "word ".repeat(40);
        let (lines, rect) = dialog(&message, None).measure(Rect::new(0, 0, 30, 6));
        assert_eq!(lines[0], "word word word word word");
        assert_eq!(rect.width, 28);
        assert_eq!(rect.height, 6);
    }
}
