//! Field list of the current wizard step

use super::field_renderer::{draw_field, field_height, first_visible};
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the focused step's fields, scrolled so the active one is visible
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let step = app.state.wizard.step();
    let form = app.state.wizard.form();
    let fields = app.state.fields();
    let heights: Vec<u16> = fields.iter().map(|f| field_height(f.kind())).collect();

    let block = Block::default()
        .title(format!(" {} ", step.heading()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let inner = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };

    let first = first_visible(&heights, app.state.active_field, inner.height);
    let bottom = inner.y + inner.height;
    let mut y = inner.y;
    for (idx, (field, height)) in fields.iter().zip(&heights).enumerate().skip(first) {
        if y + height > bottom {
            break;
        }
        let field_area = Rect {
            y,
            height: *height,
            ..inner
        };
        draw_field(frame, field_area, *field, form, idx == app.state.active_field);
        y += height;
    }
}
