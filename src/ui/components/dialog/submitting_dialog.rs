//! Progress dialog shown while a registration is being sent

use super::base::Dialog;
use ratatui::{style::Color, Frame};

pub fn render_submitting_dialog(frame: &mut Frame) {
    Dialog {
        title: "Submitting... / சமர்ப்பிக்கிறது...",
        accent: Color::Yellow,
        message: "Generating the PDF and sending your registration.\nPlease wait.",
        hint: None,
        max_width: 60,
    }
    .render(frame);
}
