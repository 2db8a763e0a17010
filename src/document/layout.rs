//! Page layout in millimetres on A4
//!
//! Positions follow a running cursor down the page. A section header moves
//! to a new page when fewer than 40 mm remain; a field row when fewer than
//! 20 mm remain. Every page gets a page-number and date footer.

use super::sections::{Entry, Section};
use crate::text::wrap_text;

pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;
pub const MARGIN: f32 = 20.0;
/// x where the separator rules end
pub const RULE_END: f32 = 190.0;
/// Value column starts this far right of the label column
pub const VALUE_OFFSET: f32 = 50.0;
/// Characters that fit the 120 mm value column at 11 pt
pub const VALUE_WRAP_CHARS: usize = 60;
pub const LINE_HEIGHT: f32 = 5.0;
pub const MIN_ROW_HEIGHT: f32 = 6.0;

const TITLE: &str = "Registration Form";
const SECTION_BREAK_RESERVE: f32 = 40.0;
const ROW_BREAK_RESERVE: f32 = 20.0;
const SECTION_GAP: f32 = 10.0;
const SPACER_GAP: f32 = 5.0;
const FOOTER_Y: f32 = PAGE_HEIGHT - 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Title,
    SectionTitle,
    Label,
    Value,
    Footer,
}

impl TextStyle {
    pub fn size_pt(&self) -> f32 {
        match self {
            Self::Title => 24.0,
            Self::SectionTitle => 16.0,
            Self::Label => 10.0,
            Self::Value => 11.0,
            Self::Footer => 8.0,
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Title => (41, 128, 185),
            Self::SectionTitle => (52, 73, 94),
            Self::Label | Self::Footer => (127, 140, 141),
            Self::Value => (0, 0, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleStyle {
    /// Under the document title
    Heavy,
    /// Under each section title
    Light,
}

/// Something drawn at an absolute position. `y` is the text baseline.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text {
        x: f32,
        y: f32,
        style: TextStyle,
        text: String,
    },
    Rule {
        x1: f32,
        x2: f32,
        y: f32,
        style: RuleStyle,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub elements: Vec<Element>,
}

#[cfg(test)]
impl Page {
    /// Text of every element, in drawing order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|e| match e {
            Element::Text { text, .. } => Some(text.as_str()),
            Element::Rule { .. } => None,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentLayout {
    pub pages: Vec<Page>,
}

struct Cursor {
    pages: Vec<Page>,
    y: f32,
}

impl Cursor {
    fn new() -> Self {
        Self {
            pages: vec![Page::default()],
            y: MARGIN,
        }
    }

    fn break_if_below(&mut self, reserve: f32) {
        if self.y > PAGE_HEIGHT - reserve {
            self.pages.push(Page::default());
            self.y = MARGIN;
        }
    }

    fn push(&mut self, element: Element) {
        if let Some(page) = self.pages.last_mut() {
            page.elements.push(element);
        }
    }

    fn text(&mut self, x: f32, style: TextStyle, text: impl Into<String>) {
        let y = self.y;
        self.push(Element::Text {
            x,
            y,
            style,
            text: text.into(),
        });
    }

    fn rule(&mut self, style: RuleStyle) {
        let y = self.y;
        self.push(Element::Rule {
            x1: MARGIN,
            x2: RULE_END,
            y,
            style,
        });
    }
}

/// Lay out `sections` on as many pages as they need. `generated_on` is
/// printed in every footer.
pub fn layout(sections: &[Section], generated_on: &str) -> DocumentLayout {
    let mut cursor = Cursor::new();

    cursor.text(MARGIN, TextStyle::Title, TITLE);
    cursor.y += 20.0;
    cursor.rule(RuleStyle::Heavy);
    cursor.y += 15.0;

    for section in sections {
        cursor.break_if_below(SECTION_BREAK_RESERVE);
        cursor.text(MARGIN, TextStyle::SectionTitle, section.title.as_str());
        cursor.y += 12.0;
        cursor.rule(RuleStyle::Light);
        cursor.y += 8.0;

        for entry in &section.entries {
            match entry {
                Entry::Field { label, value } => {
                    cursor.break_if_below(ROW_BREAK_RESERVE);
                    cursor.text(MARGIN, TextStyle::Label, format!("{label}:"));
                    let lines = wrap_text(value, VALUE_WRAP_CHARS);
                    let top = cursor.y;
                    for (i, line) in lines.iter().enumerate() {
                        cursor.y = top + i as f32 * LINE_HEIGHT;
                        cursor.text(MARGIN + VALUE_OFFSET, TextStyle::Value, line.as_str());
                    }
                    cursor.y = top + MIN_ROW_HEIGHT.max(lines.len() as f32 * LINE_HEIGHT);
                }
                Entry::Spacer => cursor.y += SPACER_GAP,
            }
        }
        cursor.y += SECTION_GAP;
    }

    let mut pages = cursor.pages;
    let total = pages.len();
    for (i, page) in pages.iter_mut().enumerate() {
        page.elements.push(Element::Text {
            x: PAGE_WIDTH - 40.0,
            y: FOOTER_Y,
            style: TextStyle::Footer,
            text: format!("Page {} of {}", i + 1, total),
        });
        page.elements.push(Element::Text {
            x: MARGIN,
            y: FOOTER_Y,
            style: TextStyle::Footer,
            text: format!("Generated on: {generated_on}"),
        });
    }

    DocumentLayout { pages }
}
