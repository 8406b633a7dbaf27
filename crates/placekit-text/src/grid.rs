//! Deterministic fallback text measurement.

use unicode_width::UnicodeWidthChar;

use placekit_geometry::{FontDescriptor, Size};

use crate::measurer::TextMeasurer;
use crate::text::Text;

/// Character-grid text measurement: every character occupies a whole number of
/// display cells (wide CJK/emoji forms count two), scaled by the font size.
///
/// This is the measurer installed by default. It knows nothing about real
/// glyph outlines, but it is deterministic, monotonic, and sensitive to the
/// font size and to attributed-run overrides, which is everything the layout
/// policies observe.
#[derive(Default)]
pub struct GridTextMeasurer;

impl GridTextMeasurer {
    /// Advance of one display cell as a fraction of the font size.
    pub const CELL_ADVANCE: f32 = 0.5;
    /// Line height as a fraction of the font size.
    pub const LINE_FACTOR: f32 = 1.25;

    fn advance(ch: char, font_size: f32) -> f32 {
        ch.width().unwrap_or(0) as f32 * Self::CELL_ADVANCE * font_size
    }
}

impl TextMeasurer for GridTextMeasurer {
    fn measure(&self, text: &Text, font: &FontDescriptor, max_size: Size) -> Size {
        let content = text.content();
        if content.is_empty() {
            return Size::ZERO;
        }
        let attributed = match text {
            Text::Attributed(attributed) => Some(attributed),
            Text::Plain(_) => None,
        };

        let base_line = self.line_height(font);
        let mut width = 0.0_f32;
        let mut height = 0.0_f32;
        let mut line_width = 0.0_f32;
        let mut line_height = base_line;

        for (index, ch) in content.char_indices() {
            if ch == '\n' {
                width = width.max(line_width);
                height += line_height;
                line_width = 0.0;
                line_height = base_line;
                continue;
            }

            let run_font = attributed
                .and_then(|a| a.style_at(index))
                .map(|style| style.resolve(font));
            let (advance, ch_line) = match &run_font {
                Some(run_font) => (
                    Self::advance(ch, run_font.size),
                    self.line_height(run_font),
                ),
                None => (Self::advance(ch, font.size), base_line),
            };

            // Greedy wrap; a character wider than the ceiling still occupies
            // one line by itself.
            if line_width + advance > max_size.width && line_width > 0.0 {
                width = width.max(line_width);
                height += line_height;
                line_width = 0.0;
                line_height = base_line;
            }

            line_width += advance;
            line_height = line_height.max(ch_line);
        }

        width = width.max(line_width);
        height += line_height;

        Size::new(width, height).clamped_to(max_size)
    }

    fn line_height(&self, font: &FontDescriptor) -> f32 {
        font.size * Self::LINE_FACTOR
    }
}

#[cfg(test)]
#[path = "tests/grid_tests.rs"]
mod tests;
