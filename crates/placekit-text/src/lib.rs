//! Text values & the text-measurement service for Placekit
//!
//! Layout nodes carry [`Text`] values and ask the process-wide [`TextMeasurer`]
//! how much space they need. Measurement is deterministic and pure; nothing in
//! this crate renders glyphs.

mod grid;
mod measurer;
mod text;

pub use grid::*;
pub use measurer::*;
pub use text::*;

pub mod prelude {
    pub use crate::measurer::{measure_text, set_text_measurer, text_line_height, TextMeasurer};
    pub use crate::text::{AttributedText, StyleRun, Text};
}
