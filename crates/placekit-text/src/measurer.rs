//! The text-measurement service boundary.

use std::sync::{OnceLock, RwLock};

use placekit_geometry::{FontDescriptor, Size};

use crate::grid::GridTextMeasurer;
use crate::text::Text;

/// Measures text for layout.
///
/// Implementations must be deterministic and monotonic: the result never
/// exceeds the `max_size` it was computed under, and identical inputs always
/// yield identical output. Attributed content may measure differently from the
/// same string measured plain at the same nominal font.
pub trait TextMeasurer: Send + Sync + 'static {
    /// Returns the minimal bounding size needed to render `text` at `font`,
    /// wrapping as needed to stay within `max_size`.
    fn measure(&self, text: &Text, font: &FontDescriptor, max_size: Size) -> Size;

    /// Height of a single line at `font`.
    fn line_height(&self, font: &FontDescriptor) -> f32;
}

fn global_text_measurer() -> &'static RwLock<Box<dyn TextMeasurer>> {
    static TEXT_MEASURER: OnceLock<RwLock<Box<dyn TextMeasurer>>> = OnceLock::new();
    TEXT_MEASURER.get_or_init(|| RwLock::new(Box::new(GridTextMeasurer::default())))
}

/// Replaces the process-wide text measurer.
///
/// Hosts install their platform's font-metrics service here once at startup;
/// until then the deterministic [`GridTextMeasurer`] answers.
pub fn set_text_measurer<M: TextMeasurer>(measurer: M) {
    let mut guard = global_text_measurer()
        .write()
        .expect("text measurer lock poisoned");
    *guard = Box::new(measurer);
}

/// Measures `text` through the process-wide measurer.
pub fn measure_text(text: &Text, font: &FontDescriptor, max_size: Size) -> Size {
    global_text_measurer()
        .read()
        .expect("text measurer lock poisoned")
        .measure(text, font, max_size)
}

/// Single-line height of `font` through the process-wide measurer.
pub fn text_line_height(font: &FontDescriptor) -> f32 {
    global_text_measurer()
        .read()
        .expect("text measurer lock poisoned")
        .line_height(font)
}
