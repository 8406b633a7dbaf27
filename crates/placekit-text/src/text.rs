//! The textual content carried by layout nodes.

use std::ops::Range;

use placekit_geometry::TextStyle;

/// Textual content of a measurable node: a plain string or styled rich text.
///
/// Immutable once constructed. Only content matters to layout; there are no
/// identity semantics.
#[derive(Clone, Debug, PartialEq)]
pub enum Text {
    Plain(String),
    Attributed(AttributedText),
}

impl Text {
    pub fn plain(text: impl Into<String>) -> Self {
        Text::Plain(text.into())
    }

    pub fn attributed(text: AttributedText) -> Self {
        Text::Attributed(text)
    }

    /// The raw character content, ignoring any styling.
    pub fn content(&self) -> &str {
        match self {
            Text::Plain(text) => text,
            Text::Attributed(attributed) => attributed.text(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content().is_empty()
    }
}

impl From<&str> for Text {
    fn from(text: &str) -> Self {
        Text::Plain(text.to_owned())
    }
}

impl From<String> for Text {
    fn from(text: String) -> Self {
        Text::Plain(text)
    }
}

impl From<AttributedText> for Text {
    fn from(text: AttributedText) -> Self {
        Text::Attributed(text)
    }
}

/// A contiguous byte range of an [`AttributedText`] with style overrides.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleRun {
    pub range: Range<usize>,
    pub style: TextStyle,
}

impl StyleRun {
    pub fn new(range: Range<usize>, style: TextStyle) -> Self {
        Self { range, style }
    }
}

/// Rich text: a string plus ordered, non-overlapping style runs.
///
/// Bytes not covered by any run use the measuring font unchanged.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct AttributedText {
    text: String,
    runs: Vec<StyleRun>,
}

impl AttributedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            runs: Vec::new(),
        }
    }

    /// Creates rich text from a string and its style runs.
    ///
    /// Runs must be sorted by start and non-overlapping; ranges are clamped to
    /// the string length.
    pub fn styled(text: impl Into<String>, runs: Vec<StyleRun>) -> Self {
        let text = text.into();
        let len = text.len();
        debug_assert!(
            runs.windows(2).all(|w| w[0].range.end <= w[1].range.start),
            "style runs must be sorted and non-overlapping"
        );
        let runs = runs
            .into_iter()
            .filter(|run| run.range.start < len)
            .map(|run| StyleRun {
                range: run.range.start..run.range.end.min(len),
                style: run.style,
            })
            .collect();
        Self { text, runs }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn runs(&self) -> &[StyleRun] {
        &self.runs
    }

    /// The style overrides covering the given byte index, if any.
    pub fn style_at(&self, byte_index: usize) -> Option<&TextStyle> {
        self.runs
            .iter()
            .find(|run| run.range.contains(&byte_index))
            .map(|run| &run.style)
    }

    /// The same styling applied to different content.
    ///
    /// Runs are carried over and re-clamped to the new length.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self::styled(text, self.runs.clone())
    }
}
