//! Alignment utilities for positioning a measured size within a rect

use placekit_geometry::{Rect, Size};

/// Alignment across both axes used for positioning content within a box.
///
/// Three cases per axis yield the nine anchor policies; each is exposed as an
/// associated constant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alignment {
    /// Horizontal alignment component.
    pub horizontal: HorizontalAlignment,
    /// Vertical alignment component.
    pub vertical: VerticalAlignment,
}

impl Alignment {
    /// Creates a new [`Alignment`] from explicit horizontal and vertical components.
    pub const fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub const TOP_START: Self = Self::new(HorizontalAlignment::Start, VerticalAlignment::Top);
    pub const TOP_CENTER: Self = Self::new(
        HorizontalAlignment::CenterHorizontally,
        VerticalAlignment::Top,
    );
    pub const TOP_END: Self = Self::new(HorizontalAlignment::End, VerticalAlignment::Top);
    pub const CENTER_START: Self = Self::new(
        HorizontalAlignment::Start,
        VerticalAlignment::CenterVertically,
    );
    pub const CENTER: Self = Self::new(
        HorizontalAlignment::CenterHorizontally,
        VerticalAlignment::CenterVertically,
    );
    pub const CENTER_END: Self = Self::new(
        HorizontalAlignment::End,
        VerticalAlignment::CenterVertically,
    );
    pub const BOTTOM_START: Self = Self::new(HorizontalAlignment::Start, VerticalAlignment::Bottom);
    pub const BOTTOM_CENTER: Self = Self::new(
        HorizontalAlignment::CenterHorizontally,
        VerticalAlignment::Bottom,
    );
    pub const BOTTOM_END: Self = Self::new(HorizontalAlignment::End, VerticalAlignment::Bottom);

    /// Positions `size` within `within`, returning its frame.
    ///
    /// The size is preserved; per-axis offsets clamp at zero when the box is
    /// larger than the available space.
    pub fn position(&self, size: Size, within: Rect) -> Rect {
        let x = within.x + self.horizontal.align(within.width, size.width);
        let y = within.y + self.vertical.align(within.height, size.height);
        Rect::new(x, y, size.width, size.height)
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::TOP_START
    }
}

/// Alignment along the horizontal axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalAlignment {
    /// Align content to the leading edge.
    Start,
    /// Align content to the horizontal center.
    CenterHorizontally,
    /// Align content to the trailing edge.
    End,
}

impl HorizontalAlignment {
    /// Computes the horizontal offset for alignment.
    pub fn align(&self, available: f32, child: f32) -> f32 {
        match self {
            HorizontalAlignment::Start => 0.0,
            HorizontalAlignment::CenterHorizontally => ((available - child) / 2.0).max(0.0),
            HorizontalAlignment::End => (available - child).max(0.0),
        }
    }
}

/// Alignment along the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalAlignment {
    /// Align content to the top edge.
    Top,
    /// Align content to the vertical center.
    CenterVertically,
    /// Align content to the bottom edge.
    Bottom,
}

impl VerticalAlignment {
    /// Computes the vertical offset for alignment.
    pub fn align(&self, available: f32, child: f32) -> f32 {
        match self {
            VerticalAlignment::Top => 0.0,
            VerticalAlignment::CenterVertically => ((available - child) / 2.0).max(0.0),
            VerticalAlignment::Bottom => (available - child).max(0.0),
        }
    }
}

#[cfg(test)]
#[path = "tests/alignment_tests.rs"]
mod tests;
