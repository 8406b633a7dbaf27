//! The result of an arrange pass.

use std::fmt;

use placekit_geometry::Rect;

use crate::core::LayoutRef;

/// An immutable record of one node's arrange pass: its final frame and the
/// arrangements of its children.
///
/// The applier consumes this to create, configure, and position widgets; its
/// lifecycle ends there.
#[derive(Clone)]
pub struct LayoutArrangement {
    /// The node this arrangement originated from.
    pub layout: LayoutRef,
    /// The node's final frame, in the same coordinate space as the rect that
    /// was passed to `arrange`.
    pub frame: Rect,
    /// Arrangements of the node's children, in child order.
    pub sublayouts: Vec<LayoutArrangement>,
}

impl LayoutArrangement {
    pub fn new(layout: LayoutRef, frame: Rect, sublayouts: Vec<LayoutArrangement>) -> Self {
        Self {
            layout,
            frame,
            sublayouts,
        }
    }
}

impl fmt::Debug for LayoutArrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutArrangement")
            .field("frame", &self.frame)
            .field("sublayouts", &self.sublayouts)
            .finish()
    }
}
