//! The result of a measure pass.

use std::fmt;

use placekit_geometry::Size;

use crate::core::LayoutRef;

/// An immutable record of one node's measure pass.
///
/// Produced exactly once per [`measure`](crate::ConfigurableLayout::measure)
/// call and consumed by the matching
/// [`arrange`](crate::ConfigurableLayout::arrange). `size` never exceeds
/// `max_size` in either dimension.
#[derive(Clone)]
pub struct LayoutMeasurement {
    /// The node this measurement originated from.
    pub layout: LayoutRef,
    /// The size the node needs.
    pub size: Size,
    /// The ceiling the size was computed under.
    pub max_size: Size,
    /// Measurements of the node's children, in child order.
    pub sublayouts: Vec<LayoutMeasurement>,
}

impl LayoutMeasurement {
    pub fn new(
        layout: LayoutRef,
        size: Size,
        max_size: Size,
        sublayouts: Vec<LayoutMeasurement>,
    ) -> Self {
        Self {
            layout,
            size,
            max_size,
            sublayouts,
        }
    }
}

impl fmt::Debug for LayoutMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutMeasurement")
            .field("size", &self.size)
            .field("max_size", &self.max_size)
            .field("sublayouts", &self.sublayouts)
            .finish()
    }
}
