//! Pure geometry & typography data for Placekit
//!
//! This crate contains the geometric primitives and font descriptions that the
//! rest of the framework computes with. Everything here is plain data; nothing
//! touches a platform toolkit.

mod geometry;
mod typography;

pub use geometry::*;
pub use typography::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::typography::{FontDescriptor, FontStyle, FontWeight, TextStyle};
}
