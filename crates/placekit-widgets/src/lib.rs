//! Leaf layout nodes for Placekit
//!
//! Concrete [`ConfigurableLayout`](placekit_layout::ConfigurableLayout)
//! implementations that reproduce the sizing quirks of native controls
//! without touching a widget during measurement.

pub mod button;
pub mod label;

pub use button::*;
pub use label::*;
