//! Arrangement applier: the widget-side edge of Placekit
//!
//! Everything before this crate is pure computation. [`WidgetApplier`] is the
//! one component with side effects: it walks an arrangement tree and creates,
//! recycles, configures, and positions platform widgets.

mod applier;

pub use applier::*;
