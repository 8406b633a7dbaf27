//! The layout-node capability every element implements.

use std::any::Any;
use std::sync::Arc;

use placekit_geometry::{Rect, Size};

use crate::alignment::Alignment;
use crate::arrangement::LayoutArrangement;
use crate::flexibility::Flexibility;
use crate::measurement::LayoutMeasurement;

/// Shared handle to a layout node.
///
/// Nodes are immutable after construction, so a single tree can be measured
/// from any thread and the resulting trees keep cheap references back to the
/// nodes that produced them.
pub type LayoutRef = Arc<dyn ConfigurableLayout>;

/// The surface the applier drives on a realized native widget.
///
/// Concrete widget capabilities (titles, fonts) live on node-specific traits;
/// nodes reach them by downcasting through [`PlatformWidget::as_any_mut`]
/// inside `configure_widget`. Widgets are deliberately not `Send`: everything
/// behind this trait runs on the thread that owns the platform toolkit.
pub trait PlatformWidget: Any {
    /// Moves the widget to its final frame.
    fn set_frame(&mut self, frame: Rect);

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A layout element: pure measurement and arrangement, deferred widget work.
///
/// `measure` and `arrange` are pure and may run on any thread. `make_widget`
/// and `configure_widget` have platform side effects and are invoked only by
/// the applier, on the UI-owning thread, never during a layout pass. None of
/// the four operations can fail; abnormal inputs degrade to safe defaults
/// instead of erroring.
pub trait ConfigurableLayout: Send + Sync + 'static {
    /// Computes the node's required size, never exceeding `max_size` in either
    /// dimension, measuring any children against appropriately reduced
    /// ceilings. Idempotent and side-effect-free.
    fn measure(self: Arc<Self>, max_size: Size) -> LayoutMeasurement;

    /// Positions the previously measured node inside `within` per its
    /// alignment and arranges children within the resulting frame. Consumes
    /// the measurement produced by [`measure`](Self::measure); must not
    /// re-measure.
    fn arrange(self: Arc<Self>, within: Rect, measurement: &LayoutMeasurement)
        -> LayoutArrangement;

    /// Constructs a fresh native widget for this node. Applier-only.
    fn make_widget(&self) -> Box<dyn PlatformWidget>;

    /// Applies node state (text, font, caller customization) onto an existing
    /// widget. Applier-only.
    fn configure_widget(&self, widget: &mut dyn PlatformWidget);

    /// Whether a recycled widget is the right concrete type for this node.
    ///
    /// A reuse id match alone does not prove compatibility; the applier asks
    /// before handing a recycled widget to `configure_widget`.
    fn can_reuse_widget(&self, _widget: &dyn PlatformWidget) -> bool {
        false
    }

    /// How the measured size anchors inside the rect given to `arrange`.
    fn alignment(&self) -> Alignment;

    /// Read-only metadata for container layouts distributing extra space.
    fn flexibility(&self) -> Flexibility;

    /// Identity hint letting the applier recycle a previously created widget.
    fn view_reuse_id(&self) -> Option<&str> {
        None
    }
}
