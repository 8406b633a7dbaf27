//! Placekit end to end: measure on worker threads, arrange, apply.
//!
//! The "toolkit" here is a pair of console-backed widgets that log what a real
//! platform would be asked to do.

use std::any::Any;
use std::sync::Arc;
use std::thread;

use placekit_geometry::{FontDescriptor, Rect, Size};
use placekit_layout::{Alignment, ConfigurableLayout, LayoutMeasurement, LayoutRef, PlatformWidget};
use placekit_render::WidgetApplier;
use placekit_text::Text;
use placekit_widgets::{ButtonKind, ButtonLayout, ButtonWidget, LabelLayout, LabelWidget};

struct ConsoleButton {
    kind: ButtonKind,
}

impl PlatformWidget for ConsoleButton {
    fn set_frame(&mut self, frame: Rect) {
        log::info!("button[{:?}] framed at {:?}", self.kind, frame);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl ButtonWidget for ConsoleButton {
    fn create(kind: ButtonKind) -> Self {
        log::info!("button[{kind:?}] created");
        Self { kind }
    }

    fn set_title(&mut self, title: &Text) {
        log::info!("button[{:?}] titled {:?}", self.kind, title.content());
    }

    fn set_title_font(&mut self, font: &FontDescriptor) {
        log::info!("button[{:?}] font {:?}", self.kind, font);
    }
}

struct ConsoleLabel;

impl PlatformWidget for ConsoleLabel {
    fn set_frame(&mut self, frame: Rect) {
        log::info!("label framed at {frame:?}");
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl LabelWidget for ConsoleLabel {
    fn create() -> Self {
        log::info!("label created");
        ConsoleLabel
    }

    fn set_text(&mut self, text: &Text) {
        log::info!("label text {:?}", text.content());
    }

    fn set_text_font(&mut self, font: &FontDescriptor) {
        log::info!("label font {font:?}");
    }

    fn set_line_limit(&mut self, limit: Option<usize>) {
        log::info!("label line limit {limit:?}");
    }
}

fn main() {
    env_logger::init();

    let viewport = Size::new(320.0, 240.0);
    let banner: LayoutRef = Arc::new(
        LabelLayout::<ConsoleLabel>::new("Hello from placekit")
            .with_alignment(Alignment::TOP_CENTER)
            .with_line_limit(1),
    );
    let confirm: LayoutRef = Arc::new(
        ButtonLayout::<ConsoleButton>::new(ButtonKind::System, "OK")
            .with_alignment(Alignment::BOTTOM_CENTER)
            .with_reuse_id("confirm"),
    );

    // The measure pass is pure, so it can run anywhere; here each node is
    // measured on its own worker thread while the main thread stays free.
    let measurements: Vec<LayoutMeasurement> = thread::scope(|scope| {
        let handles: Vec<_> = [&banner, &confirm]
            .into_iter()
            .map(|node| {
                let node = Arc::clone(node);
                scope.spawn(move || node.measure(viewport))
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("measure worker panicked"))
            .collect()
    });

    // Arrange and apply on the UI-owning thread.
    let within = Rect::from_size(viewport);
    let mut appliers: Vec<WidgetApplier> = Vec::new();
    for measurement in &measurements {
        let arrangement = Arc::clone(&measurement.layout).arrange(within, measurement);
        let mut applier = WidgetApplier::new();
        applier.apply(&arrangement);
        log::info!("realized {} widget(s)", applier.len());
        appliers.push(applier);
    }

    // A second pass over the button's applier: a new node with the same reuse
    // id recycles the widget instead of creating another one.
    let retry: LayoutRef = Arc::new(
        ButtonLayout::<ConsoleButton>::new(ButtonKind::System, "Retry")
            .with_alignment(Alignment::BOTTOM_CENTER)
            .with_reuse_id("confirm"),
    );
    let measurement = Arc::clone(&retry).measure(viewport);
    let arrangement = retry.arrange(within, &measurement);
    appliers[1].apply(&arrangement);
}
