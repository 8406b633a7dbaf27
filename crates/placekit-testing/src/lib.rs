//! Recording widget doubles for Placekit tests
//!
//! [`RecordingButton`] and [`RecordingLabel`] implement the platform widget
//! traits without a real toolkit. Creations land in a per-thread journal (so
//! tests can count how many widgets a pass actually made), and every widget
//! records the order of operations applied to it.

use std::any::Any;
use std::cell::{Cell, RefCell};

use placekit_geometry::{FontDescriptor, Rect};
use placekit_layout::PlatformWidget;
use placekit_text::Text;
use placekit_widgets::{ButtonKind, ButtonWidget, LabelWidget};

/// A widget lifecycle event observed on the current thread.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WidgetEvent {
    CreatedButton { widget: u64, kind: ButtonKind },
    CreatedLabel { widget: u64 },
}

/// One operation applied to a recording widget, in application order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetOp {
    /// Recorded by test-supplied configuration hooks.
    Config,
    SetFont,
    SetTitle,
    SetText,
    SetLineLimit,
    SetFrame,
}

thread_local! {
    static JOURNAL: RefCell<Vec<WidgetEvent>> = const { RefCell::new(Vec::new()) };
    static NEXT_WIDGET_ID: Cell<u64> = const { Cell::new(1) };
}

/// Every creation event recorded on this thread since the last reset.
pub fn journal() -> Vec<WidgetEvent> {
    JOURNAL.with(|journal| journal.borrow().clone())
}

pub fn reset_journal() {
    JOURNAL.with(|journal| journal.borrow_mut().clear());
    NEXT_WIDGET_ID.with(|next| next.set(1));
}

fn record(event: WidgetEvent) {
    JOURNAL.with(|journal| journal.borrow_mut().push(event));
}

fn next_widget_id() -> u64 {
    NEXT_WIDGET_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        id
    })
}

/// A button double: remembers everything the applier and node did to it.
pub struct RecordingButton {
    pub id: u64,
    pub kind: ButtonKind,
    pub title: Option<Text>,
    pub font: Option<FontDescriptor>,
    pub frame: Option<Rect>,
    pub ops: Vec<WidgetOp>,
    /// Scratch space for configuration hooks.
    pub note: String,
}

impl PlatformWidget for RecordingButton {
    fn set_frame(&mut self, frame: Rect) {
        self.frame = Some(frame);
        self.ops.push(WidgetOp::SetFrame);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl ButtonWidget for RecordingButton {
    fn create(kind: ButtonKind) -> Self {
        let id = next_widget_id();
        record(WidgetEvent::CreatedButton { widget: id, kind });
        Self {
            id,
            kind,
            title: None,
            font: None,
            frame: None,
            ops: Vec::new(),
            note: String::new(),
        }
    }

    fn set_title(&mut self, title: &Text) {
        self.title = Some(title.clone());
        self.ops.push(WidgetOp::SetTitle);
    }

    fn set_title_font(&mut self, font: &FontDescriptor) {
        self.font = Some(font.clone());
        self.ops.push(WidgetOp::SetFont);
    }
}

/// A label double.
pub struct RecordingLabel {
    pub id: u64,
    pub text: Option<Text>,
    pub font: Option<FontDescriptor>,
    pub line_limit: Option<usize>,
    pub frame: Option<Rect>,
    pub ops: Vec<WidgetOp>,
}

impl PlatformWidget for RecordingLabel {
    fn set_frame(&mut self, frame: Rect) {
        self.frame = Some(frame);
        self.ops.push(WidgetOp::SetFrame);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl LabelWidget for RecordingLabel {
    fn create() -> Self {
        let id = next_widget_id();
        record(WidgetEvent::CreatedLabel { widget: id });
        Self {
            id,
            text: None,
            font: None,
            line_limit: None,
            frame: None,
            ops: Vec::new(),
        }
    }

    fn set_text(&mut self, text: &Text) {
        self.text = Some(text.clone());
        self.ops.push(WidgetOp::SetText);
    }

    fn set_text_font(&mut self, font: &FontDescriptor) {
        self.font = Some(font.clone());
        self.ops.push(WidgetOp::SetFont);
    }

    fn set_line_limit(&mut self, limit: Option<usize>) {
        self.line_limit = limit;
        self.ops.push(WidgetOp::SetLineLimit);
    }
}
