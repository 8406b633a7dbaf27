//! Text label leaf layout

use std::marker::PhantomData;
use std::sync::Arc;

use placekit_geometry::{FontDescriptor, Rect, Size};
use placekit_layout::{
    Alignment, ConfigurableLayout, Flexibility, LayoutArrangement, LayoutMeasurement,
    PlatformWidget,
};
use placekit_text::{measure_text, text_line_height, Text};

/// A native text label the applier can realize for a [`LabelLayout`].
pub trait LabelWidget: PlatformWidget + Sized {
    fn create() -> Self;
    fn set_text(&mut self, text: &Text);
    fn set_text_font(&mut self, font: &FontDescriptor);
    fn set_line_limit(&mut self, limit: Option<usize>);
}

const LABEL_FONT_SIZE: f32 = 17.0;

/// Layout for a native text label.
///
/// Unlike a button, a label collapses to zero when its content is empty.
pub struct LabelLayout<L: LabelWidget> {
    text: Text,
    font: Option<FontDescriptor>,
    line_limit: Option<usize>,
    alignment: Alignment,
    flexibility: Flexibility,
    view_reuse_id: Option<String>,
    config: Option<Arc<dyn Fn(&mut L) + Send + Sync>>,
    widget: PhantomData<fn(&mut L)>,
}

impl<L: LabelWidget + 'static> LabelLayout<L> {
    pub fn new(text: impl Into<Text>) -> Self {
        Self {
            text: text.into(),
            font: None,
            line_limit: None,
            alignment: Alignment::TOP_START,
            flexibility: Flexibility::FLEXIBLE,
            view_reuse_id: None,
            config: None,
            widget: PhantomData,
        }
    }

    pub fn with_font(mut self, font: FontDescriptor) -> Self {
        self.font = Some(font);
        self
    }

    /// Caps the label at `limit` lines; measurement stops growing past them.
    pub fn with_line_limit(mut self, limit: usize) -> Self {
        self.line_limit = Some(limit);
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_flexibility(mut self, flexibility: Flexibility) -> Self {
        self.flexibility = flexibility;
        self
    }

    pub fn with_reuse_id(mut self, id: impl Into<String>) -> Self {
        self.view_reuse_id = Some(id.into());
        self
    }

    /// Customization hook run first in `configure_widget`.
    pub fn with_config(mut self, config: impl Fn(&mut L) + Send + Sync + 'static) -> Self {
        self.config = Some(Arc::new(config));
        self
    }

    pub fn text(&self) -> &Text {
        &self.text
    }

    fn effective_font(&self) -> FontDescriptor {
        self.font
            .clone()
            .unwrap_or_else(|| FontDescriptor::system(LABEL_FONT_SIZE))
    }
}

impl<L: LabelWidget + 'static> ConfigurableLayout for LabelLayout<L> {
    fn measure(self: Arc<Self>, max_size: Size) -> LayoutMeasurement {
        if self.text.is_empty() {
            return LayoutMeasurement::new(self, Size::ZERO, max_size, Vec::new());
        }

        let font = self.effective_font();
        let mut ceiling = max_size;
        if let Some(limit) = self.line_limit {
            ceiling.height = ceiling.height.min(text_line_height(&font) * limit as f32);
        }

        let size = measure_text(&self.text, &font, ceiling)
            .ceiled()
            .clamped_to(max_size);
        LayoutMeasurement::new(self, size, max_size, Vec::new())
    }

    fn arrange(
        self: Arc<Self>,
        within: Rect,
        measurement: &LayoutMeasurement,
    ) -> LayoutArrangement {
        let frame = self.alignment.position(measurement.size, within);
        LayoutArrangement::new(self, frame, Vec::new())
    }

    fn make_widget(&self) -> Box<dyn PlatformWidget> {
        Box::new(L::create())
    }

    fn configure_widget(&self, widget: &mut dyn PlatformWidget) {
        let Some(label) = widget.as_any_mut().downcast_mut::<L>() else {
            return;
        };
        if let Some(config) = &self.config {
            config(label);
        }
        label.set_line_limit(self.line_limit);
        if let Some(font) = &self.font {
            label.set_text_font(font);
        }
        label.set_text(&self.text);
    }

    fn can_reuse_widget(&self, widget: &dyn PlatformWidget) -> bool {
        widget.as_any().is::<L>()
    }

    fn alignment(&self) -> Alignment {
        self.alignment
    }

    fn flexibility(&self) -> Flexibility {
        self.flexibility
    }

    fn view_reuse_id(&self) -> Option<&str> {
        self.view_reuse_id.as_deref()
    }
}

#[cfg(test)]
#[path = "tests/label_tests.rs"]
mod tests;
