//! Button leaf layout

use std::marker::PhantomData;
use std::sync::Arc;

use placekit_geometry::{FontDescriptor, Rect, Size};
use placekit_layout::{
    Alignment, ConfigurableLayout, Flexibility, LayoutArrangement, LayoutMeasurement,
    PlatformWidget,
};
use placekit_text::{measure_text, Text};

/// The closed set of platform button styles driving sizing and font policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    /// Caller-styled button.
    Custom,
    /// Platform-styled text button.
    System,
    /// Fixed-size glyph button: contact add.
    ContactAdd,
    /// Fixed-size glyph button: info, light appearance.
    InfoLight,
    /// Fixed-size glyph button: info, dark appearance.
    InfoDark,
    /// Fixed-size glyph button: detail disclosure chevron.
    DetailDisclosure,
    /// A raw platform style code this implementation has no policy for.
    /// Measures as zero rather than guessing at padding.
    Other(i32),
}

/// A native button the applier can realize for a [`ButtonLayout`].
///
/// Implemented by the host toolkit; all methods run on the UI-owning thread.
pub trait ButtonWidget: PlatformWidget + Sized {
    fn create(kind: ButtonKind) -> Self;
    fn set_title(&mut self, title: &Text);
    fn set_title_font(&mut self, font: &FontDescriptor);
}

// Observed sizing behavior of the native control.
const MIN_TITLE_WIDTH: f32 = 30.0;
const TITLE_HEIGHT_PADDING: f32 = 12.0;
const GLYPH_EDGE: f32 = 22.0;
const CUSTOM_TITLE_FONT_SIZE: f32 = 18.0;
const SYSTEM_TITLE_FONT_SIZE: f32 = 15.0;

/// Layout for a native button.
///
/// Reproduces the control's sizing quirks from its kind, title, and font
/// alone; no widget exists until the applier asks for one.
pub struct ButtonLayout<B: ButtonWidget> {
    kind: ButtonKind,
    title: Text,
    font: Option<FontDescriptor>,
    alignment: Alignment,
    flexibility: Flexibility,
    view_reuse_id: Option<String>,
    config: Option<Arc<dyn Fn(&mut B) + Send + Sync>>,
    widget: PhantomData<fn(&mut B)>,
}

impl<B: ButtonWidget + 'static> ButtonLayout<B> {
    pub fn new(kind: ButtonKind, title: impl Into<Text>) -> Self {
        Self {
            kind,
            title: title.into(),
            font: None,
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

    /// Customization hook run first in `configure_widget`, before the font and
    /// title are applied, so defaults set here can still be overridden by the
    /// node's own properties.
    pub fn with_config(mut self, config: impl Fn(&mut B) + Send + Sync + 'static) -> Self {
        self.config = Some(Arc::new(config));
        self
    }

    pub fn kind(&self) -> ButtonKind {
        self.kind
    }

    pub fn title(&self) -> &Text {
        &self.title
    }

    /// The font the title is measured with.
    fn measurement_font(&self) -> FontDescriptor {
        match self.kind {
            ButtonKind::Custom => self
                .font
                .clone()
                .unwrap_or_else(|| FontDescriptor::system(CUSTOM_TITLE_FONT_SIZE)),
            ButtonKind::System => self
                .font
                .clone()
                .unwrap_or_else(|| FontDescriptor::system(SYSTEM_TITLE_FONT_SIZE)),
            ButtonKind::ContactAdd
            | ButtonKind::InfoLight
            | ButtonKind::InfoDark
            | ButtonKind::DetailDisclosure => {
                // A supplied font has no visual effect on these kinds.
                FontDescriptor::system(SYSTEM_TITLE_FONT_SIZE)
            }
            ButtonKind::Other(_) => FontDescriptor::system(0.0),
        }
    }

    /// A native button keeps its line height when the title is empty, so an
    /// empty title measures as a single space with the width forced to zero.
    fn title_size(&self, font: &FontDescriptor, max_size: Size) -> Size {
        match &self.title {
            Text::Plain(text) if text.is_empty() => {
                let space = measure_text(&Text::plain(" "), font, max_size);
                Size::new(0.0, space.height)
            }
            Text::Attributed(attributed) if attributed.text().is_empty() => {
                let space = Text::attributed(attributed.with_text(" "));
                Size::new(0.0, measure_text(&space, font, max_size).height)
            }
            title => measure_text(title, font, max_size),
        }
    }
}

impl<B: ButtonWidget + 'static> ConfigurableLayout for ButtonLayout<B> {
    fn measure(self: Arc<Self>, max_size: Size) -> LayoutMeasurement {
        let font = self.measurement_font();
        let title = self.title_size(&font, max_size);

        // Observed padding behavior of the native control.
        let size = match self.kind {
            ButtonKind::Custom | ButtonKind::System => Size::new(
                title.width.max(MIN_TITLE_WIDTH).ceil(),
                (title.height + TITLE_HEIGHT_PADDING).ceil(),
            ),
            ButtonKind::ContactAdd
            | ButtonKind::InfoLight
            | ButtonKind::InfoDark
            | ButtonKind::DetailDisclosure => {
                Size::new(GLYPH_EDGE + title.width.ceil(), GLYPH_EDGE)
            }
            ButtonKind::Other(_) => Size::ZERO,
        };

        LayoutMeasurement::new(self, size.clamped_to(max_size), max_size, Vec::new())
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
        Box::new(B::create(self.kind))
    }

    fn configure_widget(&self, widget: &mut dyn PlatformWidget) {
        let Some(button) = widget.as_any_mut().downcast_mut::<B>() else {
            return;
        };
        if let Some(config) = &self.config {
            config(button);
        }
        if let Some(font) = &self.font {
            // The platform ignores this for the fixed glyph kinds.
            button.set_title_font(font);
        }
        button.set_title(&self.title);
    }

    fn can_reuse_widget(&self, widget: &dyn PlatformWidget) -> bool {
        widget.as_any().is::<B>()
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
#[path = "tests/button_tests.rs"]
mod tests;
