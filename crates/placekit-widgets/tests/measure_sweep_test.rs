//! Sizing sweep across fonts, sizes, and titles.
//!
//! Exercises the clamp and determinism guarantees over the same grid of
//! inputs the native control was originally characterized with.

use std::any::Any;
use std::sync::Arc;

use placekit_geometry::{FontDescriptor, Rect, Size};
use placekit_layout::{ConfigurableLayout, PlatformWidget};
use placekit_text::Text;
use placekit_widgets::{ButtonKind, ButtonLayout, ButtonWidget};

const BIG: Size = Size {
    width: 10_000.0,
    height: 10_000.0,
};
const SMALL: Size = Size {
    width: 17.0,
    height: 9.0,
};

struct SweepButton;

impl PlatformWidget for SweepButton {
    fn set_frame(&mut self, _frame: Rect) {}

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl ButtonWidget for SweepButton {
    fn create(_kind: ButtonKind) -> Self {
        SweepButton
    }

    fn set_title(&mut self, _title: &Text) {}

    fn set_title_font(&mut self, _font: &FontDescriptor) {}
}

fn fonts() -> Vec<Option<FontDescriptor>> {
    let mut fonts = vec![None];
    for family in ["Helvetica", "Helvetica Neue"] {
        for size in 0..=100 {
            fonts.push(Some(FontDescriptor::named(family, size as f32)));
        }
    }
    fonts
}

const TITLES: [&str; 5] = ["", " ", "Hi", "Hello world", "Hello! 😄😄😄"];

const KINDS: [ButtonKind; 4] = [
    ButtonKind::Custom,
    ButtonKind::System,
    ButtonKind::ContactAdd,
    ButtonKind::Other(999),
];

fn button(kind: ButtonKind, title: &str, font: &Option<FontDescriptor>) -> Arc<ButtonLayout<SweepButton>> {
    let mut layout = ButtonLayout::new(kind, title);
    if let Some(font) = font {
        layout = layout.with_font(font.clone());
    }
    Arc::new(layout)
}

#[test]
fn sizes_stay_within_any_ceiling() {
    for font in fonts() {
        for title in TITLES {
            for kind in KINDS {
                for max in [BIG, SMALL, Size::ZERO] {
                    let size = button(kind, title, &font).measure(max).size;
                    assert!(
                        size.width <= max.width && size.height <= max.height,
                        "{kind:?} {title:?} {font:?} exceeded {max:?}: {size:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn repeated_measurement_is_identical() {
    for font in fonts() {
        for title in TITLES {
            for kind in KINDS {
                let layout = button(kind, title, &font);
                let first = Arc::clone(&layout).measure(BIG).size;
                let second = layout.measure(BIG).size;
                assert_eq!(first, second, "{kind:?} {title:?} {font:?}");
            }
        }
    }
}

#[test]
fn glyph_kind_sizes_are_font_independent() {
    let bare = button(ButtonKind::ContactAdd, "X", &None).measure(BIG).size;
    for font in fonts().into_iter().flatten() {
        let sized = button(ButtonKind::ContactAdd, "X", &Some(font)).measure(BIG).size;
        assert_eq!(bare, sized);
    }
}
