use placekit_geometry::{FontDescriptor, Size, TextStyle};

use crate::text::{AttributedText, StyleRun, Text};
use crate::{GridTextMeasurer, TextMeasurer};

const BIG: Size = Size {
    width: 10_000.0,
    height: 10_000.0,
};

fn measurer() -> GridTextMeasurer {
    GridTextMeasurer
}

#[test]
fn plain_text_scales_with_font_size() {
    let size = measurer().measure(&Text::plain("Hi"), &FontDescriptor::system(10.0), BIG);
    assert_eq!(size, Size::new(10.0, 12.5));

    let doubled = measurer().measure(&Text::plain("Hi"), &FontDescriptor::system(20.0), BIG);
    assert_eq!(doubled, Size::new(20.0, 25.0));
}

#[test]
fn empty_content_measures_zero() {
    let size = measurer().measure(&Text::plain(""), &FontDescriptor::system(18.0), BIG);
    assert_eq!(size, Size::ZERO);

    let attributed = Text::attributed(AttributedText::new(""));
    let size = measurer().measure(&attributed, &FontDescriptor::system(18.0), BIG);
    assert_eq!(size, Size::ZERO);
}

#[test]
fn newline_is_a_hard_break() {
    let font = FontDescriptor::system(10.0);
    let size = measurer().measure(&Text::plain("a\nbc"), &font, BIG);
    assert_eq!(size, Size::new(10.0, 25.0));
}

#[test]
fn wraps_at_the_width_ceiling() {
    let font = FontDescriptor::system(10.0);
    // Each char advances 5.0; four chars need 20.0, the ceiling allows 10.0.
    let max = Size::new(10.0, 10_000.0);
    let size = measurer().measure(&Text::plain("abcd"), &font, max);
    assert_eq!(size, Size::new(10.0, 25.0));
}

#[test]
fn result_never_exceeds_the_ceiling() {
    let font = FontDescriptor::system(10.0);
    let max = Size::new(3.0, 7.0);
    let size = measurer().measure(&Text::plain("hello world"), &font, max);
    assert!(size.width <= max.width);
    assert!(size.height <= max.height);
}

#[test]
fn zero_size_font_measures_nothing() {
    let size = measurer().measure(&Text::plain("anything"), &FontDescriptor::system(0.0), BIG);
    assert_eq!(size, Size::ZERO);
}

#[test]
fn wide_characters_take_two_cells() {
    let font = FontDescriptor::system(10.0);
    let size = measurer().measure(&Text::plain("世"), &font, BIG);
    assert_eq!(size.width, 10.0);
}

#[test]
fn attributed_run_overrides_metrics() {
    let font = FontDescriptor::system(10.0);
    let plain = measurer().measure(&Text::plain("ab"), &font, BIG);

    let styled = AttributedText::styled(
        "ab",
        vec![StyleRun::new(
            1..2,
            TextStyle {
                font_size: Some(20.0),
                ..TextStyle::default()
            },
        )],
    );
    let rich = measurer().measure(&Text::attributed(styled), &font, BIG);

    // 'a' advances at 10pt, 'b' at 20pt; the line grows to the larger font.
    assert_eq!(plain, Size::new(10.0, 12.5));
    assert_eq!(rich, Size::new(15.0, 25.0));
}

#[test]
fn line_height_tracks_the_font() {
    assert_eq!(
        measurer().line_height(&FontDescriptor::system(16.0)),
        20.0
    );
}

#[test]
fn with_text_preserves_runs() {
    let styled = AttributedText::styled(
        "hello",
        vec![StyleRun::new(
            0..5,
            TextStyle {
                font_size: Some(20.0),
                ..TextStyle::default()
            },
        )],
    );
    let substituted = styled.with_text(" ");
    assert_eq!(substituted.text(), " ");
    assert_eq!(substituted.runs().len(), 1);
    assert_eq!(substituted.runs()[0].range, 0..1);
}
