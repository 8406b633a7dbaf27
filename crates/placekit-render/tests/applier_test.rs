//! End-to-end applier behavior against recording widgets.

use std::sync::Arc;

use placekit_geometry::{FontDescriptor, Rect, Size};
use placekit_layout::{ConfigurableLayout, LayoutArrangement, LayoutRef};
use placekit_render::WidgetApplier;
use placekit_testing::{
    journal, reset_journal, RecordingButton, RecordingLabel, WidgetEvent, WidgetOp,
};
use placekit_widgets::{ButtonKind, ButtonLayout, LabelLayout};

const VIEWPORT: Size = Size {
    width: 320.0,
    height: 240.0,
};

fn arrange(layout: LayoutRef) -> LayoutArrangement {
    let measurement = Arc::clone(&layout).measure(VIEWPORT);
    layout.arrange(Rect::from_size(VIEWPORT), &measurement)
}

fn button(title: &str) -> Arc<ButtonLayout<RecordingButton>> {
    Arc::new(ButtonLayout::new(ButtonKind::System, title))
}

#[test]
fn applies_configuration_then_frame() {
    reset_journal();
    let layout = Arc::new(
        ButtonLayout::new(ButtonKind::Custom, "Go")
            .with_font(FontDescriptor::system(20.0))
            .with_config(|widget: &mut RecordingButton| {
                widget.ops.push(WidgetOp::Config);
                widget.note = "customized".to_owned();
            }),
    );
    let arrangement = arrange(layout);

    let mut applier = WidgetApplier::new();
    applier.apply(&arrangement);

    let widget = applier.widgets().next().unwrap();
    let recorded = widget.as_any().downcast_ref::<RecordingButton>().unwrap();
    assert_eq!(
        recorded.ops,
        vec![
            WidgetOp::Config,
            WidgetOp::SetFont,
            WidgetOp::SetTitle,
            WidgetOp::SetFrame
        ]
    );
    assert_eq!(recorded.note, "customized");
    assert_eq!(recorded.frame, Some(arrangement.frame));
}

#[test]
fn reuse_id_recycles_the_widget_across_passes() {
    reset_journal();
    let mut applier = WidgetApplier::new();

    let first = arrange(Arc::new(
        ButtonLayout::<RecordingButton>::new(ButtonKind::System, "OK").with_reuse_id("confirm"),
    ));
    applier.apply(&first);

    let second = arrange(Arc::new(
        ButtonLayout::<RecordingButton>::new(ButtonKind::System, "Retry").with_reuse_id("confirm"),
    ));
    applier.apply(&second);

    // One creation, two configurations.
    assert_eq!(journal().len(), 1);
    let widget = applier.widgets().next().unwrap();
    let recorded = widget.as_any().downcast_ref::<RecordingButton>().unwrap();
    assert_eq!(recorded.title.as_ref().map(|t| t.content().to_owned()), Some("Retry".to_owned()));
}

#[test]
fn reuse_requires_a_compatible_widget_type() {
    reset_journal();
    let mut applier = WidgetApplier::new();

    applier.apply(&arrange(Arc::new(
        ButtonLayout::<RecordingButton>::new(ButtonKind::System, "OK").with_reuse_id("slot"),
    )));
    applier.apply(&arrange(Arc::new(
        LabelLayout::<RecordingLabel>::new("caption").with_reuse_id("slot"),
    )));

    let events = journal();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[1], WidgetEvent::CreatedLabel { .. }));
    assert_eq!(applier.len(), 1);
}

#[test]
fn widgets_without_a_reuse_id_are_recreated() {
    reset_journal();
    let mut applier = WidgetApplier::new();
    let arrangement = arrange(button("OK"));

    applier.apply(&arrangement);
    applier.apply(&arrangement);

    assert_eq!(journal().len(), 2);
}

#[test]
fn a_pass_drops_widgets_it_no_longer_needs() {
    reset_journal();
    let mut applier = WidgetApplier::new();

    // A container's output: parent frame with two child arrangements.
    let parent = arrange(button("parent"));
    let left = arrange(button("left"));
    let with_children = LayoutArrangement::new(
        Arc::clone(&parent.layout),
        parent.frame,
        vec![left.clone()],
    );
    applier.apply(&with_children);
    assert_eq!(applier.len(), 2);

    let without_children =
        LayoutArrangement::new(Arc::clone(&parent.layout), parent.frame, Vec::new());
    applier.apply(&without_children);
    assert_eq!(applier.len(), 1);
}

#[test]
fn walks_parents_before_children() {
    reset_journal();
    let parent = arrange(button("parent"));
    let a = arrange(button("a"));
    let b = arrange(button("b"));
    let tree = LayoutArrangement::new(
        Arc::clone(&parent.layout),
        parent.frame,
        vec![a.clone(), b.clone()],
    );

    let mut applier = WidgetApplier::new();
    applier.apply(&tree);

    let titles: Vec<String> = applier
        .widgets()
        .map(|widget| {
            widget
                .as_any()
                .downcast_ref::<RecordingButton>()
                .unwrap()
                .title
                .as_ref()
                .unwrap()
                .content()
                .to_owned()
        })
        .collect();
    assert_eq!(titles, vec!["parent", "a", "b"]);
}
