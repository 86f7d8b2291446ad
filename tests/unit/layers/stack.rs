use super::*;
use crate::foundation::core::{BezPath, Canvas, Rgba8};
use crate::layers::model::{LayerKind, StrokeLayer};

fn stroke(color: Rgba8) -> Layer {
    let mut path = BezPath::new();
    path.move_to((0.0, 0.0));
    path.line_to((10.0, 10.0));
    Layer::Stroke(StrokeLayer {
        path,
        color,
        opacity: 1.0,
        stroke_width: 4.0,
    })
}

#[test]
fn new_stack_holds_only_an_empty_background() {
    let stack = LayerStack::new();
    assert_eq!(stack.len(), 1);
    assert!(stack.is_background_only());
    assert_eq!(stack.top().kind(), LayerKind::Background);
    assert!(stack.background().image.is_none());
}

#[test]
fn push_then_pop_restores_previous_top() {
    let mut stack = LayerStack::new();
    stack.push(stroke(Rgba8::RED));
    stack.push(stroke(Rgba8::BLUE));
    assert_eq!(stack.len(), 3);

    let popped = stack.pop().unwrap();
    assert_eq!(popped, stroke(Rgba8::BLUE));
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.pushed(), &[stroke(Rgba8::RED)]);
}

#[test]
fn pop_on_background_only_is_idempotent_noop() {
    let mut stack = LayerStack::new();
    let img = Raster::transparent(Canvas::new(2, 2).unwrap());
    stack.set_background_image(Some(img.clone()));
    for _ in 0..3 {
        assert!(stack.pop().is_none());
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.background().image.as_ref(), Some(&img));
    }
}

#[test]
fn set_background_keeps_length() {
    let mut stack = LayerStack::new();
    stack.push(stroke(Rgba8::RED));
    stack.set_background_image(Some(Raster::transparent(Canvas::new(1, 1).unwrap())));
    assert_eq!(stack.len(), 2);
    stack.set_background_image(None);
    assert_eq!(stack.len(), 2);
    assert!(stack.background().image.is_none());
}

#[test]
fn layers_iterates_bottom_to_top_with_background_first() {
    let mut stack = LayerStack::new();
    stack.push(stroke(Rgba8::RED));
    stack.push(stroke(Rgba8::GREEN));
    let kinds: Vec<_> = stack.layers().map(StackEntry::kind).collect();
    assert_eq!(
        kinds,
        vec![LayerKind::Background, LayerKind::Stroke, LayerKind::Stroke]
    );
    assert_eq!(stack.get(0).map(StackEntry::kind), Some(LayerKind::Background));
    let Some(StackEntry::Stroke(s)) = stack.get(2) else {
        panic!("expected stroke at index 2");
    };
    assert_eq!(s.color, Rgba8::GREEN);
    assert!(stack.get(3).is_none());
}
