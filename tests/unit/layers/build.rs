use super::*;
use crate::foundation::core::{Canvas, Point, Rgba8};
use crate::layers::model::LayerKind;
use crate::stroke::smooth::{SmoothingMode, smooth};

fn gesture() -> Vec<Point> {
    vec![
        Point::new(20.0, 20.0),
        Point::new(40.0, 140.0),
        Point::new(280.0, 200.0),
    ]
}

#[test]
fn draw_layer_carries_line_style() {
    let def = LineDefinition::draw(Rgba8::RED, 8.0, gesture()).with_opacity(0.5);
    let path = smooth(&def.points, SmoothingMode::QuadraticMidpoint);
    let layer = build_draw_layer(&def, path.clone()).unwrap();
    let Layer::Stroke(s) = &layer else {
        panic!("expected stroke layer");
    };
    assert_eq!(s.color, Rgba8::RED);
    assert_eq!(s.stroke_width, 8.0);
    assert_eq!(s.opacity, 0.5);
    assert_eq!(s.path, path);
    assert_eq!(layer.kind(), LayerKind::Stroke);
}

#[test]
fn draw_builder_rejects_erase_line() {
    let def = LineDefinition::erase(8.0, gesture());
    assert!(build_draw_layer(&def, BezPath::new()).is_err());
}

#[test]
fn erase_layer_freezes_snapshot_and_ignores_color() {
    let snapshot = Raster::filled(Canvas::new(4, 4).unwrap(), [255, 255, 255, 255]);
    let mut def = LineDefinition::erase(32.0, gesture());
    def.color = Rgba8::GREEN;
    let path = smooth(&def.points, SmoothingMode::QuadraticMidpoint);
    let layer = build_erase_layer(&def, path.clone(), snapshot.clone()).unwrap();
    let Layer::Erase(e) = &layer else {
        panic!("expected erase layer");
    };
    assert!(e.revealed.shares_pixels_with(&snapshot));
    assert_eq!(e.mask, path);
    assert_eq!(e.stroke_width, 32.0);
    assert_eq!(e.opacity, 1.0);
}

#[test]
fn erase_builder_rejects_draw_line() {
    let def = LineDefinition::draw(Rgba8::RED, 8.0, gesture());
    let snapshot = Raster::transparent(Canvas::new(1, 1).unwrap());
    assert!(build_erase_layer(&def, BezPath::new(), snapshot).is_err());
}
