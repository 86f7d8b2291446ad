use super::*;

#[test]
fn defaults_match_a_thin_black_draw() {
    let d = LineDefinition::default();
    assert_eq!(d.kind, LineKind::Draw);
    assert_eq!(d.color, Rgba8::BLACK);
    assert_eq!(d.opacity, 1.0);
    assert_eq!(d.stroke_width, 8.0);
    assert!(d.points.is_empty());
    d.validate().unwrap();
}

#[test]
fn validate_rejects_bad_width_and_opacity() {
    let d = LineDefinition::draw(Rgba8::RED, 0.0, []);
    assert!(d.validate().is_err());

    let d = LineDefinition::draw(Rgba8::RED, 4.0, []).with_opacity(1.5);
    assert!(d.validate().is_err());

    let d = LineDefinition::erase(f64::NAN, []);
    assert!(d.validate().is_err());
}

#[test]
fn validate_rejects_non_finite_points() {
    let d = LineDefinition::erase(4.0, [Point::new(1.0, 1.0), Point::new(f64::INFINITY, 0.0)]);
    let err = d.validate().unwrap_err();
    assert!(err.to_string().contains("point 1"));
}

#[test]
fn json_fills_missing_fields_with_defaults() {
    let d: LineDefinition =
        serde_json::from_str(r#"{ "kind": "erase", "points": [[1.0, 2.0]] }"#).unwrap();
    assert_eq!(d.kind, LineKind::Erase);
    assert_eq!(d.stroke_width, 8.0);
    assert_eq!(d.points, vec![Point::new(1.0, 2.0)]);
}
