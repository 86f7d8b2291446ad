use super::*;
use crate::foundation::error::InkError;

#[test]
fn defaults_match_reference_setup() {
    let cfg = EngineConfig::default();
    assert_eq!(cfg.canvas, Canvas::new(300, 300).unwrap());
    assert_eq!(cfg.smoothing, SmoothingMode::QuadraticMidpoint);
    assert_eq!(cfg.clear_rgba, None);
    assert_eq!(cfg.pattern.columns, 55);
    assert_eq!(cfg.pattern.rows, 39);
    cfg.validate().unwrap();
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg: EngineConfig =
        serde_json::from_str(r#"{ "canvas": { "width": 64, "height": 32 }, "smoothing": "polyline" }"#)
            .unwrap();
    assert_eq!(cfg.canvas, Canvas::new(64, 32).unwrap());
    assert_eq!(cfg.smoothing, SmoothingMode::Polyline);
    assert_eq!(cfg.pattern, DotGridPattern::default());
}

#[test]
fn zero_canvas_fails_validation() {
    let cfg = EngineConfig::default().with_canvas(Canvas {
        width: 0,
        height: 10,
    });
    assert!(cfg.validate().is_err());
}

#[test]
fn smoothing_names_parse() {
    assert_eq!(parse_smoothing("Polyline"), Some(SmoothingMode::Polyline));
    assert_eq!(
        parse_smoothing(" quadratic_midpoint "),
        Some(SmoothingMode::QuadraticMidpoint)
    );
    assert_eq!(parse_smoothing("bezier"), None);
}

#[test]
fn render_settings_carry_clear_color() {
    let cfg = EngineConfig::default().with_clear_rgba(Some([1, 2, 3, 4]));
    assert_eq!(cfg.render_settings().clear_rgba, Some([1, 2, 3, 4]));
}

#[test]
fn oversized_pattern_from_json_fails_validation() {
    let cfg: EngineConfig = serde_json::from_str(
        r#"{ "pattern": { "columns": 4294967295, "rows": 4294967295 } }"#,
    )
    .unwrap();
    assert!(matches!(cfg.validate(), Err(InkError::Validation(_))));
}

#[test]
fn bad_dot_diameter_fails_validation() {
    let cfg = EngineConfig::default().with_pattern(DotGridPattern {
        dot_diameter: -2.0,
        ..DotGridPattern::default()
    });
    assert!(cfg.validate().is_err());
}
