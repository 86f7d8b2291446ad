use super::*;

#[test]
fn reference_grid_has_55_by_39_dots() {
    let pattern = DotGridPattern::default();
    let canvas = Canvas::new(550, 390).unwrap();
    let centers = pattern.dot_centers(canvas).unwrap();
    assert_eq!(centers.len(), 55 * 39);
    assert_eq!(centers[0], Point::new(10.0, 10.0));
    assert_eq!(centers[54], Point::new(550.0, 10.0));
    assert_eq!(centers[55], Point::new(10.0, 20.0));
    assert_eq!(*centers.last().unwrap(), Point::new(550.0, 390.0));
}

#[test]
fn zero_sized_grid_has_no_dots() {
    let pattern = DotGridPattern {
        columns: 0,
        ..DotGridPattern::default()
    };
    assert!(
        pattern
            .dot_centers(Canvas::new(10, 10).unwrap())
            .unwrap()
            .is_empty()
    );
}

#[test]
fn rasterized_pattern_is_opaque_backdrop_with_dots() {
    let pattern = DotGridPattern {
        columns: 4,
        rows: 4,
        dot_diameter: 4.0,
        ..DotGridPattern::default()
    };
    let canvas = Canvas::new(40, 40).unwrap();
    let raster = pattern.rasterize(canvas).unwrap();
    assert_eq!(raster.canvas(), canvas);
    assert!(raster.data().chunks_exact(4).all(|px| px[3] == 255));
    // Between dots: backdrop.
    assert_eq!(raster.pixel(4, 4), Some([255, 255, 255, 255]));
    // Dot centered on (10, 10) fully covers the pixel at (9, 9)..(10, 10).
    assert_eq!(raster.pixel(9, 9), Some([255, 0, 0, 255]));
}

#[test]
fn rasterize_is_deterministic() {
    let pattern = DotGridPattern::default();
    let canvas = Canvas::new(120, 80).unwrap();
    assert_eq!(
        pattern.rasterize(canvas).unwrap(),
        pattern.rasterize(canvas).unwrap()
    );
}

#[test]
fn oversized_grid_is_an_error_not_a_panic() {
    let pattern = DotGridPattern {
        columns: u32::MAX,
        rows: u32::MAX,
        ..DotGridPattern::default()
    };
    assert!(pattern.validate().is_err());
    assert!(pattern.rasterize(Canvas::new(8, 8).unwrap()).is_err());
}

#[test]
fn negative_or_nan_diameter_is_rejected() {
    for dot_diameter in [-1.0, f64::NAN, f64::INFINITY] {
        let pattern = DotGridPattern {
            dot_diameter,
            ..DotGridPattern::default()
        };
        assert!(pattern.validate().is_err());
    }
    DotGridPattern::default().validate().unwrap();
}
