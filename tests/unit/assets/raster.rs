use super::*;

fn canvas(w: u32, h: u32) -> Canvas {
    Canvas::new(w, h).unwrap()
}

#[test]
fn new_checks_byte_length() {
    assert!(Raster::new(2, 2, vec![0; 16]).is_ok());
    assert!(Raster::new(2, 2, vec![0; 15]).is_err());
}

#[test]
fn filled_and_pixel_access() {
    let r = Raster::filled(canvas(3, 2), [1, 2, 3, 4]);
    assert_eq!(r.data().len(), 24);
    assert_eq!(r.pixel(2, 1), Some([1, 2, 3, 4]));
    assert_eq!(r.pixel(3, 0), None);
    assert_eq!(r.pixel(0, 2), None);
}

#[test]
fn clones_share_pixels() {
    let r = Raster::transparent(canvas(4, 4));
    let c = r.clone();
    assert!(r.shares_pixels_with(&c));
    let other = Raster::transparent(canvas(4, 4));
    assert!(!r.shares_pixels_with(&other));
    assert_eq!(r, other);
}

#[test]
fn fit_to_borrows_when_sizes_match() {
    let r = Raster::filled(canvas(4, 4), [255, 255, 255, 255]);
    assert!(matches!(r.fit_to(canvas(4, 4)).unwrap(), Cow::Borrowed(_)));
}

#[test]
fn fit_to_stretches_uniform_content() {
    let r = Raster::filled(canvas(2, 2), [0, 0, 255, 255]);
    let fitted = r.fit_to(canvas(8, 6)).unwrap();
    assert_eq!(fitted.canvas(), canvas(8, 6));
    assert_eq!(fitted.pixel(7, 5), Some([0, 0, 255, 255]));
    assert_eq!(fitted.pixel(0, 0), Some([0, 0, 255, 255]));
}

#[test]
fn straight_conversion_unpremultiplies() {
    let r = Raster::new(2, 1, vec![128, 64, 0, 128, 0, 0, 0, 0]).unwrap();
    assert_eq!(r.to_straight_rgba8(), vec![255, 128, 0, 128, 0, 0, 0, 0]);
}
