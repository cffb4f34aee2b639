use super::*;
use kurbo::Point;

#[test]
fn clamp_and_lerp() {
    assert_eq!(clamp(1.2, 0.9, 1.05), 1.05);
    assert_eq!(clamp(0.5, 0.9, 1.05), 0.9);
    assert_eq!(lerp(10.0, 20.0, 0.25), 12.5);
}

#[test]
fn viewbox_meet_centers_letterbox() {
    let view = Rect::new(0.0, 0.0, 200.0, 120.0);
    let target = Rect::new(0.0, 0.0, 400.0, 400.0);
    let a = fit_viewbox(view, target);
    // Width-limited: scale 2, vertical letterbox of (400 - 240) / 2.
    assert_eq!(a * Point::new(0.0, 0.0), Point::new(0.0, 80.0));
    assert_eq!(a * Point::new(200.0, 120.0), Point::new(400.0, 320.0));
}
