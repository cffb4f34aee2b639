use super::*;

fn fps() -> Fps {
    Fps::whole(30).unwrap()
}

fn card(phase: f64, always_visible: bool) -> WidgetCard {
    WidgetCard {
        x: 640.0,
        y: 360.0,
        rotation: 12.0,
        start_frame: 0.0,
        phase_offset: Some(phase),
        offset: Vec2::new(-220.0, 0.0),
        size: Size::new(260.0, 150.0),
        always_visible,
    }
}

#[test]
fn stable_window_zeroes_float_and_wobble() {
    let c = card(90.0, true);
    for f in 90..=150 {
        let s = c.state(f as f64, fps());
        assert_eq!(s.float, 0.0, "float at {f}");
        assert_eq!(s.wobble, 0.0, "wobble at {f}");
        assert_eq!(s.content_float, 0.0, "content float at {f}");
        assert!(s.drift > 0.0);
    }
    for f in [89.0, 151.0] {
        let s = c.state(f, fps());
        assert!(s.float.abs() > 1e-3, "float at {f}");
        assert!(s.wobble.abs() > 1e-3, "wobble at {f}");
    }
}

#[test]
fn always_visible_cards_skip_the_entrance() {
    let s = card(30.0, true).state(0.0, fps());
    assert_eq!(s.entrance, 1.0);
    assert_eq!(s.opacity, 1.0);
    assert_eq!(s.scale, 1.0);
    assert_eq!(s.translate, Vec2::ZERO);
}

#[test]
fn entrance_slides_in_from_offset() {
    let mut c = card(0.0, false);
    c.start_frame = 20.0;
    let before = c.state(20.0, fps());
    assert_eq!(before.opacity, 0.0);
    assert_eq!(before.scale, 0.8);
    assert_eq!(before.translate, Vec2::new(-220.0, 0.0));

    let after = c.state(200.0, fps());
    assert!((after.opacity - 1.0).abs() < 1e-9);
    assert!(after.translate.x.abs() < 1.0);
    assert!((after.scale - 1.0).abs() < 1e-2);
}

#[test]
fn placement_centers_the_card_on_its_anchor() {
    let c = card(90.0, true);
    let s = c.state(100.0, fps());
    let center = c.placement(&s) * Point::new(130.0, 75.0);
    assert!((center.x - 640.0).abs() < 1e-9);
    assert!((center.y - 360.0).abs() < 1e-9);
}

#[test]
fn image_cards_reference_their_asset() {
    let node = card(0.0, true).render(10.0, fps(), CardContent::Image("Graf/grafana_table.webp"));
    assert_eq!(node.assets().len(), 1);
}
