use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.len_frames(), 3);
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
}

#[test]
fn fps_frames_secs_roundtrip_floor() {
    let fps = Fps::new(30000, 1001).unwrap();
    let secs = fps.frames_to_secs(123.0);
    assert_eq!(fps.secs_to_frames_floor(secs), 123);
}

#[test]
fn fps_round_matches_whole_rates() {
    let fps = Fps::whole(30).unwrap();
    assert_eq!(fps.secs_to_frames_round(0.7), 21);
    assert_eq!(fps.secs_to_frames_round(0.22), 7);
    assert_eq!(fps.secs_to_frames_round(1.6), 48);
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn video_config_rejects_empty() {
    let fps = Fps::whole(30).unwrap();
    assert!(VideoConfig::new(fps, 0, 10, 10).is_err());
    assert!(VideoConfig::new(fps, 10, 0, 10).is_err());

    let cfg = VideoConfig::new(fps, 150, 1280, 720).unwrap();
    assert!(cfg.contains(FrameIndex(149)));
    assert!(!cfg.contains(FrameIndex(150)));
    assert_eq!(cfg.last_frame(), FrameIndex(149));
    assert_eq!(cfg.canvas().center(), Point::new(640.0, 360.0));
}

#[test]
fn hex_colors_parse() {
    assert_eq!(Rgba8::from_hex("#fff").unwrap(), Rgba8::WHITE);
    assert_eq!(
        Rgba8::from_hex("#1f2328").unwrap(),
        Rgba8::rgb(0x1f, 0x23, 0x28)
    );
    assert_eq!(Rgba8::from_hex("#00000080").unwrap().a, 0x80);
    assert!(Rgba8::from_hex("1f2328").is_err());
    assert!(Rgba8::from_hex("#12345").is_err());
    assert!(Rgba8::from_hex("#zzzzzz").is_err());
    assert_eq!(Rgba8::rgb(255, 95, 87).svg_color(), "#ff5f57");
}

#[test]
fn fractional_alpha_rounds() {
    let c = Rgba8::rgba(255, 255, 255, 0.5);
    assert_eq!(c.a, 128);
    assert_eq!(Rgba8::rgba(0, 0, 0, 2.0).a, 255);
    assert_eq!(Rgba8::WHITE.with_alpha(0).premultiplied(), [0, 0, 0, 0]);
}
