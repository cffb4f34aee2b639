use super::*;

fn config() -> VideoConfig {
    VideoConfig::new(Fps::whole(30).unwrap(), 150, 1280, 720).unwrap()
}

#[test]
fn root_clamps_past_the_last_frame() {
    let ctx = FrameCtx::root(FrameIndex(999), config());
    assert_eq!(ctx.frame, 149.0);
    assert_eq!(ctx.global, 149.0);
}

#[test]
fn shifted_moves_local_but_not_global() {
    let ctx = FrameCtx::root(FrameIndex(40), config()).shifted(60.0);
    assert_eq!(ctx.frame, -20.0);
    assert_eq!(ctx.global, 40.0);
}

#[test]
fn second_helpers_follow_fps() {
    let ctx = FrameCtx::root(FrameIndex(0), config());
    assert_eq!(ctx.secs(0.5), 15.0);
    assert_eq!(ctx.round_secs(0.22), 7.0);
    assert_eq!(ctx.round_secs(1.2), 36.0);
    assert_eq!(ctx.width(), 1280.0);
    assert_eq!(ctx.duration(), 150.0);
}
