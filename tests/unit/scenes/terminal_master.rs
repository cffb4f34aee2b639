use super::*;
use crate::{
    foundation::core::Fps,
    scenes::skills_reveal::SKILLS_TITLE,
};

fn config() -> VideoConfig {
    VideoConfig::new(Fps::whole(30).unwrap(), 240, 1280, 700).unwrap()
}

fn ctx(frame: u64) -> FrameCtx {
    FrameCtx::root(FrameIndex(frame), config())
}

#[test]
fn terminal_rises_from_below_at_frame_zero() {
    let s = TerminalMasterState::at(&ctx(0));
    assert!((80..=81).contains(&s.flip_start));
    assert!((s.translate_y - 490.0).abs() < 1e-9);
    assert_eq!(s.translate_z, -120.0);
    assert!((s.scale - 0.96).abs() < 1e-12);
    assert_eq!(s.rotate_x, 20.0);
    assert_eq!(s.rotate_y, 10.0);
    assert_eq!(s.terminal_opacity, 1.0);
}

#[test]
fn entrance_overshoots_past_rest() {
    let min = (0..60)
        .map(|f| TerminalMasterState::at(&ctx(f)).translate_y)
        .fold(f64::INFINITY, f64::min);
    assert!(min < 0.0);
}

#[test]
fn skills_reveal_mounts_at_the_flip() {
    let flip = TerminalMasterState::at(&ctx(0)).flip_start;
    let before = TerminalMaster::layer(&ctx(flip - 1));
    assert!(!before.texts().contains(&SKILLS_TITLE));
    let s = TerminalMasterState::at(&ctx(flip - 1));
    assert_eq!(s.flip, 0.0);
    assert_eq!(s.rotate_x, 20.0);

    let at = TerminalMaster::layer(&ctx(flip));
    assert!(at.texts().contains(&SKILLS_TITLE));
}

#[test]
fn terminal_is_gone_by_the_last_frame() {
    let s = TerminalMasterState::at(&ctx(239));
    assert!(s.terminal_opacity < 1e-6);
    assert!((s.rotate_x - 75.0).abs() < 1e-6);
    assert_eq!(s.rotate_y, -10.0);
    assert!((s.translate_z - 130.0).abs() < 1e-3);
}

#[test]
fn terminal_layer_is_projected_on_top() {
    let frame = TerminalMaster::new(config()).render(FrameIndex(0));
    assert_eq!(frame.background, Some(Rgba8::WHITE));
    let Node::Group(root) = &frame.root else {
        panic!("expected root group");
    };
    let Some(Node::Group(terminal)) = root.children.last() else {
        panic!("expected terminal group");
    };
    let projection = terminal.projection.expect("projection");
    assert_eq!(projection.origin, Point::new(640.0, 700.0));
    assert_eq!(projection.perspective_origin, Point::new(640.0, 350.0));
}

#[test]
fn render_is_a_pure_function_of_the_frame() {
    let comp = TerminalMaster::new(config());
    for f in [0, 45, 81, 150, 239] {
        assert_eq!(comp.render(FrameIndex(f)), comp.render(FrameIndex(f)));
    }
}
