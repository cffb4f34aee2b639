use super::*;
use crate::foundation::core::{Fps, FrameIndex, VideoConfig};

fn ctx(frame: u64) -> FrameCtx {
    let config = VideoConfig::new(Fps::whole(30).unwrap(), 240, 1280, 700).unwrap();
    FrameCtx::root(FrameIndex(frame), config)
}

#[test]
fn title_starts_hidden_and_offset() {
    let s = SkillsRevealState::at(&ctx(0));
    assert!(s.title_visible);
    assert!(!s.logo_visible);
    assert_eq!(s.title_opacity, 0.0);
    assert_eq!(s.title_translate, 18.0);
    assert!((s.title_scale - 0.96).abs() < 1e-12);
    assert_eq!(SkillsReveal::layer(&ctx(0)).texts(), [SKILLS_TITLE]);
}

#[test]
fn title_scale_settles_after_half_a_second() {
    for f in [15, 30, 59] {
        assert!((SkillsRevealState::at(&ctx(f)).title_scale - 1.0).abs() < 1e-12);
    }
}

#[test]
fn title_fades_in_monotonically() {
    let mut prev = -1.0;
    for f in 0..60 {
        let s = SkillsRevealState::at(&ctx(f));
        assert!(s.title_opacity >= prev, "frame {f}");
        prev = s.title_opacity;
    }
    assert!(prev > 0.9);
}

#[test]
fn logos_replace_the_title_after_two_seconds() {
    let before = SkillsReveal::layer(&ctx(59));
    assert_eq!(before.texts(), [SKILLS_TITLE]);

    let s = SkillsRevealState::at(&ctx(60));
    assert!(!s.title_visible);
    assert!(s.logo_visible);
    assert_eq!(s.logo_opacity, 0.0);
    assert!((s.logo_scale - 0.92).abs() < 1e-12);
    assert_eq!(SkillsReveal::layer(&ctx(60)).texts(), ["+"]);

    let late = SkillsRevealState::at(&ctx(180));
    assert!(late.logo_opacity > 0.99);
    assert!(late.logo_scale > 0.999);
}

#[test]
fn logo_scale_tracks_the_spring_linearly() {
    for f in 60..120 {
        let s = SkillsRevealState::at(&ctx(f));
        let expected = 0.92 + 0.08 * s.logo_opacity;
        assert!((s.logo_scale - expected).abs() < 1e-12, "frame {f}");
    }
}

#[test]
fn title_is_fully_visible_within_half_a_second() {
    assert!(SkillsRevealState::at(&ctx(10)).title_opacity > 0.94);
    assert!(SkillsRevealState::at(&ctx(15)).title_opacity > 0.99);
}
