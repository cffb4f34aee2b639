use super::*;
use crate::foundation::core::Fps;

fn config() -> VideoConfig {
    VideoConfig::new(Fps::whole(30).unwrap(), 150, 1280, 720).unwrap()
}

fn ctx(frame: u64) -> FrameCtx {
    FrameCtx::root(FrameIndex(frame), config())
}

#[test]
fn headline_types_between_one_and_two_point_two_seconds() {
    assert_eq!(DrilldownState::at(&ctx(30)).headline, "");
    assert_eq!(DrilldownState::at(&ctx(48)).headline, "I just");
    assert_eq!(DrilldownState::at(&ctx(66)).headline, DRILLDOWN_HEADLINE);
    assert_eq!(DrilldownState::at(&ctx(149)).headline, DRILLDOWN_HEADLINE);
}

#[test]
fn content_fades_in_after_the_title() {
    let early = DrilldownState::at(&ctx(20));
    assert_eq!(early.content_opacity, 0.0);
    assert!(early.title_opacity > 0.6);
    let late = DrilldownState::at(&ctx(60));
    assert_eq!(late.content_opacity, 1.0);
    assert_eq!(late.title_opacity, 1.0);
}

#[test]
fn gear_spins_shrinks_and_fades_out() {
    let s = DrilldownState::at(&ctx(30));
    assert!((s.gear_rotation - 36.0).abs() < 1e-9);
    assert!(s.gear_scale > 1.0);
    assert_eq!(s.gear_opacity, 1.0);
    assert_eq!(s.loader_fade, 1.0);

    let gone = DrilldownState::at(&ctx(60));
    assert_eq!(gone.gear_scale, 1.0);
    assert_eq!(gone.loader_fade, 0.0);
}

#[test]
fn logo_enters_between_one_point_four_and_two_seconds() {
    assert_eq!(DrilldownState::at(&ctx(40)).logo_enter, 0.0);
    assert_eq!(DrilldownState::at(&ctx(60)).logo_enter, 1.0);
}

#[test]
fn card_phases_follow_the_layout() {
    let c = ctx(0);
    let phases: Vec<_> = DrilldownCard::ALL
        .iter()
        .map(|k| k.card(&c).phase_offset.unwrap())
        .collect();
    assert_eq!(phases, [30.0, 36.0, 39.0, 45.0, 42.0, 48.0]);
    assert!(DrilldownCard::ALL.iter().all(|k| k.card(&c).always_visible));
}

#[test]
fn gauge_card_slides_right() {
    assert_eq!(DrilldownCard::CpuGauges.card(&ctx(45)).x, 1260.0);
    assert_eq!(DrilldownCard::CpuGauges.card(&ctx(100)).x, 1340.0);
    let mid = DrilldownCard::CpuGauges.card(&ctx(66)).x;
    assert!(mid > 1260.0 && mid < 1340.0);
}

#[test]
fn frame_carries_audio_and_every_asset() {
    let comp = DrilldownRemoval::new(config()).unwrap();
    let frame = comp.render(FrameIndex(100));
    assert_eq!(frame.background, None);
    assert_eq!(frame.audio.len(), 1);
    assert_eq!(frame.audio[0].asset.as_str(), DRILLDOWN_AUDIO);
    assert_eq!(frame.audio[0].volume, 0.6);

    let assets: Vec<_> = frame.root.assets().iter().map(|a| a.as_str().to_owned()).collect();
    for expected in [TABLE_IMAGE, GEAR_IMAGE, GRAFANA_LOGO] {
        assert!(assets.iter().any(|a| a == expected), "missing {expected}");
    }

    let texts = frame.root.texts();
    assert!(texts.contains(&DRILLDOWN_HEADLINE));
    assert!(texts.contains(&DRILLDOWN_SUBTITLE));
    assert!(texts.contains(&"sda6"));
    assert!(texts.contains(&"CPU Requests usage"));
}

#[test]
fn gear_and_logo_share_one_drop_shadow() {
    let c = ctx(120);
    let stack = DrilldownRemoval::center_stack(&c, &DrilldownState::at(&c));
    let mut shadows = Vec::new();
    stack.visit(&mut |node| {
        if let Node::Image(img) = node
            && [GEAR_IMAGE, GRAFANA_LOGO].contains(&img.asset.as_str())
        {
            shadows.push((img.asset.as_str().to_owned(), img.shadow));
        }
    });
    assert_eq!(shadows.len(), 2);
    for (asset, shadow) in shadows {
        assert_eq!(
            shadow,
            Some(Shadow::new(0.0, 6.0, 12.0, Rgba8::rgba(0, 0, 0, 0.25))),
            "{asset}"
        );
    }
}
