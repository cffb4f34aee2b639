use super::*;
use crate::scene::paint::Stroke;

#[test]
fn transformed_and_faded_skip_identity_wrappers() {
    let r = Node::rect(Rect::new(0.0, 0.0, 10.0, 10.0), 0.0, Rgba8::WHITE);
    assert_eq!(r.clone().transformed(Affine::IDENTITY), r);
    assert_eq!(r.clone().faded(1.0), r);

    let Node::Group(g) = r.clone().faded(0.5) else {
        panic!("expected group");
    };
    assert_eq!(g.opacity, 0.5);
    assert_eq!(g.children.len(), 1);
}

#[test]
fn group_opacity_is_clamped() {
    assert_eq!(Group::new(vec![]).opacity(1.7).opacity, 1.0);
    assert_eq!(Group::new(vec![]).opacity(-0.2).opacity, 0.0);
}

#[test]
fn texts_and_assets_walk_nested_groups() {
    let tree = Node::group(vec![
        Node::text("a", Point::ZERO, TextStyle::sans(12.0, Rgba8::BLACK)),
        Node::group(vec![
            Node::image("brand/logo.png", Rect::new(0.0, 0.0, 4.0, 4.0), ObjectFit::Contain),
            Node::text("b", Point::ZERO, TextStyle::mono(12.0, Rgba8::BLACK)),
        ]),
        Node::line(Point::ZERO, Point::new(1.0, 1.0), Stroke::new(Rgba8::BLACK, 1.0)),
    ]);
    assert_eq!(tree.texts(), vec!["a", "b"]);
    assert_eq!(tree.assets(), vec![AssetRef::new("brand/logo.png")]);
}

#[test]
fn monospace_width_estimate_is_point_six_em() {
    let style = TextStyle::mono(20.0, Rgba8::BLACK);
    assert!((style.estimate_width("abcde") - 60.0).abs() < 1e-9);
    let spaced = TextStyle::sans(10.0, Rgba8::BLACK).letter_spacing(1.0);
    assert!((spaced.estimate_width("ab") - 13.0).abs() < 1e-9);
}

#[test]
fn frame_counts_video_nodes() {
    let config = VideoConfig::new(crate::foundation::core::Fps::whole(30).unwrap(), 10, 8, 8)
        .unwrap();
    let frame = Frame {
        config,
        frame: FrameIndex(0),
        background: None,
        root: Node::group(vec![Node::Video(VideoNode {
            asset: AssetRef::new("bg.mp4"),
            rect: Rect::new(0.0, 0.0, 8.0, 8.0),
            fit: ObjectFit::Cover,
            looped: true,
            muted: true,
        })]),
        audio: vec![],
    };
    assert_eq!(frame.video_count(), 1);
}

#[test]
fn node_json_is_tagged_by_type() {
    let n = Node::rect(Rect::new(0.0, 0.0, 1.0, 1.0), 2.0, Rgba8::WHITE);
    let v = serde_json::to_value(&n).unwrap();
    assert_eq!(v["type"], "rect");
    let back: Node = serde_json::from_value(v).unwrap();
    assert_eq!(back, n);
}
