use super::*;
use crate::foundation::core::{BezPath, Fps, FrameIndex, Point, VideoConfig};
use crate::scene::{
    node::{AssetRef, Group, TextStyle, VideoNode},
    paint::{Dash, LinearGradient},
};

fn frame(root: Node) -> Frame {
    Frame {
        config: VideoConfig::new(Fps::whole(30).unwrap(), 10, 200, 100).unwrap(),
        frame: FrameIndex(0),
        background: Some(Rgba8::rgb(0x0b, 0x0b, 0x0b)),
        root,
        audio: vec![],
    }
}

#[test]
fn num_is_compact() {
    assert_eq!(num(1.0), "1");
    assert_eq!(num(0.5), "0.5");
    assert_eq!(num(-0.00001), "0");
    assert_eq!(num(12.34567), "12.3457");
    assert_eq!(num(f64::NAN), "0");
}

#[test]
fn document_has_viewbox_and_background() {
    let svg = frame(Node::empty()).to_svg();
    assert!(svg.starts_with("<svg "));
    assert!(svg.contains(r#"viewBox="0 0 200 100""#));
    assert!(svg.contains(r##"fill="#0b0b0b""##));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn text_is_escaped() {
    let svg = frame(Node::text(
        "a < b & \"c\"",
        Point::new(1.0, 2.0),
        TextStyle::sans(10.0, Rgba8::BLACK),
    ))
    .to_svg();
    assert!(svg.contains("a &lt; b &amp; &quot;c&quot;"));
}

#[test]
fn gradients_and_clips_land_in_defs() {
    let grad = LinearGradient::css_angle(
        90.0,
        vec![
            GradientStop::new(0.0, Rgba8::WHITE),
            GradientStop::new(1.0, Rgba8::BLACK),
        ],
    );
    let root = Node::Group(
        Group::new(vec![Node::rect(Rect::new(0.0, 0.0, 50.0, 50.0), 4.0, grad)])
            .clip(Rect::new(0.0, 0.0, 40.0, 40.0), 8.0),
    );
    let svg = frame(root).to_svg();
    let defs_end = svg.find("</defs>").unwrap();
    assert!(svg[..defs_end].contains("<linearGradient"));
    assert!(svg[..defs_end].contains("<clipPath"));
    assert!(svg[defs_end..].contains(r#"clip-path="url(#"#));
}

#[test]
fn zero_opacity_groups_are_dropped() {
    let root = Node::Group(
        Group::new(vec![Node::text(
            "hidden",
            Point::ZERO,
            TextStyle::sans(10.0, Rgba8::BLACK),
        )])
        .opacity(0.0),
    );
    assert!(!frame(root).to_svg().contains("hidden"));
}

#[test]
fn dashes_are_rescaled_to_true_arc_length() {
    let path = BezPath::from_svg("M 0 0 L 100 0").unwrap();
    let node = Node::Path(PathNode {
        path,
        fill: None,
        stroke: Some(Stroke::new(Rgba8::BLACK, 2.0).dash(Dash::reveal(0.25))),
        path_length: Some(1.0),
        shadow: None,
    });
    let svg = frame(node).to_svg();
    assert!(svg.contains(r#"stroke-dasharray="100""#), "{svg}");
    assert!(svg.contains(r#"stroke-dashoffset="75""#), "{svg}");
}

#[test]
fn videos_are_left_out() {
    let root = Node::Video(VideoNode {
        asset: AssetRef::new("bg.mp4"),
        rect: Rect::new(0.0, 0.0, 10.0, 10.0),
        fit: ObjectFit::Cover,
        looped: true,
        muted: true,
    });
    assert!(!frame(root).to_svg().contains("bg.mp4"));
}

#[test]
fn shadows_emit_drop_shadow_filters() {
    let root = Node::Rect(crate::scene::node::RectNode {
        rect: Rect::new(0.0, 0.0, 10.0, 10.0),
        radius: 0.0,
        fill: Some(Paint::Solid(Rgba8::WHITE)),
        stroke: None,
        shadow: Some(Shadow::new(0.0, 4.0, 12.0, Rgba8::rgba(0, 0, 0, 0.25))),
    });
    let svg = frame(root).to_svg();
    assert!(svg.contains("<feDropShadow"));
    assert!(svg.contains(r#"stdDeviation="6""#));
}
