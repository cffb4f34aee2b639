use super::*;
use crate::foundation::core::{Fps, FrameIndex, VideoConfig};
use crate::scene::node::{AssetRef, Group, VideoNode};

fn frame(index: u64, root: Node) -> Frame {
    Frame {
        config: VideoConfig::new(Fps::whole(30).unwrap(), 100, 64, 32).unwrap(),
        frame: FrameIndex(index),
        background: Some(Rgba8::WHITE),
        root,
        audio: vec![],
    }
}

fn square(x: f64) -> Node {
    Node::rect(Rect::new(x, 0.0, x + 10.0, 10.0), 0.0, Rgba8::BLACK)
}

#[test]
fn frame_index_is_not_hashed() {
    assert_eq!(fingerprint(&frame(3, square(0.0))), fingerprint(&frame(40, square(0.0))));
}

#[test]
fn geometry_changes_change_the_fingerprint() {
    assert_ne!(fingerprint(&frame(0, square(0.0))), fingerprint(&frame(0, square(0.5))));
}

#[test]
fn invisible_groups_hash_alike() {
    let a = Node::Group(Group::new(vec![square(0.0)]).opacity(0.0));
    let b = Node::Group(Group::new(vec![square(20.0)]).opacity(0.0));
    assert_eq!(fingerprint(&frame(0, a)), fingerprint(&frame(0, b)));
}

#[test]
fn video_frames_never_collide_across_time() {
    let video = || {
        Node::Video(VideoNode {
            asset: AssetRef::new("bg.mp4"),
            rect: Rect::new(0.0, 0.0, 64.0, 32.0),
            fit: ObjectFit::Cover,
            looped: true,
            muted: true,
        })
    };
    assert_ne!(fingerprint(&frame(1, video())), fingerprint(&frame(2, video())));
}
