use super::*;
use crate::foundation::core::{Fps, FrameIndex, VideoConfig};

#[test]
fn open_ended_sequence_starts_at_from() {
    let s = Sequence::new(80);
    assert!(!s.is_active(79.0));
    assert!(s.is_active(80.0));
    assert!(s.is_active(10_000.0));
    assert_eq!(s.local_frame(79.0), None);
    assert_eq!(s.local_frame(95.0), Some(15.0));
}

#[test]
fn bounded_sequence_ends_exclusively() {
    let s = Sequence::new(10).with_duration(5);
    assert!(s.is_active(14.0));
    assert!(!s.is_active(15.0));
}

#[test]
fn negative_from_is_already_running() {
    let s = Sequence::new(-10);
    assert_eq!(s.local_frame(0.0), Some(10.0));
}

#[test]
fn wrap_hands_the_child_a_local_frame() {
    let config = VideoConfig::new(Fps::whole(30).unwrap(), 240, 100, 100).unwrap();
    let ctx = FrameCtx::root(FrameIndex(100), config);
    let mut seen = None;
    let node = Sequence::new(80).wrap(&ctx, |child| {
        seen = Some((child.frame, child.global));
        Node::empty()
    });
    assert!(node.is_some());
    assert_eq!(seen, Some((20.0, 100.0)));

    let early = FrameCtx::root(FrameIndex(10), config);
    assert!(Sequence::new(80).wrap(&early, |_| Node::empty()).is_none());
}
