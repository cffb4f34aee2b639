use super::*;
use crate::{
    foundation::core::{Fps, FrameIndex, Rect, Rgba8, VideoConfig},
    scene::node::Node,
};

fn tiny_frame(background: Option<Rgba8>, root: Node) -> Frame {
    Frame {
        config: VideoConfig::new(Fps::whole(30).unwrap(), 1, 4, 4).unwrap(),
        frame: FrameIndex(0),
        background,
        root,
        audio: Vec::new(),
    }
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("promoreel_{name}_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn straight_alpha_undoes_premultiplication() {
    let f = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![64, 0, 32, 128, 9, 9, 9, 0],
        premultiplied: true,
    };
    assert_eq!(f.to_straight_rgba(), vec![128, 0, 64, 128, 0, 0, 0, 0]);
    assert_eq!(f.pixel(1, 0), Some([9, 9, 9, 0]));
    assert_eq!(f.pixel(2, 0), None);
}

#[test]
fn background_and_rect_are_painted() {
    let root = Node::rect(Rect::new(0.0, 0.0, 2.0, 4.0), 0.0, Rgba8::rgb(0, 0, 255));
    let frame = tiny_frame(Some(Rgba8::rgb(255, 0, 0)), root);
    let px = rasterize(&frame, &RasterOpts::default()).unwrap();
    assert_eq!((px.width, px.height), (4, 4));
    assert!(px.premultiplied);
    assert_eq!(px.pixel(0, 0), Some([0, 0, 255, 255]));
    assert_eq!(px.pixel(3, 3), Some([255, 0, 0, 255]));
}

#[test]
fn transparent_canvas_stays_clear() {
    let px = rasterize(&tiny_frame(None, Node::empty()), &RasterOpts::default()).unwrap();
    assert!(px.data.iter().all(|&b| b == 0));
}

#[test]
fn png_is_written_with_parent_dirs() {
    let dir = scratch_dir("png");
    let path = dir.join("nested").join("out.png");
    let frame = tiny_frame(Some(Rgba8::rgb(10, 20, 30)), Node::empty());
    rasterize(&frame, &RasterOpts::default())
        .unwrap()
        .write_png(&path)
        .unwrap();
    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (4, 4));
    assert_eq!(img.get_pixel(1, 1).0, [10, 20, 30, 255]);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn matte_fills_transparent_areas_only() {
    let opts = RasterOpts {
        background: Some(Rgba8::rgb(0, 255, 0)),
        ..RasterOpts::default()
    };
    let root = Node::rect(Rect::new(0.0, 0.0, 2.0, 4.0), 0.0, Rgba8::rgb(0, 0, 255));
    let px = rasterize(&tiny_frame(None, root.clone()), &opts).unwrap();
    assert_eq!(px.pixel(0, 0), Some([0, 0, 255, 255]));
    assert_eq!(px.pixel(3, 3), Some([0, 255, 0, 255]));

    let own = rasterize(&tiny_frame(Some(Rgba8::rgb(255, 0, 0)), root), &opts).unwrap();
    assert_eq!(own.pixel(3, 3), Some([255, 0, 0, 255]));
}
