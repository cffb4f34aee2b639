use super::*;
use crate::{
    foundation::core::{Fps, Rect, Rgba8, VideoConfig},
    scene::node::Node,
};

/// Still for the first three frames, then a bar that grows each frame.
struct Steps {
    config: VideoConfig,
}

impl Steps {
    fn new() -> Self {
        Self {
            config: VideoConfig::new(Fps::whole(30).unwrap(), 6, 8, 8).unwrap(),
        }
    }
}

impl Composition for Steps {
    fn id(&self) -> &str {
        "Steps"
    }

    fn config(&self) -> VideoConfig {
        self.config
    }

    fn render(&self, frame: FrameIndex) -> Frame {
        let width = frame.0.saturating_sub(2) as f64;
        Frame {
            config: self.config,
            frame,
            background: Some(Rgba8::WHITE),
            root: Node::rect(Rect::new(0.0, 0.0, width, 8.0), 0.0, Rgba8::BLACK),
            audio: Vec::new(),
        }
    }
}

fn all_frames() -> FrameRange {
    FrameRange::new(FrameIndex(0), FrameIndex(6)).unwrap()
}

#[test]
fn sequential_render_covers_the_range() {
    let (frames, stats) = render_range(
        &Steps::new(),
        all_frames(),
        &RenderThreading::default(),
        &RasterOpts::default(),
    )
    .unwrap();
    assert_eq!(frames.len(), 6);
    assert_eq!(
        stats,
        RenderStats {
            frames_total: 6,
            frames_rendered: 6,
            frames_elided: 0,
        }
    );
    assert_eq!(frames[0].pixel(0, 0), Some([255, 255, 255, 255]));
    assert_eq!(frames[5].pixel(0, 0), Some([0, 0, 0, 255]));
}

#[test]
fn static_frames_are_elided_without_changing_output() {
    let comp = Steps::new();
    let (plain, _) = render_range(
        &comp,
        all_frames(),
        &RenderThreading::default(),
        &RasterOpts::default(),
    )
    .unwrap();
    let threading = RenderThreading {
        parallel: true,
        chunk_size: 4,
        threads: Some(2),
        static_frame_elision: true,
    };
    let (elided, stats) = render_range(&comp, all_frames(), &threading, &RasterOpts::default())
        .unwrap();
    assert_eq!(elided, plain);
    assert_eq!(stats.frames_total, 6);
    assert_eq!(stats.frames_rendered, 4);
    assert_eq!(stats.frames_elided, 2);
}

#[test]
fn invalid_ranges_and_threads_are_rejected() {
    let comp = Steps::new();
    let opts = RasterOpts::default();
    let empty = FrameRange::new(FrameIndex(2), FrameIndex(2)).unwrap();
    assert!(matches!(
        render_range(&comp, empty, &RenderThreading::default(), &opts),
        Err(ReelError::Validation(_))
    ));
    let past_end = FrameRange::new(FrameIndex(0), FrameIndex(7)).unwrap();
    assert!(matches!(
        render_range(&comp, past_end, &RenderThreading::default(), &opts),
        Err(ReelError::Validation(_))
    ));
    let zero_threads = RenderThreading {
        parallel: true,
        threads: Some(0),
        ..RenderThreading::default()
    };
    assert!(matches!(
        render_range(&comp, all_frames(), &zero_threads, &opts),
        Err(ReelError::Validation(_))
    ));
}

#[test]
fn png_sequence_is_numbered_from_start() {
    let dir = std::env::temp_dir().join(format!("promoreel_seq_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    let raster = Rasterizer::new(&RasterOpts::default());
    let frames = vec![
        render_frame(&Steps::new(), FrameIndex(3), &raster).unwrap(),
        render_frame(&Steps::new(), FrameIndex(4), &raster).unwrap(),
    ];
    let paths = write_png_sequence(&dir, FrameIndex(3), &frames).unwrap();
    let names: Vec<_> = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["frame_000003.png", "frame_000004.png"]);
    assert!(paths.iter().all(|p| p.exists()));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn streaming_hands_over_one_chunk_at_a_time() {
    let threading = RenderThreading {
        chunk_size: 4,
        ..RenderThreading::default()
    };
    let mut chunks = Vec::new();
    let stats = render_range_with(
        &Steps::new(),
        all_frames(),
        &threading,
        &RasterOpts::default(),
        |start, frames| {
            chunks.push((start, frames.len()));
            Ok(())
        },
    )
    .unwrap();
    assert_eq!(chunks, [(FrameIndex(0), 4), (FrameIndex(4), 2)]);
    assert_eq!(stats.frames_total, 6);
}

#[test]
fn sink_errors_stop_the_render() {
    let threading = RenderThreading {
        chunk_size: 2,
        ..RenderThreading::default()
    };
    let mut calls = 0;
    let result = render_range_with(
        &Steps::new(),
        all_frames(),
        &threading,
        &RasterOpts::default(),
        |_, _| {
            calls += 1;
            Err(ReelError::render("disk full"))
        },
    );
    assert!(matches!(result, Err(ReelError::Render(_))));
    assert_eq!(calls, 1);
}
