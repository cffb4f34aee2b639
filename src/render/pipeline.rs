use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use rayon::prelude::*;

use crate::{
    composition::registry::Composition,
    foundation::{
        core::{FrameIndex, FrameRange},
        error::{ReelError, ReelResult},
    },
    render::raster::{FrameRGBA, RasterOpts, Rasterizer},
    scene::{
        fingerprint::{FrameFingerprint, fingerprint},
        node::Frame,
    },
};

/// How [`render_range`] schedules work.
#[derive(Clone, Debug)]
pub struct RenderThreading {
    pub parallel: bool,
    /// Frames built and fingerprinted at a time.
    pub chunk_size: usize,
    /// Worker count; `None` lets rayon decide.
    pub threads: Option<usize>,
    /// Rasterize identical frames once.
    pub static_frame_elision: bool,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
            static_frame_elision: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub frames_total: u64,
    pub frames_rendered: u64,
    pub frames_elided: u64,
}

impl RenderStats {
    fn absorb(&mut self, other: RenderStats) {
        self.frames_total += other.frames_total;
        self.frames_rendered += other.frames_rendered;
        self.frames_elided += other.frames_elided;
    }
}

/// Build and rasterize a single frame.
pub fn render_frame(
    comp: &dyn Composition,
    frame: FrameIndex,
    raster: &Rasterizer,
) -> ReelResult<FrameRGBA> {
    raster.rasterize(&comp.render(frame))
}

/// Render `range` (start inclusive, end exclusive), which must lie inside the composition.
///
/// Collects every frame in memory; use [`render_range_with`] to stream long ranges.
pub fn render_range(
    comp: &dyn Composition,
    range: FrameRange,
    threading: &RenderThreading,
    raster: &RasterOpts,
) -> ReelResult<(Vec<FrameRGBA>, RenderStats)> {
    let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);
    let stats = render_range_with(comp, range, threading, raster, |_, mut frames| {
        out.append(&mut frames);
        Ok(())
    })?;
    Ok((out, stats))
}

/// Render `range` chunk by chunk, handing each finished chunk to `sink` with the index of its
/// first frame. At most one chunk of pixels is alive at a time.
#[tracing::instrument(skip(comp, threading, raster, sink), fields(id = comp.id()))]
pub fn render_range_with<F>(
    comp: &dyn Composition,
    range: FrameRange,
    threading: &RenderThreading,
    raster: &RasterOpts,
    mut sink: F,
) -> ReelResult<RenderStats>
where
    F: FnMut(FrameIndex, Vec<FrameRGBA>) -> ReelResult<()>,
{
    if range.is_empty() {
        return Err(ReelError::validation("render range must be non-empty"));
    }
    let duration = comp.config().duration_in_frames;
    if range.end.0 > duration {
        return Err(ReelError::validation(format!(
            "render range end {} exceeds composition duration {duration}",
            range.end.0
        )));
    }

    let rasterizer = Rasterizer::new(raster);
    let pool = if threading.parallel {
        Some(build_thread_pool(threading.threads)?)
    } else {
        None
    };
    let chunk_size = normalized_chunk_size(threading.chunk_size);

    let mut stats = RenderStats::default();
    let mut warned_video = false;

    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = (chunk_start + chunk_size).min(range.end.0);
        let frames: Vec<Frame> = (chunk_start..chunk_end)
            .map(|f| comp.render(FrameIndex(f)))
            .collect();
        if !warned_video && frames.iter().any(|f| f.video_count() > 0) {
            tracing::warn!("video nodes are not rasterized; their area stays transparent");
            warned_video = true;
        }

        let (rendered, chunk_stats) = render_chunk(
            &frames,
            &rasterizer,
            threading.static_frame_elision,
            pool.as_ref(),
        )?;
        drop(frames);
        sink(FrameIndex(chunk_start), rendered)?;
        stats.absorb(chunk_stats);
        chunk_start = chunk_end;
    }

    tracing::info!(
        total = stats.frames_total,
        rendered = stats.frames_rendered,
        elided = stats.frames_elided,
        "rendered range"
    );
    Ok(stats)
}

fn render_chunk(
    frames: &[Frame],
    rasterizer: &Rasterizer,
    elide: bool,
    pool: Option<&rayon::ThreadPool>,
) -> ReelResult<(Vec<FrameRGBA>, RenderStats)> {
    let mut unique_indices = Vec::<usize>::with_capacity(frames.len());
    let mut frame_to_unique = Vec::<usize>::with_capacity(frames.len());
    if elide {
        let mut first = HashMap::<FrameFingerprint, usize>::new();
        for (idx, frame) in frames.iter().enumerate() {
            let fp = fingerprint(frame);
            if let Some(existing) = first.get(&fp).copied() {
                frame_to_unique.push(existing);
            } else {
                let slot = unique_indices.len();
                unique_indices.push(idx);
                first.insert(fp, slot);
                frame_to_unique.push(slot);
            }
        }
    } else {
        unique_indices.extend(0..frames.len());
        frame_to_unique.extend(0..frames.len());
    }

    let rendered: Vec<ReelResult<FrameRGBA>> = match pool {
        Some(pool) => pool.install(|| {
            unique_indices
                .par_iter()
                .map(|&i| rasterizer.rasterize(&frames[i]))
                .collect()
        }),
        None => unique_indices
            .iter()
            .map(|&i| rasterizer.rasterize(&frames[i]))
            .collect(),
    };
    let mut unique_frames = Vec::<Option<FrameRGBA>>::with_capacity(rendered.len());
    for item in rendered {
        unique_frames.push(Some(item?));
    }

    let mut remaining = vec![0usize; unique_frames.len()];
    for &u in &frame_to_unique {
        remaining[u] += 1;
    }

    let mut out = Vec::<FrameRGBA>::with_capacity(frame_to_unique.len());
    for u in frame_to_unique {
        let missing = || ReelError::render("elided frame source missing");
        if remaining[u] == 1 {
            out.push(unique_frames[u].take().ok_or_else(missing)?);
        } else {
            out.push(unique_frames[u].as_ref().ok_or_else(missing)?.clone());
        }
        remaining[u] -= 1;
    }

    let total = frames.len() as u64;
    let rendered_count = unique_indices.len() as u64;
    if rendered_count < total {
        tracing::debug!(elided = total - rendered_count, "reused identical frames");
    }
    Ok((
        out,
        RenderStats {
            frames_total: total,
            frames_rendered: rendered_count,
            frames_elided: total.saturating_sub(rendered_count),
        },
    ))
}

/// Write `frames` as `frame_000000.png`... numbered from `start`; returns the written paths.
pub fn write_png_sequence(
    dir: &Path,
    start: FrameIndex,
    frames: &[FrameRGBA],
) -> ReelResult<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .map_err(|e| ReelError::render(format!("create output dir '{}': {e}", dir.display())))?;
    let mut written = Vec::with_capacity(frames.len());
    for (i, frame) in frames.iter().enumerate() {
        let path = dir.join(format!("frame_{:06}.png", start.0 + i as u64));
        frame.write_png(&path)?;
        written.push(path);
    }
    Ok(written)
}

fn build_thread_pool(threads: Option<usize>) -> ReelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ReelError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ReelError::render(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    chunk_size.max(1) as u64
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
