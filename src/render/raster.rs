use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    foundation::{
        core::Rgba8,
        error::{ReelError, ReelResult},
    },
    scene::node::Frame,
};

/// Rasterization settings.
#[derive(Clone, Debug, Default)]
pub struct RasterOpts {
    /// Directory asset references resolve against; also searched for `.ttf`/`.otf` fonts.
    pub assets_root: Option<PathBuf>,
    /// Matte painted under every frame; transparent areas show through when `None`.
    pub background: Option<Rgba8>,
}

/// One rendered frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8.
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)` as stored.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data.get(i..i + 4).map(|px| [px[0], px[1], px[2], px[3]])
    }

    /// Straight-alpha copy of the pixel data.
    pub fn to_straight_rgba(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 {
                px[..3].fill(0);
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }

    /// Write a PNG, creating parent directories as needed.
    pub fn write_png(&self, path: &Path) -> ReelResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                ReelError::render(format!("create output dir '{}': {e}", parent.display()))
            })?;
        }
        image::save_buffer_with_format(
            path,
            &self.to_straight_rgba(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| ReelError::render(format!("write png '{}': {e}", path.display())))
    }
}

/// Reusable rasterizer; the font database is loaded once and shared.
#[derive(Clone)]
pub struct Rasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
    resources_dir: Option<PathBuf>,
    matte: Option<Rgba8>,
}

impl std::fmt::Debug for Rasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rasterizer")
            .field("faces", &self.fontdb.len())
            .field("resources_dir", &self.resources_dir)
            .field("matte", &self.matte)
            .finish()
    }
}

impl Rasterizer {
    pub fn new(opts: &RasterOpts) -> Self {
        Self {
            fontdb: build_fontdb(opts.assets_root.as_deref()),
            resources_dir: opts.assets_root.clone(),
            matte: opts.background,
        }
    }

    /// Number of loaded font faces.
    pub fn font_count(&self) -> usize {
        self.fontdb.len()
    }

    /// Rasterize `frame` to premultiplied RGBA8 at canvas size.
    #[tracing::instrument(skip(self, frame), fields(frame = frame.frame.0))]
    pub fn rasterize(&self, frame: &Frame) -> ReelResult<FrameRGBA> {
        let svg = frame.to_svg();
        let opts = usvg::Options {
            resources_dir: self.resources_dir.clone(),
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(&svg, &opts)
            .map_err(|e| ReelError::render(format!("parse frame svg: {e}")))?;

        let (width, height) = (frame.config.width, frame.config.height);
        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| ReelError::render("failed to allocate frame pixmap"))?;
        if let Some(c) = self.matte {
            pixmap.fill(resvg::tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a));
        }
        resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap.as_mut());

        tracing::debug!(width, height, "rasterized frame");
        Ok(FrameRGBA {
            width,
            height,
            data: pixmap.take(),
            premultiplied: true,
        })
    }
}

/// One-shot [`Rasterizer::rasterize`].
pub fn rasterize(frame: &Frame, opts: &RasterOpts) -> ReelResult<FrameRGBA> {
    Rasterizer::new(opts).rasterize(frame)
}

fn build_fontdb(assets_root: Option<&Path>) -> Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    if let Some(root) = assets_root {
        load_fonts_from_dir(&mut db, root);
        load_fonts_from_dir(&mut db, &root.join("fonts"));
    }
    tracing::debug!(faces = db.len(), "font database ready");
    Arc::new(db)
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in rd.flatten() {
        let path = entry.path();
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        if !matches!(ext.to_ascii_lowercase().as_str(), "ttf" | "otf" | "ttc") {
            continue;
        }
        if let Err(e) = db.load_font_file(&path) {
            tracing::debug!(path = %path.display(), error = %e, "skipping font file");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
