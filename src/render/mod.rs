//! Host-side preview rendering: frame trees to pixels via `usvg`/`resvg`.

pub(crate) mod pipeline;
pub(crate) mod raster;
