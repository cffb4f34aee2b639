pub(crate) mod fingerprint;
pub(crate) mod node;
pub(crate) mod paint;
pub(crate) mod projection;
pub(crate) mod svg;
