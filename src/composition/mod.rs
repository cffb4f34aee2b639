pub(crate) mod context;
pub(crate) mod registry;
pub(crate) mod sequence;
