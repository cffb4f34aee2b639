use crate::{
    foundation::{
        core::{FrameIndex, VideoConfig},
        error::{ReelError, ReelResult},
    },
    scene::node::Frame,
};
use serde_json::Value;

/// A renderable, frame-indexed composition.
///
/// `render` is a pure function of the frame: the same index always yields the same tree, and
/// frames outside the configured range clamp to the nearest boundary state.
pub trait Composition: Send + Sync {
    /// Registry id.
    fn id(&self) -> &str;
    /// Fixed video configuration.
    fn config(&self) -> VideoConfig;
    /// Visual tree of one frame.
    fn render(&self, frame: FrameIndex) -> Frame;
}

/// Builds a composition from its configuration and fully-merged props.
pub type CompositionFactory = fn(VideoConfig, Value) -> ReelResult<Box<dyn Composition>>;

/// One registered composition.
#[derive(Clone)]
pub struct RegistryEntry {
    /// Unique id.
    pub id: &'static str,
    /// Video configuration.
    pub config: VideoConfig,
    /// Props used when the host supplies none; a JSON object.
    pub default_props: Value,
    /// Constructor.
    pub factory: CompositionFactory,
}

impl std::fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("default_props", &self.default_props)
            .finish_non_exhaustive()
    }
}

/// Id-addressed catalogue of compositions.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
}

impl Registry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in composition.
    pub fn builtin() -> ReelResult<Self> {
        let mut reg = Self::new();
        for entry in crate::scenes::builtin_entries()? {
            reg.register(entry)?;
        }
        Ok(reg)
    }

    /// Add an entry; ids must be unique and default props must be an object.
    pub fn register(&mut self, entry: RegistryEntry) -> ReelResult<()> {
        if entry.id.is_empty() {
            return Err(ReelError::validation("composition id must be non-empty"));
        }
        if self.entries.iter().any(|e| e.id == entry.id) {
            return Err(ReelError::validation(format!(
                "duplicate composition id '{}'",
                entry.id
            )));
        }
        if !entry.default_props.is_object() {
            return Err(ReelError::validation(format!(
                "default props of '{}' must be a JSON object",
                entry.id
            )));
        }
        tracing::debug!(id = entry.id, "registered composition");
        self.entries.push(entry);
        Ok(())
    }

    /// Registered ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.id)
    }

    /// Every entry in registration order.
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// Look up an entry.
    pub fn get(&self, id: &str) -> ReelResult<&RegistryEntry> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| ReelError::lookup(format!("unknown composition '{id}'")))
    }

    /// Instantiate `id`, shallow-merging `overrides` over the default props.
    #[tracing::instrument(skip(self, overrides))]
    pub fn instantiate(
        &self,
        id: &str,
        overrides: Option<&Value>,
    ) -> ReelResult<Box<dyn Composition>> {
        let entry = self.get(id)?;
        let props = merge_props(&entry.default_props, overrides)?;
        (entry.factory)(entry.config, props)
    }
}

/// Top-level keys of `overrides` replace those of `defaults`.
pub(crate) fn merge_props(defaults: &Value, overrides: Option<&Value>) -> ReelResult<Value> {
    let mut merged = defaults.clone();
    let Some(overrides) = overrides else {
        return Ok(merged);
    };
    let Value::Object(over) = overrides else {
        return Err(ReelError::props("props must be a JSON object"));
    };
    let Value::Object(base) = &mut merged else {
        return Err(ReelError::props("default props must be a JSON object"));
    };
    for (k, v) in over {
        base.insert(k.clone(), v.clone());
    }
    Ok(merged)
}

/// Deserialize merged props, mapping failures to `ReelError::Props`.
pub(crate) fn parse_props<T: serde::de::DeserializeOwned>(id: &str, props: Value) -> ReelResult<T> {
    serde_json::from_value(props).map_err(|e| ReelError::props(format!("{id}: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/composition/registry.rs"]
mod tests;
