//! The built-in compositions.

pub(crate) mod drilldown;
pub(crate) mod lower_third;
pub(crate) mod skills_logos;
pub(crate) mod skills_reveal;
pub(crate) mod terminal_master;
pub(crate) mod terminal_prompt;

use crate::{
    animation::spring::SpringConfig,
    composition::registry::{RegistryEntry, parse_props},
    foundation::{
        core::{Fps, VideoConfig},
        error::{ReelError, ReelResult},
    },
};
use serde_json::json;

/// Geometric sans used by the dashboard and lower third.
pub(crate) const OUTFIT_FAMILY: &str = "Outfit, Inter, Helvetica Neue, Arial, sans-serif";

/// Props contract of compositions that take none: only `{}` is accepted.
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct NoProps {}

pub(crate) fn expect_no_props(id: &str, props: serde_json::Value) -> ReelResult<()> {
    parse_props::<NoProps>(id, props).map(|_| ())
}

/// Every spring the built-in scenes sample.
pub(crate) const SCENE_SPRINGS: [(&str, SpringConfig); 7] = [
    ("terminal entrance", terminal_master::ENTRANCE_SPRING),
    ("terminal flip", terminal_master::FLIP_SPRING),
    ("skills reveal", skills_reveal::SKILLS_REVEAL_SPRING),
    ("subscribe release", lower_third::RELEASE_SPRING),
    ("cpu gauge", crate::widgets::gauge::CPU_GAUGE_SPRING),
    ("storage gauge", crate::widgets::gauge::STORAGE_GAUGE_SPRING),
    ("card entrance", crate::widgets::card::CARD_ENTRANCE_SPRING),
];

pub(crate) fn validate_springs(springs: &[(&str, SpringConfig)]) -> ReelResult<()> {
    for (name, cfg) in springs {
        cfg.validate()
            .map_err(|e| ReelError::animation(format!("{name} spring: {e}")))?;
    }
    Ok(())
}

/// Registry entries of every built-in composition, in catalogue order.
pub(crate) fn builtin_entries() -> ReelResult<Vec<RegistryEntry>> {
    validate_springs(&SCENE_SPRINGS)?;
    let fps = Fps::whole(30)?;
    Ok(vec![
        RegistryEntry {
            id: terminal_prompt::TerminalPrompt::ID,
            config: VideoConfig::new(fps, 180, 1280, 700)?,
            default_props: json!({}),
            factory: terminal_prompt::TerminalPrompt::factory,
        },
        RegistryEntry {
            id: terminal_master::TerminalMaster::ID,
            config: VideoConfig::new(fps, 240, 1280, 700)?,
            default_props: json!({}),
            factory: terminal_master::TerminalMaster::factory,
        },
        RegistryEntry {
            id: skills_logos::SkillsLogos::ID,
            config: VideoConfig::new(fps, 180, 1280, 700)?,
            default_props: json!({}),
            factory: skills_logos::SkillsLogos::factory,
        },
        RegistryEntry {
            id: drilldown::DrilldownRemoval::ID,
            config: VideoConfig::new(fps, 150, 1280, 720)?,
            default_props: json!({}),
            factory: drilldown::DrilldownRemoval::factory,
        },
        RegistryEntry {
            id: lower_third::YouTubeLowerThird::ID,
            config: VideoConfig::new(fps, 150, 1280, 720)?,
            default_props: serde_json::to_value(lower_third::LowerThirdProps::default())?,
            factory: lower_third::YouTubeLowerThird::factory,
        },
    ])
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/catalogue.rs"]
mod tests;
