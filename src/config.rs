use serde::{Deserialize, Serialize};
use std::path::Path;

/// Placement options layered on top of the plain free-region search. All
/// fields default to 0, which reproduces the unconfigured behavior exactly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlacementConfig {
    /// Extra clearance added around every occupied rectangle before the
    /// search, so results do not sit flush against existing content.
    pub obstacle_margin: f32,
    /// Winning regions narrower than this are discarded.
    pub min_width: f32,
    /// Winning regions shorter than this are discarded.
    pub min_height: f32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            obstacle_margin: 0.0,
            min_width: 0.0,
            min_height: 0.0,
        }
    }
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<PlacementConfig> {
    let Some(path) = path else {
        return Ok(PlacementConfig::default());
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: PlacementConfig = serde_json::from_str(&contents)?;
    Ok(parsed)
}
