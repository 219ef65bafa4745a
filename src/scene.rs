// JSON scene model for the CLI and the fixture suite. The resolver core
// only ever sees plain `Rect` values; this module owns decoding and the
// caller-facing bookkeeping that the algorithm ignores.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::PlacementConfig;
use crate::geometry::Rect;
use crate::placement::find_free_region_with;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("invalid scene JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("non-finite coordinate in {0}")]
    NonFinite(&'static str),
}

/// An occupied rectangle plus the caller's optional `type` tag. The tag is
/// carried through untouched and never read by the resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Occupant {
    #[serde(flatten)]
    pub rect: Rect,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub anchor: Rect,
    #[serde(default)]
    pub occupied: Vec<Occupant>,
    pub bounds: Rect,
}

impl Scene {
    pub fn from_json(input: &str) -> Result<Scene, SceneError> {
        let scene: Scene = serde_json::from_str(input)?;
        scene.validate()?;
        Ok(scene)
    }

    fn validate(&self) -> Result<(), SceneError> {
        if !rect_is_finite(self.anchor) {
            return Err(SceneError::NonFinite("anchor"));
        }
        if !rect_is_finite(self.bounds) {
            return Err(SceneError::NonFinite("bounds"));
        }
        if self.occupied.iter().any(|o| !rect_is_finite(o.rect)) {
            return Err(SceneError::NonFinite("occupied"));
        }
        Ok(())
    }

    pub fn occupied_rects(&self) -> Vec<Rect> {
        self.occupied.iter().map(|o| o.rect).collect()
    }

    pub fn resolve(&self, config: &PlacementConfig) -> Rect {
        find_free_region_with(self.anchor, &self.occupied_rects(), self.bounds, config)
    }
}

fn rect_is_finite(rect: Rect) -> bool {
    rect.left.is_finite()
        && rect.top.is_finite()
        && rect.width.is_finite()
        && rect.height.is_finite()
}
