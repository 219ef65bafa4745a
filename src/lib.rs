#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod geometry;
pub mod placement;
pub mod scene;

pub use config::{PlacementConfig, load_config};
pub use geometry::{Point, Rect, point_in_rect, rects_intersect};
pub use placement::{Side, find_free_region_with, find_largest_free_region};
pub use scene::{Occupant, Scene, SceneError};

#[cfg(feature = "cli")]
pub use cli::run;
