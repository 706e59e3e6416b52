//! 2D scene camera for Bevy.
//!
//! Smoothly follows a fixed point or a tracked entity, applies procedural
//! screen shake driven by an accumulating trauma value, projects its motion
//! onto a stack of parallax layers, and answers world-space visibility
//! queries. Add [`plugins::camera::SceneCameraPlugin`] to the app, spawn an
//! entity with a [`components::camera::SceneCamera`], and tag layer entities
//! with [`components::layer::ParallaxLayer`].

pub mod components;
pub mod events;
pub mod plugins;
pub mod systems;

pub mod prelude {
    pub use crate::components::camera::{SceneCamera, ShakeConfig};
    pub use crate::components::layer::ParallaxLayer;
    pub use crate::components::target::{FollowAnchor, FollowOptions, FollowTarget};
    pub use crate::events::TraumaEvent;
    pub use crate::plugins::camera::SceneCameraPlugin;
    pub use crate::systems::projection::{rotate_layers, rotate_layers_toward};
}
