// Parallax layer component written by the camera every frame.

use bevy::prelude::*;

/// A parallax-scrolling render layer.
///
/// The layer is owned by the scene; the camera only writes the transform
/// fields (`pivot`, `position`, `angle`) once per frame. Speeds below 1
/// scroll slower than the camera (background), above 1 faster (foreground),
/// exactly 1 in lock-step. Fixed layers ignore camera translation entirely,
/// e.g. HUD or skybox layers.
#[derive(Component, Debug, Clone)]
pub struct ParallaxLayer {
    /// Per-axis scroll-speed multiplier.
    pub speed: Vec2,
    /// Exempt from parallax offset.
    pub fixed: bool,
    /// Multiplier applied to rotation operations.
    pub rotation_factor: f32,
    /// Written by the camera: the viewport-centered point.
    pub pivot: Vec2,
    /// Written by the camera: pivot minus the parallax offset.
    pub position: Vec2,
    /// Written by rotation operations, in degrees.
    pub angle: f32,
}

impl ParallaxLayer {
    /// Creates a non-fixed layer with the given scroll speed.
    pub fn new(speed: Vec2) -> Self {
        Self {
            speed,
            fixed: false,
            rotation_factor: 1.0,
            pivot: Vec2::ZERO,
            position: Vec2::ZERO,
            angle: 0.0,
        }
    }

    /// Creates a fixed layer that never shifts with the camera.
    pub fn fixed() -> Self {
        Self {
            fixed: true,
            ..Self::new(Vec2::ONE)
        }
    }

    pub fn with_rotation_factor(mut self, factor: f32) -> Self {
        self.rotation_factor = factor;
        self
    }
}

impl Default for ParallaxLayer {
    fn default() -> Self {
        Self::new(Vec2::ONE)
    }
}
