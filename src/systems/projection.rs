// Viewport upkeep, bounds recomputation, and parallax layer projection.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::components::camera::SceneCamera;
use crate::components::layer::ParallaxLayer;

/// System that copies the primary window size into the camera's viewport.
/// Headless setups without a window keep the viewport given at construction.
pub fn sync_viewport(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut cameras: Query<&mut SceneCamera>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok(mut camera) = cameras.get_single_mut() else {
        return;
    };
    let size = Vec2::new(window.width(), window.height());
    if camera.viewport() != size {
        camera.set_viewport(size.x, size.y);
    }
}

/// System that rebuilds the camera's world rectangle from the raw position.
/// Runs after follow and shake, so `is_on_camera` always answers for the
/// frame's final un-shaken position.
pub fn refresh_camera_bounds(mut cameras: Query<&mut SceneCamera>) {
    let Ok(mut camera) = cameras.get_single_mut() else {
        return;
    };
    camera.refresh_bounds();
}

/// System that writes the camera's motion onto every parallax layer.
///
/// Every layer gets the viewport-centered point as its pivot; non-fixed
/// layers additionally offset their position by the shaken camera position
/// scaled by their per-axis speed. Layers are independent, so write order
/// does not matter.
pub fn project_parallax_layers(
    cameras: Query<&SceneCamera>,
    mut layers: Query<&mut ParallaxLayer>,
) {
    let Ok(camera) = cameras.get_single() else {
        return;
    };
    let pivot = camera.center();
    let render_position = camera.render_position();
    for mut layer in &mut layers {
        layer.pivot = pivot;
        layer.position = pivot;
        if !layer.fixed {
            layer.position = pivot - render_position * layer.speed;
        }
    }
}

/// Sets every layer's angle to `angle` scaled by its rotation factor.
/// The shake generator uses this for instantaneous roll kicks; game code
/// can call it from any system with layer access.
pub fn rotate_layers<'a>(layers: impl IntoIterator<Item = &'a mut ParallaxLayer>, angle: f32) {
    for layer in layers {
        layer.angle = angle * layer.rotation_factor;
    }
}

/// Steps every layer's angle toward `angle` by `speed` scaled by its
/// rotation factor. Angles settle within one step of the target rather than
/// snapping onto it; use [`rotate_layers`] for an instantaneous set.
pub fn rotate_layers_toward<'a>(
    layers: impl IntoIterator<Item = &'a mut ParallaxLayer>,
    angle: f32,
    speed: f32,
) {
    for layer in layers {
        if layer.angle >= angle {
            layer.angle -= speed * layer.rotation_factor;
        } else {
            layer.angle += speed * layer.rotation_factor;
        }
    }
}
