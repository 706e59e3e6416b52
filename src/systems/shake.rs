// Trauma-driven screen shake systems.

use bevy::prelude::*;

use crate::components::camera::SceneCamera;
use crate::components::layer::ParallaxLayer;
use crate::events::TraumaEvent;
use crate::systems::projection::rotate_layers;

/// System that feeds queued trauma events into the camera.
pub fn collect_trauma_events(
    mut events: EventReader<TraumaEvent>,
    mut cameras: Query<&mut SceneCamera>,
) {
    let Ok(mut camera) = cameras.get_single_mut() else {
        return;
    };
    for event in events.read() {
        camera.add_trauma(event.amount);
        debug!("camera trauma +{:.2} -> {:.2}", event.amount, camera.trauma());
    }
}

/// System that applies trauma shake to the camera and layer stack.
///
/// Runs after target following, so shake is the last write to camera motion
/// and visually overrides steady tracking while trauma is nonzero. On the
/// frame trauma decays to zero the roll kick resets to 0 and the shake
/// displacement is cleared; afterwards the system is a no-op until trauma
/// is added again.
pub fn apply_camera_shake(
    time: Res<Time>,
    mut cameras: Query<&mut SceneCamera>,
    mut layers: Query<&mut ParallaxLayer>,
) {
    let Ok(mut camera) = cameras.get_single_mut() else {
        return;
    };
    if camera.trauma() <= 0.0 {
        return;
    }

    let roll = camera.shake_step(time.delta_secs()).unwrap_or(0.0);
    rotate_layers(layers.iter_mut().map(Mut::into_inner), roll);
}
