use bevy::prelude::*;

use crate::events::TraumaEvent;
use crate::systems::follow::follow_camera_target;
use crate::systems::projection::{project_parallax_layers, refresh_camera_bounds, sync_viewport};
use crate::systems::shake::{apply_camera_shake, collect_trauma_events};

/// Plugin wiring the camera pipeline into the `Update` schedule.
///
/// The chain order is load-bearing: following runs before shake so shake is
/// the last write to camera motion, bounds rebuild from the raw position
/// after both, and layer projection consumes the final state.
pub struct SceneCameraPlugin;

impl Plugin for SceneCameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<TraumaEvent>().add_systems(
            Update,
            (
                sync_viewport,
                collect_trauma_events,
                follow_camera_target,
                apply_camera_shake,
                refresh_camera_bounds,
                project_parallax_layers,
            )
                .chain(),
        );
    }
}
