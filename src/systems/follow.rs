// Camera follow system.

use bevy::prelude::*;

use crate::components::camera::SceneCamera;
use crate::components::target::FollowTarget;

/// System that eases the camera toward its follow target.
///
/// The anchor is re-resolved every frame so tracked entities are followed
/// continuously. Targets that resolve to no position are skipped for the
/// frame; a target with both axis flags cleared is inert.
pub fn follow_camera_target(
    time: Res<Time>,
    mut cameras: Query<(&mut SceneCamera, &FollowTarget)>,
    transforms: Query<&Transform>,
) {
    let Ok((mut camera, target)) = cameras.get_single_mut() else {
        return;
    };
    let Some(position) = target.resolve(&transforms) else {
        return;
    };

    let delta = time.delta_secs();
    match (target.horizontal, target.vertical) {
        (true, true) => camera.move_to(position, &target.options, delta),
        (true, false) => camera.move_to_horizontal(position, &target.options, delta),
        (false, true) => camera.move_to_vertical(position, &target.options, delta),
        (false, false) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::target::FollowOptions;
    use crate::systems::test_util::{test_app, tick};

    #[test]
    fn test_follow_snaps_to_tracked_entity() {
        let mut app = test_app();
        let tracked = app
            .world_mut()
            .spawn(Transform::from_xyz(500.0, 300.0, 0.0))
            .id();
        let camera = app
            .world_mut()
            .spawn((
                SceneCamera::new(800.0, 600.0),
                FollowTarget::entity(tracked, FollowOptions::new(1.0)),
            ))
            .id();

        // 16ms at rate 1.0 saturates the interpolation factor
        tick(&mut app, 16);

        let camera = app.world().get::<SceneCamera>(camera).unwrap();
        assert_eq!(camera.position(), Vec2::new(500.0, 300.0));
        // bounds were rebuilt after the move
        assert_eq!(camera.bounds()[0], Vec2::new(500.0, 300.0));
    }

    #[test]
    fn test_follow_rereads_entity_position_each_frame() {
        let mut app = test_app();
        let tracked = app
            .world_mut()
            .spawn(Transform::from_xyz(100.0, 0.0, 0.0))
            .id();
        let camera = app
            .world_mut()
            .spawn((
                SceneCamera::new(800.0, 600.0),
                FollowTarget::entity(tracked, FollowOptions::new(1.0)),
            ))
            .id();

        tick(&mut app, 16);
        app.world_mut()
            .get_mut::<Transform>(tracked)
            .unwrap()
            .translation
            .x = 700.0;
        tick(&mut app, 16);

        let camera = app.world().get::<SceneCamera>(camera).unwrap();
        assert_eq!(camera.position().x, 700.0);
    }

    #[test]
    fn test_despawned_anchor_is_skipped() {
        let mut app = test_app();
        let tracked = app
            .world_mut()
            .spawn(Transform::from_xyz(100.0, 100.0, 0.0))
            .id();
        let camera = app
            .world_mut()
            .spawn((
                SceneCamera::new(800.0, 600.0),
                FollowTarget::entity(tracked, FollowOptions::new(1.0)),
            ))
            .id();

        app.world_mut().despawn(tracked);
        tick(&mut app, 16);

        let camera = app.world().get::<SceneCamera>(camera).unwrap();
        assert_eq!(camera.position(), Vec2::ZERO);
    }

    #[test]
    fn test_horizontal_only_target_leaves_y_alone() {
        let mut app = test_app();
        let camera = app
            .world_mut()
            .spawn((
                SceneCamera::new(800.0, 600.0),
                FollowTarget::point(Vec2::new(250.0, 250.0), FollowOptions::new(1.0))
                    .horizontal_only(),
            ))
            .id();

        tick(&mut app, 16);

        let camera = app.world().get::<SceneCamera>(camera).unwrap();
        assert_eq!(camera.position(), Vec2::new(250.0, 0.0));
    }

    #[test]
    fn test_inert_target_never_moves_camera() {
        let mut app = test_app();
        let mut target = FollowTarget::point(Vec2::new(250.0, 250.0), FollowOptions::new(1.0));
        target.horizontal = false;
        target.vertical = false;
        let camera = app
            .world_mut()
            .spawn((SceneCamera::new(800.0, 600.0), target))
            .id();

        tick(&mut app, 16);

        let camera = app.world().get::<SceneCamera>(camera).unwrap();
        assert_eq!(camera.position(), Vec2::ZERO);
    }
}
