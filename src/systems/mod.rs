pub mod follow;
pub mod projection;
pub mod shake;

pub use follow::*;
pub use projection::*;
pub use shake::*;

#[cfg(test)]
pub(crate) mod test_util {
    use std::time::Duration;

    use bevy::prelude::*;

    use crate::plugins::camera::SceneCameraPlugin;

    /// Bare app running the camera pipeline with a manually driven clock.
    pub fn test_app() -> App {
        let mut app = App::new();
        app.init_resource::<Time>();
        app.add_plugins(SceneCameraPlugin);
        app
    }

    /// Advances the clock by `millis` and runs one frame.
    pub fn tick(app: &mut App, millis: u64) {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(millis));
        app.update();
    }
}
