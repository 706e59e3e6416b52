use bevy::prelude::*;

/// Event that feeds trauma into the camera's shake generator.
/// Emit from gameplay systems on impacts, explosions, damage, etc.
#[derive(Event, Debug)]
pub struct TraumaEvent {
    /// Trauma to add, in normalized [0, 1] units. The camera clamps its
    /// accumulated trauma at 1.0.
    pub amount: f32,
}
