// Scene camera component: position, follow easing, trauma shake state.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::components::target::FollowOptions;

/// Easing rate used by the shake generator's one-shot follow call.
/// Saturates the interpolation factor at typical frame times, so shake
/// displacement effectively snaps each frame.
const SHAKE_EASE_RATE: f32 = 1.0;

/// Tuning for trauma-driven screen shake.
/// Shake intensity is trauma^trauma_power, so small trauma reads as a
/// faint tremble and large trauma as violent shaking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShakeConfig {
    /// Exponent applied to trauma before computing offsets.
    pub trauma_power: f32,
    /// Trauma removed per second.
    pub decay: f32,
    /// Maximum positional offset per axis, in world units.
    pub max_offset: Vec2,
    /// Maximum roll kick, in degrees.
    pub max_roll: f32,
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            trauma_power: 2.0,
            decay: 0.8,
            max_offset: Vec2::new(100.0, 75.0),
            max_roll: 10.0,
        }
    }
}

/// 2D scene camera owning its world-space position.
///
/// The raw position is the camera's top-left corner; the viewport-centered
/// point and the 4-corner bounds rectangle derive from it. Shake never
/// touches the raw position: it accumulates into a render-only displacement
/// so bounds queries are not perturbed by shake noise.
#[derive(Component, Debug, Clone)]
pub struct SceneCamera {
    position: Vec2,
    viewport: Vec2,
    /// World rectangle corners: top-left first, clockwise.
    bounds: [Vec2; 4],
    /// Shake intensity in [0, 1], clamped on every mutation.
    trauma: f32,
    pub shake: ShakeConfig,
    /// Render-only offset produced by the shake generator.
    shake_displacement: Vec2,
    rng: StdRng,
}

impl SceneCamera {
    /// Creates a camera at the world origin with the given viewport size.
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        let mut camera = Self {
            position: Vec2::ZERO,
            viewport: Vec2::new(viewport_width, viewport_height),
            bounds: [Vec2::ZERO; 4],
            trauma: 0.0,
            shake: ShakeConfig::default(),
            shake_displacement: Vec2::ZERO,
            rng: StdRng::from_entropy(),
        };
        camera.refresh_bounds();
        camera
    }

    /// Replaces the shake tuning.
    pub fn with_shake(mut self, shake: ShakeConfig) -> Self {
        self.shake = shake;
        self
    }

    /// Seeds the shake RNG for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Raw world-space position (top-left corner, un-shaken).
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Teleports the camera; bounds follow immediately.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.refresh_bounds();
    }

    /// Viewport size in world units.
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
        self.refresh_bounds();
    }

    /// The world point at the center of the screen.
    pub fn center(&self) -> Vec2 {
        self.position + self.viewport * 0.5
    }

    /// Position the layer projector renders from: the raw position plus the
    /// current shake displacement.
    pub fn render_position(&self) -> Vec2 {
        self.position + self.shake_displacement
    }

    /// Current world rectangle, top-left first, clockwise. Derived from the
    /// raw position, so shake never shifts it.
    pub fn bounds(&self) -> [Vec2; 4] {
        self.bounds
    }

    /// Current trauma level in [0, 1].
    pub fn trauma(&self) -> f32 {
        self.trauma
    }

    /// Adds trauma, clamped to [0, 1].
    pub fn add_trauma(&mut self, amount: f32) {
        self.trauma = (self.trauma + amount).clamp(0.0, 1.0);
    }

    /// Current shake intensity (trauma^trauma_power).
    pub fn shake_amount(&self) -> f32 {
        self.trauma.powf(self.shake.trauma_power)
    }

    /// Eases the camera toward `position` on both axes.
    ///
    /// Movement only happens while the distance from the comparison point
    /// (center when `centered`, else the raw position) to `position` exceeds
    /// the tolerance; inside it the camera freezes rather than snapping.
    /// Eased coordinates are floored to integers to avoid sub-pixel shimmer.
    pub fn move_to(&mut self, position: Vec2, options: &FollowOptions, delta_secs: f32) {
        if !self.outside_tolerance(position, options) {
            return;
        }
        let factor = ease_factor(options.duration, delta_secs);
        let goal = self.follow_goal(position, options);
        self.position.x = ease_axis(self.position.x, goal.x, factor);
        self.position.y = ease_axis(self.position.y, goal.y, factor);
    }

    /// Like [`Self::move_to`] but only the x axis moves.
    pub fn move_to_horizontal(&mut self, position: Vec2, options: &FollowOptions, delta_secs: f32) {
        if !self.outside_tolerance(position, options) {
            return;
        }
        let factor = ease_factor(options.duration, delta_secs);
        let goal = self.follow_goal(position, options);
        self.position.x = ease_axis(self.position.x, goal.x, factor);
    }

    /// Like [`Self::move_to`] but only the y axis moves.
    pub fn move_to_vertical(&mut self, position: Vec2, options: &FollowOptions, delta_secs: f32) {
        if !self.outside_tolerance(position, options) {
            return;
        }
        let factor = ease_factor(options.duration, delta_secs);
        let goal = self.follow_goal(position, options);
        self.position.y = ease_axis(self.position.y, goal.y, factor);
    }

    /// Direct translation scaled by frame delta. No easing, no flooring.
    pub fn move_by(&mut self, direction: Vec2, speed: f32, delta_secs: f32) {
        self.position += direction * speed * delta_secs * 100.0;
    }

    /// Converts a world-space point into camera space.
    pub fn world_to_camera(&self, position: Vec2) -> Vec2 {
        position - self.position
    }

    /// Converts a camera-space point into world space.
    pub fn camera_to_world(&self, position: Vec2) -> Vec2 {
        position + self.position
    }

    /// Returns true iff the point lies strictly inside the current bounds.
    /// Points exactly on an edge are reported off-camera.
    pub fn is_on_camera(&self, position: Vec2) -> bool {
        position.x > self.bounds[0].x
            && position.x < self.bounds[2].x
            && position.y > self.bounds[0].y
            && position.y < self.bounds[2].y
    }

    /// Advances the shake state machine by one frame.
    ///
    /// Decays trauma, and while still shaking returns the roll kick for the
    /// layer stack and drives the shake displacement toward a randomized
    /// point around the screen center. Returns `None` once trauma reaches
    /// zero; the displacement is cleared on that transition.
    pub(crate) fn shake_step(&mut self, delta_secs: f32) -> Option<f32> {
        self.trauma = (self.trauma - self.shake.decay * delta_secs).max(0.0);
        if self.trauma == 0.0 {
            self.shake_displacement = Vec2::ZERO;
            return None;
        }
        let amount = self.shake_amount();
        let roll = self.shake.max_roll * amount * self.rng.gen::<f32>();
        let offset = Vec2::new(
            self.shake.max_offset.x * amount * self.rng.gen_range(-1.0..1.0),
            self.shake.max_offset.y * amount * self.rng.gen_range(-1.0..1.0),
        );
        self.displace_toward(self.center() + offset, delta_secs);
        Some(roll)
    }

    /// One-shot centered follow step applied to the shake displacement
    /// instead of the raw position. Shares the follow primitive's easing and
    /// tolerance dead-zone, so negligible offsets leave the camera still.
    fn displace_toward(&mut self, focus: Vec2, delta_secs: f32) {
        let shaken_center = self.center() + self.shake_displacement;
        if focus.distance(shaken_center) <= FollowOptions::DEFAULT_TOLERANCE {
            return;
        }
        let factor = ease_factor(SHAKE_EASE_RATE, delta_secs);
        let goal = focus - self.viewport * 0.5;
        let from = self.position + self.shake_displacement;
        let eased = Vec2::new(
            ease_axis(from.x, goal.x, factor),
            ease_axis(from.y, goal.y, factor),
        );
        self.shake_displacement = eased - self.position;
    }

    /// Rebuilds the 4-corner rectangle from the raw position and viewport.
    pub(crate) fn refresh_bounds(&mut self) {
        self.bounds = [
            self.position,
            self.position + Vec2::new(self.viewport.x, 0.0),
            self.position + self.viewport,
            self.position + Vec2::new(0.0, self.viewport.y),
        ];
    }

    fn outside_tolerance(&self, position: Vec2, options: &FollowOptions) -> bool {
        let tolerance = options
            .tolerance
            .unwrap_or(FollowOptions::DEFAULT_TOLERANCE)
            .max(0.0);
        let pos = if options.centered {
            self.center()
        } else {
            self.position
        };
        position.distance(pos) > tolerance
    }

    fn follow_goal(&self, position: Vec2, options: &FollowOptions) -> Vec2 {
        let center_offset = if options.centered {
            self.viewport * 0.5
        } else {
            Vec2::ZERO
        };
        position - center_offset + options.offset.unwrap_or(Vec2::ZERO)
    }
}

/// Interpolation factor for one frame. Clamped to [0, 1] so frame-time
/// spikes and malformed (negative) durations can never overshoot the target.
fn ease_factor(duration: f32, delta_secs: f32) -> f32 {
    (duration.max(0.0) * delta_secs * 100.0).clamp(0.0, 1.0)
}

/// Advances one axis toward its target and floors the result to an integer
/// world coordinate, preventing rendering seams from fractional positions.
fn ease_axis(current: f32, target: f32, factor: f32) -> f32 {
    (current + (target - current) * factor).floor()
}
