// Follow target descriptor and easing options.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// What the camera follows: a fixed world position or a live entity whose
/// transform is re-read every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FollowAnchor {
    /// A fixed world-space point.
    Point(Vec2),
    /// An entity tracked through its `Transform`.
    Entity(Entity),
}

/// Options for eased camera movement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowOptions {
    /// Easing rate, not a wall-clock time. The per-frame interpolation
    /// factor is `min(1, duration * delta_secs * 100)`.
    pub duration: f32,
    /// Minimum distance below which no movement occurs. Defaults to
    /// [`Self::DEFAULT_TOLERANCE`] when unset.
    pub tolerance: Option<f32>,
    /// Compare and aim with the viewport-centered point instead of the raw
    /// top-left position.
    pub centered: bool,
    /// Extra world-space offset added to the goal before easing.
    pub offset: Option<Vec2>,
}

impl FollowOptions {
    /// Default dead-zone radius in world units.
    pub const DEFAULT_TOLERANCE: f32 = 0.5;

    /// Creates options with the given easing rate and everything else unset.
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            tolerance: None,
            centered: false,
            offset: None,
        }
    }

    /// Keeps the target at the center of the screen.
    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = Some(offset);
        self
    }
}

impl Default for FollowOptions {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Component attached to the camera entity describing what to follow.
///
/// The camera never owns the anchor; an entity anchor is resolved against
/// the live transform each frame, so its motion is picked up continuously.
/// With both axis flags cleared the target is inert.
#[derive(Component, Debug, Clone)]
pub struct FollowTarget {
    pub anchor: FollowAnchor,
    /// Ease on the x axis.
    pub horizontal: bool,
    /// Ease on the y axis.
    pub vertical: bool,
    pub options: FollowOptions,
}

impl FollowTarget {
    /// Follows a fixed world position on both axes.
    pub fn point(position: Vec2, options: FollowOptions) -> Self {
        Self {
            anchor: FollowAnchor::Point(position),
            horizontal: true,
            vertical: true,
            options,
        }
    }

    /// Follows an entity's transform on both axes.
    pub fn entity(entity: Entity, options: FollowOptions) -> Self {
        Self {
            anchor: FollowAnchor::Entity(entity),
            horizontal: true,
            vertical: true,
            options,
        }
    }

    /// Restricts following to the x axis.
    pub fn horizontal_only(mut self) -> Self {
        self.horizontal = true;
        self.vertical = false;
        self
    }

    /// Restricts following to the y axis.
    pub fn vertical_only(mut self) -> Self {
        self.horizontal = false;
        self.vertical = true;
        self
    }

    /// Resolves the anchor to a world position for this frame. A despawned
    /// entity or one without a transform yields `None` and the frame is
    /// skipped by the follow system.
    pub fn resolve(&self, transforms: &Query<&Transform>) -> Option<Vec2> {
        match self.anchor {
            FollowAnchor::Point(position) => Some(position),
            FollowAnchor::Entity(entity) => transforms
                .get(entity)
                .ok()
                .map(|transform| transform.translation.truncate()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = FollowOptions::default();
        assert_eq!(options.duration, 1.0);
        assert_eq!(options.tolerance, None);
        assert!(!options.centered);
        assert_eq!(options.offset, None);
    }

    #[test]
    fn test_point_target_follows_both_axes() {
        let target = FollowTarget::point(Vec2::new(5.0, 5.0), FollowOptions::default());
        assert!(target.horizontal);
        assert!(target.vertical);
        assert_eq!(target.anchor, FollowAnchor::Point(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn test_axis_builders_are_exclusive() {
        let target =
            FollowTarget::point(Vec2::ZERO, FollowOptions::default()).horizontal_only();
        assert!(target.horizontal && !target.vertical);

        let target = FollowTarget::point(Vec2::ZERO, FollowOptions::default()).vertical_only();
        assert!(!target.horizontal && target.vertical);
    }
}
