//! Axis-aligned rectangular collider.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// AABB extents attached to an entity.
///
/// `offset` places the box relative to the entity's [`MapPosition`] pivot;
/// a centered square uses `offset = (-side/2, -side/2)`. Overlap tests live
/// in [`crate::systems::collision`]; this component only describes the box.
///
/// [`MapPosition`]: super::mapposition::MapPosition
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
    pub offset: Vector2,
}

impl BoxCollider {
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2 { x: width, y: height },
            offset: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    /// Square collider centered on the entity pivot.
    pub fn centered_square(side: f32) -> Self {
        Self {
            size: Vector2 { x: side, y: side },
            offset: Vector2 {
                x: -side / 2.0,
                y: -side / 2.0,
            },
        }
    }

    /// World-space top-left corner of the box for a given entity position.
    pub fn min(&self, position: Vector2) -> Vector2 {
        position + self.offset
    }

    /// `(min, max)` corners of the box for a given entity position.
    pub fn aabb(&self, position: Vector2) -> (Vector2, Vector2) {
        let min = self.min(position);
        (min, min + self.size)
    }

    /// Point containment in world space, edges inclusive.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn contains_point(&self, position: Vector2, point: Vector2) -> bool {
        let (min, max) = self.aabb(position);
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32, y: f32) -> Vector2 {
        Vector2 { x, y }
    }

    #[test]
    fn aabb_spans_offset_to_offset_plus_size() {
        let c = BoxCollider::new(10.0, 20.0);
        let (min, max) = c.aabb(at(5.0, 5.0));
        assert_eq!(min, at(5.0, 5.0));
        assert_eq!(max, at(15.0, 25.0));
    }

    #[test]
    fn centered_square_is_centered_on_pivot() {
        let c = BoxCollider::centered_square(100.0);
        let (min, max) = c.aabb(at(400.0, 300.0));
        assert_eq!(min, at(350.0, 250.0));
        assert_eq!(max, at(450.0, 350.0));
    }

    #[test]
    fn contains_point_includes_edges() {
        let c = BoxCollider::new(10.0, 10.0);
        assert!(c.contains_point(at(0.0, 0.0), at(10.0, 10.0)));
        assert!(c.contains_point(at(0.0, 0.0), at(5.0, 5.0)));
        assert!(!c.contains_point(at(0.0, 0.0), at(10.1, 5.0)));
    }
}
