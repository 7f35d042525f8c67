//! Collision detection for the body against the field edges and obstacles
//!
//! Everything is an axis-aligned box tested at the post-integration position.
//! There is no swept test, so a body moving further than its own size in one
//! tick can skip over a barrier.

use glam::Vec2;

use super::state::{Body, CrashCause, Obstacle};

/// Axis-aligned bounding box in field coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center(center: Vec2, half_extent: Vec2) -> Self {
        Self {
            min: center - half_extent,
            max: center + half_extent,
        }
    }

    /// Strict overlap on the x axis; touching edges do not count
    #[inline]
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.max.x > other.min.x && self.min.x < other.max.x
    }
}

/// Obstacle geometry shared by every obstacle in a session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleShape {
    pub width: f32,
    pub gap_height: f32,
    pub field_height: f32,
}

impl ObstacleShape {
    /// The top and bottom barrier boxes of an obstacle
    pub fn barriers(&self, obstacle: &Obstacle) -> [Aabb; 2] {
        let left = obstacle.x;
        let right = obstacle.right(self.width);
        let gap_bottom = obstacle.gap_bottom(self.gap_height);
        [
            Aabb::new(Vec2::new(left, 0.0), Vec2::new(right, obstacle.gap_top)),
            Aabb::new(
                Vec2::new(left, gap_bottom),
                Vec2::new(right, self.field_height),
            ),
        ]
    }
}

pub fn body_aabb(body: &Body) -> Aabb {
    Aabb::from_center(body.center(), Vec2::splat(body.half_extent))
}

/// Check whether the body has left the field through the top or bottom
pub fn body_boundary_collision(body: &Body, field_height: f32) -> Option<CrashCause> {
    if body.top() < 0.0 {
        Some(CrashCause::Ceiling)
    } else if body.bottom() > field_height {
        Some(CrashCause::Floor)
    } else {
        None
    }
}

/// Check whether the body hits an obstacle's barriers
///
/// Horizontal overlap is required first; then the body collides if any part
/// of it sits above the gap top or below the gap bottom.
pub fn body_obstacle_collision(body: &Body, obstacle: &Obstacle, shape: &ObstacleShape) -> bool {
    let body_box = body_aabb(body);
    let [top, bottom] = shape.barriers(obstacle);
    if !body_box.overlaps_x(&top) {
        return false;
    }
    body_box.min.y < top.max.y || body_box.max.y > bottom.min.y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape() -> ObstacleShape {
        ObstacleShape {
            width: 60.0,
            gap_height: 160.0,
            field_height: 600.0,
        }
    }

    #[test]
    fn test_boundary_collision() {
        let mut body = Body::new(100.0, 300.0, 17.0);
        assert_eq!(body_boundary_collision(&body, 600.0), None);

        // Touching the edge exactly is allowed
        body.y = 17.0;
        assert_eq!(body_boundary_collision(&body, 600.0), None);
        body.y = 583.0;
        assert_eq!(body_boundary_collision(&body, 600.0), None);

        body.y = 0.0;
        assert_eq!(
            body_boundary_collision(&body, 600.0),
            Some(CrashCause::Ceiling)
        );
        body.y = 590.0;
        assert_eq!(body_boundary_collision(&body, 600.0), Some(CrashCause::Floor));
    }

    #[test]
    fn test_body_inside_gap_is_safe() {
        // Gap spans 200..360, body spans 263..297
        let body = Body::new(100.0, 280.0, 17.0);
        let obstacle = Obstacle::new(1, 90.0, 200.0);
        assert!(!body_obstacle_collision(&body, &obstacle, &shape()));
    }

    #[test]
    fn test_body_clipping_top_barrier() {
        // Body spans 183..217, gap top at 200
        let body = Body::new(100.0, 200.0, 17.0);
        let obstacle = Obstacle::new(1, 90.0, 200.0);
        assert!(body_obstacle_collision(&body, &obstacle, &shape()));
    }

    #[test]
    fn test_body_clipping_bottom_barrier() {
        // Body spans 343..377, gap bottom at 360
        let body = Body::new(100.0, 360.0, 17.0);
        let obstacle = Obstacle::new(1, 90.0, 200.0);
        assert!(body_obstacle_collision(&body, &obstacle, &shape()));
    }

    #[test]
    fn test_no_horizontal_overlap_no_collision() {
        // Body far outside the gap, but the obstacle is still ahead
        let body = Body::new(100.0, 50.0, 17.0);
        let ahead = Obstacle::new(1, 117.0, 200.0); // left edge touches body right edge
        assert!(!body_obstacle_collision(&body, &ahead, &shape()));

        let behind = Obstacle::new(2, 23.0, 200.0); // right edge touches body left edge
        assert!(!body_obstacle_collision(&body, &behind, &shape()));

        let overlapping = Obstacle::new(3, 116.0, 200.0);
        assert!(body_obstacle_collision(&body, &overlapping, &shape()));
    }

    #[test]
    fn test_barrier_boxes() {
        let obstacle = Obstacle::new(1, 300.0, 120.0);
        let [top, bottom] = shape().barriers(&obstacle);
        assert_eq!(top, Aabb::new(Vec2::new(300.0, 0.0), Vec2::new(360.0, 120.0)));
        assert_eq!(
            bottom,
            Aabb::new(Vec2::new(300.0, 280.0), Vec2::new(360.0, 600.0))
        );

        // A body inside the top barrier box collides
        let body = Body::new(330.0, 100.0, 17.0);
        assert!(body_aabb(&body).overlaps_x(&top));
        assert!(body_obstacle_collision(&body, &obstacle, &shape()));
    }
}
