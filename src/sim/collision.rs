//! Collision detection between the player's hitbox and laser segments
//!
//! The player is a circle, a laser is a thick line segment. They touch when the
//! closest point on the segment is within `hitbox + width/2` of the center.

use glam::Vec2;

use super::laser::Laser;

/// Distance from `point` to the segment `[start, end]`
///
/// Projects the point onto the segment, clamping the projection parameter to
/// `[0, 1]`. A degenerate segment (start == end) is treated as a point.
pub fn point_segment_distance(point: Vec2, start: Vec2, end: Vec2) -> f32 {
    let line_vec = end - start;
    let line_len_sq = line_vec.length_squared();

    if line_len_sq == 0.0 {
        return point.distance(start);
    }

    let t = ((point - start).dot(line_vec) / line_len_sq).clamp(0.0, 1.0);
    let closest = start + line_vec * t;
    point.distance(closest)
}

/// Check if a circle overlaps a live laser
pub fn laser_hits_circle(center: Vec2, radius: f32, laser: &Laser) -> bool {
    if !laser.active {
        return false;
    }
    let dist = point_segment_distance(center, laser.pos, laser.endpoint());
    dist <= radius + laser.width / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::laser::LaserStyle;
    use std::f32::consts::PI;

    #[test]
    fn test_distance_interior_projection() {
        let d = point_segment_distance(
            Vec2::new(5.0, 3.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
        );
        assert!((d - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_distance_clamps_to_endpoints() {
        let start = Vec2::new(0.0, 0.0);
        let end = Vec2::new(10.0, 0.0);
        // Beyond the end: distance to the end point, not the infinite line
        let d = point_segment_distance(Vec2::new(13.0, 4.0), start, end);
        assert!((d - 5.0).abs() < 1e-6);
        // Behind the start
        let d = point_segment_distance(Vec2::new(-3.0, -4.0), start, end);
        assert!((d - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_distance_degenerate_segment() {
        let p = Vec2::new(3.0, 4.0);
        let d = point_segment_distance(p, Vec2::ZERO, Vec2::ZERO);
        assert!((d - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_segment_through_center_hits() {
        let laser = Laser::new(Vec2::new(84.0, 100.0), 0.0, LaserStyle::DEFAULT);
        assert!(laser_hits_circle(Vec2::new(100.0, 100.0), 4.0, &laser));
        // Even a zero-size hitbox on a zero-width laser counts on exact contact
        let thin = Laser {
            width: 0.0,
            ..laser.clone()
        };
        assert!(laser_hits_circle(Vec2::new(100.0, 100.0), 0.0, &thin));
    }

    #[test]
    fn test_grazing_distance_threshold() {
        // Horizontal laser along y = 100, width 4 => reach = 4 + 2 = 6
        let laser = Laser::new(Vec2::new(0.0, 100.0), 0.0, LaserStyle::DEFAULT);
        assert!(laser_hits_circle(Vec2::new(16.0, 106.0), 4.0, &laser));
        assert!(!laser_hits_circle(Vec2::new(16.0, 106.5), 4.0, &laser));
    }

    #[test]
    fn test_inactive_laser_never_hits() {
        let mut laser = Laser::new(Vec2::new(0.0, 0.0), PI / 4.0, LaserStyle::DEFAULT);
        laser.active = false;
        assert!(!laser_hits_circle(Vec2::new(0.0, 0.0), 4.0, &laser));
    }
}
