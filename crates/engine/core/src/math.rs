//! Small geometric helpers shared by the world and camera code

use glam::Vec3;

/// Euclidean distance between two points
pub fn distance(a: Vec3, b: Vec3) -> f32 {
    a.distance(b)
}

/// Whether `point` lies strictly inside the sphere of `radius` around `center`
///
/// The rule is strict (`distance < radius`) so it agrees with the proximity
/// check used when the avatar interacts with a hotspot.
pub fn is_within_radius(center: Vec3, point: Vec3, radius: f32) -> bool {
    distance(center, point) < radius
}

/// Linear interpolation between two points
pub fn lerp_points(start: Vec3, end: Vec3, t: f32) -> Vec3 {
    start + (end - start) * t
}

/// Clamp a value into `[min, max]`
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Evenly spaced points on a horizontal circle around `center`
///
/// The first point sits at angle zero (+X); points advance counter-clockwise
/// when viewed from above.
pub fn points_on_circle(center: Vec3, radius: f32, count: usize) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let angle = (i as f32 / count as f32) * std::f32::consts::TAU;
            Vec3::new(
                center.x + angle.cos() * radius,
                center.y,
                center.z + angle.sin() * radius,
            )
        })
        .collect()
}

/// Heading angle (radians around +Y) that faces along a planar direction
///
/// Zero faces +Z, matching `atan2(dx, dz)`.
pub fn heading(direction: Vec3) -> f32 {
    direction.x.atan2(direction.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        assert_eq!(distance(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0)), 5.0);
    }

    #[test]
    fn test_within_radius_is_strict() {
        let center = Vec3::ZERO;
        assert!(is_within_radius(center, Vec3::new(1.9, 0.0, 0.0), 2.0));
        assert!(!is_within_radius(center, Vec3::new(2.0, 0.0, 0.0), 2.0));
        assert!(!is_within_radius(center, Vec3::new(2.1, 0.0, 0.0), 2.0));
    }

    #[test]
    fn test_lerp_points_endpoints() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(5.0, 6.0, 7.0);
        assert_eq!(lerp_points(a, b, 0.0), a);
        assert_eq!(lerp_points(a, b, 1.0), b);
        assert_eq!(lerp_points(a, b, 0.5), Vec3::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(50.0, -40.0, 40.0), 40.0);
        assert_eq!(clamp(-50.0, -40.0, 40.0), -40.0);
        assert_eq!(clamp(3.0, -40.0, 40.0), 3.0);
    }

    #[test]
    fn test_points_on_circle() {
        let points = points_on_circle(Vec3::new(0.0, 1.0, 0.0), 2.0, 4);
        assert_eq!(points.len(), 4);
        for p in &points {
            assert!((p.y - 1.0).abs() < 1e-6);
            assert!((Vec3::new(p.x, 0.0, p.z).length() - 2.0).abs() < 1e-5);
        }
        assert!((points[0].x - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_heading() {
        assert_eq!(heading(Vec3::Z), 0.0);
        assert!((heading(Vec3::X) - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!((heading(Vec3::NEG_Z).abs() - std::f32::consts::PI).abs() < 1e-6);
    }
}
