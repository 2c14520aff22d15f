use rand::Rng;

use crate::{Point, Scene};

/// A ray-casting distance sensor mounted at the robot's center.
///
/// The reading is the free distance along the sensor ray, capped at
/// `saturation_value`. When no obstacle lies within `max_distance` the free
/// distance is `max_distance` itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximitySensor {
    /// Mounting angle relative to the robot heading, in radians.
    pub angle_offset: f64,
    pub saturation_value: f64,
    /// Half-width of the uniform noise added to each reading.
    pub error: f64,
    pub max_distance: f64,
}

impl ProximitySensor {
    #[must_use]
    pub const fn new(angle_offset: f64, saturation_value: f64, error: f64, max_distance: f64) -> Self {
        Self {
            angle_offset,
            saturation_value,
            error,
            max_distance,
        }
    }

    pub fn read<R>(&self, position: Point, heading: f64, scene: &Scene, rng: &mut R) -> f64
    where
        R: Rng + ?Sized,
    {
        let direction = Point::from_angle(heading + self.angle_offset);
        let free_distance = scene
            .obstacles()
            .filter_map(|o| o.ray_distance(position, direction, self.max_distance))
            .fold(self.max_distance, f64::min);
        let mut value = free_distance.min(self.saturation_value);
        if self.error > 0.0 {
            value += rng.random_range(-self.error..=self.error);
        }
        value.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use crate::{Obstacle, SceneObject};

    use super::*;

    fn scene_with_wall_at(x: f64) -> Scene {
        let mut scene = Scene::new(200.0, 200.0).unwrap();
        scene.put_one(SceneObject::Obstacle(Obstacle::rect(
            Point::new(x, 0.0),
            Point::new(x + 10.0, 200.0),
        )));
        scene
    }

    #[test]
    fn test_reads_distance_to_obstacle() {
        let scene = scene_with_wall_at(150.0);
        let sensor = ProximitySensor::new(0.0, 500.0, 0.0, 100.0);
        let mut rng = Pcg32::seed_from_u64(0);
        let value = sensor.read(Point::new(100.0, 100.0), 0.0, &scene, &mut rng);
        assert!((value - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_reading_saturates() {
        let scene = scene_with_wall_at(150.0);
        let sensor = ProximitySensor::new(0.0, 20.0, 0.0, 100.0);
        let mut rng = Pcg32::seed_from_u64(0);
        assert_eq!(
            sensor.read(Point::new(100.0, 100.0), 0.0, &scene, &mut rng),
            20.0
        );
    }

    #[test]
    fn test_miss_reads_max_distance() {
        let scene = scene_with_wall_at(150.0);
        let sensor = ProximitySensor::new(FRAC_PI_2, 500.0, 0.0, 30.0);
        let mut rng = Pcg32::seed_from_u64(0);
        assert_eq!(
            sensor.read(Point::new(100.0, 100.0), 0.0, &scene, &mut rng),
            30.0
        );
    }

    #[test]
    fn test_noise_stays_within_error() {
        let scene = scene_with_wall_at(150.0);
        let sensor = ProximitySensor::new(0.0, 500.0, 2.0, 100.0);
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..100 {
            let value = sensor.read(Point::new(100.0, 100.0), 0.0, &scene, &mut rng);
            assert!((48.0..=52.0).contains(&value));
        }
    }
}
