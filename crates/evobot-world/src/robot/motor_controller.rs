use rand::Rng;

use crate::{Point, Scene};

use super::{Actuator, ProximitySensor};

/// Proportional controller mapping one sensor reading to one wheel speed.
///
/// The commanded value is `coefficient * reading`, but never less than
/// `min_actuator_value`.
#[derive(Debug, Clone, PartialEq)]
pub struct MotorController {
    sensor: ProximitySensor,
    coefficient: f64,
    actuator: Actuator,
    min_actuator_value: f64,
}

impl MotorController {
    #[must_use]
    pub fn new(
        sensor: ProximitySensor,
        coefficient: f64,
        actuator: Actuator,
        min_actuator_value: f64,
    ) -> Self {
        Self {
            sensor,
            coefficient,
            actuator,
            min_actuator_value,
        }
    }

    #[must_use]
    pub fn sensor(&self) -> &ProximitySensor {
        &self.sensor
    }

    #[must_use]
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    #[must_use]
    pub fn min_actuator_value(&self) -> f64 {
        self.min_actuator_value
    }

    #[must_use]
    pub fn actuator(&self) -> &Actuator {
        &self.actuator
    }

    pub fn sense_and_act<R>(&mut self, position: Point, heading: f64, scene: &Scene, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        let reading = self.sensor.read(position, heading, scene, rng);
        self.actuator
            .set_value((self.coefficient * reading).max(self.min_actuator_value));
    }
}
