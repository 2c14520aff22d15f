use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Point, Scene};

use super::MotorController;

/// Identifier of a robot placed in a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RobotId(u64);

impl RobotId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RobotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A disc-shaped differential-drive robot.
///
/// The wheel base equals the robot size. Each tick the left and right motor
/// controllers set the wheel speeds `l` and `r`; the robot turns by
/// `(r - l) / size` radians and then advances `(l + r) / 2` along its new
/// heading. The absolute distance covered is accumulated into the mileage.
#[derive(Debug, Clone)]
pub struct Robot {
    id: RobotId,
    position: Point,
    direction: f64,
    size: f64,
    mileage: f64,
    collision_with_object: bool,
    label: Option<u32>,
    left_motor_controller: Option<MotorController>,
    right_motor_controller: Option<MotorController>,
}

impl Robot {
    #[must_use]
    pub fn new(id: RobotId, position: Point, size: f64) -> Self {
        Self {
            id,
            position,
            direction: 0.0,
            size,
            mileage: 0.0,
            collision_with_object: false,
            label: None,
            left_motor_controller: None,
            right_motor_controller: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> RobotId {
        self.id
    }

    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Heading in radians, counter-clockwise from the positive x axis.
    #[must_use]
    pub fn direction(&self) -> f64 {
        self.direction
    }

    pub fn set_direction(&mut self, direction: f64) {
        self.direction = direction;
    }

    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    #[must_use]
    pub fn mileage(&self) -> f64 {
        self.mileage
    }

    #[must_use]
    pub fn collision_with_object(&self) -> bool {
        self.collision_with_object
    }

    #[must_use]
    pub fn label(&self) -> Option<u32> {
        self.label
    }

    pub fn set_label(&mut self, label: Option<u32>) {
        self.label = label;
    }

    #[must_use]
    pub fn left_motor_controller(&self) -> Option<&MotorController> {
        self.left_motor_controller.as_ref()
    }

    #[must_use]
    pub fn right_motor_controller(&self) -> Option<&MotorController> {
        self.right_motor_controller.as_ref()
    }

    pub fn set_left_motor_controller(&mut self, controller: MotorController) {
        self.left_motor_controller = Some(controller);
    }

    pub fn set_right_motor_controller(&mut self, controller: MotorController) {
        self.right_motor_controller = Some(controller);
    }

    /// Advances the robot by one tick.
    ///
    /// A wheel without a controller stands still. Once the robot overlaps an
    /// obstacle the collision flag stays set.
    pub fn sense_and_act<R>(&mut self, scene: &Scene, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        let (position, heading) = (self.position, self.direction);
        let mut wheel_speed = |controller: &mut Option<MotorController>| {
            controller.as_mut().map_or(0.0, |c| {
                c.sense_and_act(position, heading, scene, &mut *rng);
                c.actuator().value()
            })
        };
        let left = wheel_speed(&mut self.left_motor_controller);
        let right = wheel_speed(&mut self.right_motor_controller);
        self.drive(left, right);

        let radius = self.size / 2.0;
        if scene
            .obstacles()
            .any(|o| o.intersects_circle(self.position, radius))
        {
            self.collision_with_object = true;
        }
    }

    fn drive(&mut self, left: f64, right: f64) {
        let speed = (left + right) / 2.0;
        self.direction += (right - left) / self.size;
        self.position = self.position + Point::from_angle(self.direction).scale(speed);
        self.mileage += speed.abs();
    }
}
