//! Robots driven by a genome.

use evobot_world::{Actuator, MotorController, Point, ProximitySensor, Robot, RobotId};

use crate::{genome::Genome, params::GaParams};

/// A live robot paired with the index of its genome in the current generation.
#[derive(Debug, Clone)]
pub struct GaRobot {
    pub(crate) robot: Robot,
    pub(crate) genome_index: usize,
}

impl GaRobot {
    #[must_use]
    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    #[must_use]
    pub fn genome_index(&self) -> usize {
        self.genome_index
    }
}

/// Builds a robot heading along the positive x axis, wired from `genome`.
///
/// Two proximity sensors are mounted symmetrically at `±sensor_delta_direction`;
/// each feeds its own motor controller, which drives its own wheel:
/// left sensor to left wheel, right sensor to right wheel.
#[must_use]
pub fn build_robot(
    id: RobotId,
    position: Point,
    genome: &Genome,
    label: Option<u32>,
    params: &GaParams,
) -> Robot {
    let mut robot = Robot::new(id, position, params.robot_size);
    robot.set_direction(0.0);
    robot.set_label(label);

    let sensor = |angle_offset| {
        ProximitySensor::new(
            angle_offset,
            genome.sensor_saturation_value(),
            params.sensor_error,
            genome.sensor_max_distance(),
        )
    };
    let controller = |proximity| {
        MotorController::new(
            proximity,
            genome.motor_ctrl_coefficient(),
            Actuator::new(),
            genome.motor_ctrl_min_actuator_value(),
        )
    };

    let delta = genome.sensor_delta_direction();
    robot.set_left_motor_controller(controller(sensor(delta)));
    robot.set_right_motor_controller(controller(sensor(-delta)));
    robot
}
