//! Robot model: sensors, motor controllers and differential-drive kinematics.
//!
//! A [`Robot`] carries two [`MotorController`]s, each reading one
//! [`ProximitySensor`] and driving one wheel [`Actuator`]. Every tick the
//! controllers sense the scene, set their wheel speeds, and the robot moves.
//!
//! ```text
//! ProximitySensor (left)  -> MotorController -> Actuator (left wheel)  \
//!                                                                       -> Robot motion
//! ProximitySensor (right) -> MotorController -> Actuator (right wheel) /
//! ```

pub use self::{actuator::*, mobile_robot::*, motor_controller::*, proximity_sensor::*};

mod actuator;
mod mobile_robot;
mod motor_controller;
mod proximity_sensor;
