//! Simulation collaborators for evolving obstacle-avoiding robots.
//!
//! This crate provides the world the genetic algorithm operates in:
//!
//! - [`core`] - Geometry, obstacles and the [`Scene`] container
//! - [`robot`] - Differential-drive robots wired from proximity sensors and
//!   motor controllers
//!
//! The physics is intentionally simple: robots are discs, obstacles are
//! circles or axis-aligned rectangles, and one call to
//! [`Robot::sense_and_act`] advances a robot by one tick.
//!
//! # Example
//!
//! ```
//! use evobot_world::{Obstacle, Point, Robot, RobotId, Scene, SceneObject};
//!
//! let mut scene = Scene::new(200.0, 100.0).unwrap();
//! scene.put_one(SceneObject::Obstacle(Obstacle::circle(Point::new(150.0, 50.0), 10.0)));
//!
//! let robot = Robot::new(RobotId::new(0), scene.center(), 25.0);
//! scene.put_one(SceneObject::Robot(robot.id()));
//! assert_eq!(scene.len(), 2);
//! ```

pub use self::{core::*, robot::*};

pub mod core;
pub mod robot;

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum SceneError {
    #[display("scene bounds must be positive and finite (got {width}x{height})")]
    InvalidBounds { width: f64, height: f64 },
    #[display("object not present in scene: {_0}")]
    ObjectNotFound(#[error(not(source))] SceneObject),
}
