//! Geometry primitives and the scene container.
//!
//! - [`Point`] - A position in scene coordinates
//! - [`Obstacle`] - Static circle or rectangle blocking robots and sensors
//! - [`Scene`] - Bounded, unordered collection of placed objects
//! - [`SceneLayout`] - Serializable description used to build a [`Scene`]

pub use self::{geometry::*, obstacle::*, scene::*};

mod geometry;
mod obstacle;
mod scene;
