use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{RobotId, SceneError};

use super::{Obstacle, Point};

/// Thickness of the border walls added by [`SceneLayout::walls`].
pub const WALL_THICKNESS: f64 = 5.0;

/// An object placed in a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneObject {
    Obstacle(Obstacle),
    Robot(RobotId),
}

impl fmt::Display for SceneObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Obstacle(obstacle) => write!(f, "obstacle {obstacle:?}"),
            Self::Robot(id) => write!(f, "robot {id}"),
        }
    }
}

/// A bounded, unordered collection of placed objects.
///
/// The scene does only bookkeeping: it never moves objects and never checks
/// bounds on insertion. Robots are stored by [`RobotId`]; their state is owned
/// by whoever created them.
#[derive(Debug, Clone)]
pub struct Scene {
    width: f64,
    height: f64,
    objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Result<Self, SceneError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(SceneError::InvalidBounds { width, height });
        }
        Ok(Self {
            width,
            height,
            objects: vec![],
        })
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Returns `true` if `point` lies inside `[0, width) x [0, height)`.
    ///
    /// A point exactly on the far edge (`x == width` or `y == height`) is
    /// outside the scene.
    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        (0.0..self.width).contains(&point.x) && (0.0..self.height).contains(&point.y)
    }

    pub fn put_one(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    pub fn put_many<I>(&mut self, objects: I)
    where
        I: IntoIterator<Item = SceneObject>,
    {
        self.objects.extend(objects);
    }

    /// Removes one occurrence of `object`.
    pub fn remove(&mut self, object: &SceneObject) -> Result<(), SceneError> {
        let index = self
            .objects
            .iter()
            .position(|o| o == object)
            .ok_or(SceneError::ObjectNotFound(*object))?;
        self.objects.remove(index);
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, object: &SceneObject) -> bool {
        self.objects.contains(object)
    }

    #[must_use]
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn obstacles(&self) -> impl Iterator<Item = &Obstacle> + '_ {
        self.objects.iter().filter_map(|o| match o {
            SceneObject::Obstacle(obstacle) => Some(obstacle),
            SceneObject::Robot(_) => None,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

/// Serializable description of a scene.
///
/// ```
/// use evobot_world::SceneLayout;
///
/// let layout: SceneLayout = serde_json::from_str(r#"{"width": 400, "height": 300, "walls": true}"#).unwrap();
/// let scene = layout.build().unwrap();
/// assert_eq!(scene.obstacles().count(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneLayout {
    pub width: f64,
    pub height: f64,
    /// Surround the scene with four border walls.
    #[serde(default)]
    pub walls: bool,
    #[serde(default)]
    pub obstacles: Vec<Obstacle>,
}

impl SceneLayout {
    pub fn build(&self) -> Result<Scene, SceneError> {
        let mut scene = Scene::new(self.width, self.height)?;
        if self.walls {
            scene.put_many(border_walls(self.width, self.height).map(SceneObject::Obstacle));
        }
        scene.put_many(self.obstacles.iter().copied().map(SceneObject::Obstacle));
        Ok(scene)
    }
}

fn border_walls(width: f64, height: f64) -> [Obstacle; 4] {
    let t = WALL_THICKNESS;
    [
        Obstacle::rect(Point::new(0.0, 0.0), Point::new(width, t)),
        Obstacle::rect(Point::new(0.0, height - t), Point::new(width, height)),
        Obstacle::rect(Point::new(0.0, 0.0), Point::new(t, height)),
        Obstacle::rect(Point::new(width - t, 0.0), Point::new(width, height)),
    ]
}
