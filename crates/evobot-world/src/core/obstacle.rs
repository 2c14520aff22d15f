use serde::{Deserialize, Serialize};

use super::Point;

/// A static obstacle that blocks robots and proximity sensors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Obstacle {
    Circle { center: Point, radius: f64 },
    /// Axis-aligned rectangle spanning `min` to `max`.
    Rect { min: Point, max: Point },
}

impl Obstacle {
    #[must_use]
    pub const fn circle(center: Point, radius: f64) -> Self {
        Self::Circle { center, radius }
    }

    /// Creates a rectangle from two opposite corners in any order.
    #[must_use]
    pub fn rect(a: Point, b: Point) -> Self {
        Self::Rect {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Returns `true` if a disc at `center` with `radius` overlaps this obstacle.
    #[must_use]
    pub fn intersects_circle(&self, center: Point, radius: f64) -> bool {
        match *self {
            Self::Circle {
                center: c,
                radius: r,
            } => (center - c).length_squared() <= (radius + r).powi(2),
            Self::Rect { min, max } => {
                let closest = Point::new(
                    center.x.max(min.x).min(max.x),
                    center.y.max(min.y).min(max.y),
                );
                (center - closest).length_squared() <= radius.powi(2)
            }
        }
    }

    /// Casts a ray and returns the distance to the first hit.
    ///
    /// `direction` must be a unit vector. Returns `None` on a miss or when the
    /// hit lies beyond `max_distance`. A ray starting inside the obstacle hits
    /// at distance zero.
    #[must_use]
    pub fn ray_distance(&self, origin: Point, direction: Point, max_distance: f64) -> Option<f64> {
        let t = match *self {
            Self::Circle { center, radius } => ray_circle(origin, direction, center, radius)?,
            Self::Rect { min, max } => ray_rect(origin, direction, min, max)?,
        };
        (t <= max_distance).then_some(t)
    }
}

fn ray_circle(origin: Point, direction: Point, center: Point, radius: f64) -> Option<f64> {
    let offset = origin - center;
    let c = offset.length_squared() - radius * radius;
    if c <= 0.0 {
        return Some(0.0);
    }
    let b = offset.dot(direction);
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    // both roots share a sign because the origin is outside
    let t = -b - discriminant.sqrt();
    (t >= 0.0).then_some(t)
}

fn ray_rect(origin: Point, direction: Point, min: Point, max: Point) -> Option<f64> {
    let mut t_enter = f64::NEG_INFINITY;
    let mut t_exit = f64::INFINITY;
    for (o, d, lo, hi) in [
        (origin.x, direction.x, min.x, max.x),
        (origin.y, direction.y, min.y, max.y),
    ] {
        if d == 0.0 {
            if o < lo || o > hi {
                return None;
            }
            continue;
        }
        let t1 = (lo - o) / d;
        let t2 = (hi - o) / d;
        t_enter = t_enter.max(t1.min(t2));
        t_exit = t_exit.min(t1.max(t2));
    }
    if t_exit < t_enter || t_exit < 0.0 {
        return None;
    }
    Some(t_enter.max(0.0))
}
