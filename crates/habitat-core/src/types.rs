//! Core type definitions for grid worlds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Unique identifier for the environment a world belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnvironmentId(pub Uuid);

impl EnvironmentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EnvironmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EnvironmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 2D coordinate in a world.
///
/// Carries no validation of its own: whether a coordinate is usable depends
/// on the grid it is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Anything that knows where it sits in a world.
pub trait Located {
    fn x(&self) -> i32;
    fn y(&self) -> i32;

    fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.x(), self.y())
    }
}

impl Located for Coordinate {
    fn x(&self) -> i32 {
        self.x
    }

    fn y(&self) -> i32 {
        self.y
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn x(&self) -> i32 {
        (**self).x()
    }

    fn y(&self) -> i32 {
        (**self).y()
    }
}

impl<T: Located + ?Sized> Located for Box<T> {
    fn x(&self) -> i32 {
        (**self).x()
    }

    fn y(&self) -> i32 {
        (**self).y()
    }
}

impl<T: Located + ?Sized> Located for Arc<T> {
    fn x(&self) -> i32 {
        (**self).x()
    }

    fn y(&self) -> i32 {
        (**self).y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pebble {
        at: Coordinate,
    }

    impl Located for Pebble {
        fn x(&self) -> i32 {
            self.at.x
        }

        fn y(&self) -> i32 {
            self.at.y
        }
    }

    #[test]
    fn test_coordinate_equality() {
        assert_eq!(Coordinate::new(2, 1), Coordinate::new(2, 1));
        assert_ne!(Coordinate::new(2, 1), Coordinate::new(1, 2));
        assert_eq!(Coordinate::from((4, 7)), Coordinate::new(4, 7));
    }

    #[test]
    fn test_coordinate_display() {
        assert_eq!(Coordinate::new(3, -1).to_string(), "(3, -1)");
    }

    #[test]
    fn test_located_through_pointers() {
        let pebble = Arc::new(Pebble {
            at: Coordinate::new(5, 6),
        });
        assert_eq!(pebble.coordinate(), Coordinate::new(5, 6));
        assert_eq!((&*pebble).x(), 5);
        assert_eq!(Box::new(Coordinate::new(1, 9)).y(), 9);
    }

    #[test]
    fn test_environment_ids_are_unique() {
        assert_ne!(EnvironmentId::new(), EnvironmentId::new());
    }
}
