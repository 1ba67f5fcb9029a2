// src/models/sprite_model.rs
// Movement directions for animated sprites

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Axis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Left and right travel along x, up and down along y.
    pub fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::X,
            Direction::Up | Direction::Down => Axis::Y,
        }
    }

    /// Left and up reduce their coordinate, right and down increase it.
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left | Direction::Up => -1.0,
            Direction::Right | Direction::Down => 1.0,
        }
    }

    /// Signed transform offset for travelling `distance` in this direction.
    pub fn offset(self, distance: f32) -> f32 {
        self.sign() * distance
    }

    /// Distance covered going from `start` to `current` along this direction's axis.
    pub fn travelled(self, start: f32, current: f32) -> f32 {
        self.sign() * (current - start)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_and_sign() {
        assert_eq!(Direction::Left.axis(), Axis::X);
        assert_eq!(Direction::Right.axis(), Axis::X);
        assert_eq!(Direction::Up.axis(), Axis::Y);
        assert_eq!(Direction::Down.axis(), Axis::Y);

        assert_eq!(Direction::Left.offset(30.0), -30.0);
        assert_eq!(Direction::Up.offset(30.0), -30.0);
        assert_eq!(Direction::Right.offset(30.0), 30.0);
        assert_eq!(Direction::Down.offset(30.0), 30.0);
    }

    #[test]
    fn test_travelled_follows_direction() {
        // moving left from 500 to 400 covers 100px
        assert_eq!(Direction::Left.travelled(500.0, 400.0), 100.0);
        assert_eq!(Direction::Right.travelled(100.0, 250.0), 150.0);
        assert_eq!(Direction::Up.travelled(300.0, 280.0), 20.0);
        assert_eq!(Direction::Down.travelled(0.0, 42.0), 42.0);
        // moving against the direction counts as negative travel
        assert_eq!(Direction::Right.travelled(100.0, 90.0), -10.0);
    }

    #[test]
    fn test_direction_names() {
        let d: Direction = serde_json::from_str("\"up\"").unwrap();
        assert_eq!(d, Direction::Up);
        assert_eq!(Direction::Down.to_string(), "down");
        assert!(serde_json::from_str::<Direction>("\"sideways\"").is_err());
    }
}
