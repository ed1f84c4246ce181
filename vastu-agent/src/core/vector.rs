//! Grid vector and cardinal direction types.
//!
//! The agent works in a screen-like frame: +X is east, +Y is south.
//! Positions are relative to wherever the agent was switched on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{AgentError, Result};

/// Integer grid vector, used both as a cell position and as a displacement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridVector {
    /// X coordinate (grows east)
    pub x: i32,
    /// Y coordinate (grows south)
    pub y: i32,
}

impl GridVector {
    /// Origin of the agent-local frame
    pub const ZERO: GridVector = GridVector { x: 0, y: 0 };

    /// Unit step north
    pub const NORTH: GridVector = GridVector { x: 0, y: -1 };
    /// Unit step east
    pub const EAST: GridVector = GridVector { x: 1, y: 0 };
    /// Unit step south
    pub const SOUTH: GridVector = GridVector { x: 0, y: 1 };
    /// Unit step west
    pub const WEST: GridVector = GridVector { x: -1, y: 0 };

    /// Create a new grid vector
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Integer dot product
    #[inline]
    pub fn dot(&self, other: &GridVector) -> i32 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean length
    #[inline]
    pub fn magnitude(&self) -> f64 {
        f64::from(self.dot(self)).sqrt()
    }

    /// Angle between two vectors in radians, `acos(dot / (|a||b|))`.
    ///
    /// NaN when either vector has zero length.
    #[inline]
    pub fn angle(&self, other: &GridVector) -> f64 {
        let mag = self.magnitude() * other.magnitude();
        (f64::from(self.dot(other)) / mag).acos()
    }

    /// Manhattan distance to another position
    #[inline]
    pub fn manhattan_distance(&self, other: &GridVector) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// The 4 orthogonal neighbors in direction index order (N, E, S, W)
    #[inline]
    pub fn neighbors_4(&self) -> [GridVector; 4] {
        Direction::ALL.map(|dir| *self + dir.unit_vector())
    }

    /// Position one step away in the given direction
    #[inline]
    pub fn step(&self, direction: Direction) -> GridVector {
        *self + direction.unit_vector()
    }
}

impl Add for GridVector {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridVector::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for GridVector {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridVector::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for GridVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cardinal direction with a fixed cyclic order.
///
/// The discriminant is the external direction encoding: turning right adds
/// one modulo 4, turning left subtracts one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    /// Towards -Y
    #[default]
    North = 0,
    /// Towards +X
    East = 1,
    /// Towards +Y
    South = 2,
    /// Towards -X
    West = 3,
}

impl Direction {
    /// All directions in index order
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Encoded index (0..=3)
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Direction from an index, wrapping modulo 4
    #[inline]
    fn from_index_wrapping(index: i32) -> Direction {
        Direction::ALL[index.rem_euclid(4) as usize]
    }

    /// Unit displacement for this direction
    #[inline]
    pub fn unit_vector(self) -> GridVector {
        match self {
            Direction::North => GridVector::NORTH,
            Direction::East => GridVector::EAST,
            Direction::South => GridVector::SOUTH,
            Direction::West => GridVector::WEST,
        }
    }

    /// Direction after a single right turn
    #[inline]
    pub fn turned_right(self) -> Direction {
        Direction::from_index_wrapping(i32::from(self.index()) + 1)
    }

    /// Direction after a single left turn
    #[inline]
    pub fn turned_left(self) -> Direction {
        Direction::from_index_wrapping(i32::from(self.index()) - 1)
    }

    /// Reverse direction
    #[inline]
    pub fn opposite(self) -> Direction {
        Direction::from_index_wrapping(i32::from(self.index()) + 2)
    }

    /// Number of right turns (0..=3) needed to go from `self` to `target`
    #[inline]
    pub fn right_turns_to(self, target: Direction) -> u8 {
        (i32::from(target.index()) - i32::from(self.index())).rem_euclid(4) as u8
    }
}

impl TryFrom<i32> for Direction {
    type Error = AgentError;

    fn try_from(index: i32) -> Result<Self> {
        match index {
            0..=3 => Ok(Direction::ALL[index as usize]),
            _ => Err(AgentError::InvalidDirection(index)),
        }
    }
}

impl TryFrom<GridVector> for Direction {
    type Error = AgentError;

    /// Only the four unit axis steps map to a direction.
    fn try_from(v: GridVector) -> Result<Self> {
        match (v.x, v.y) {
            (0, -1) => Ok(Direction::North),
            (1, 0) => Ok(Direction::East),
            (0, 1) => Ok(Direction::South),
            (-1, 0) => Ok(Direction::West),
            (dx, dy) => Err(AgentError::InvalidDisplacement { dx, dy }),
        }
    }
}

impl From<Direction> for GridVector {
    fn from(direction: Direction) -> Self {
        direction.unit_vector()
    }
}
