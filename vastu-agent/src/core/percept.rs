//! Per-tick percepts.
//!
//! The agent senses three things each tick: dirt in its own cell, an
//! obstacle in the cell directly ahead, and whether its last forward move
//! hit something.

use serde::{Deserialize, Serialize};

use crate::error::{AgentError, Result};

/// Narrow interface the world model reads percepts through
pub trait Perception {
    /// Dirt in the current cell?
    fn sees_dirt(&self) -> bool;

    /// Obstacle in the cell directly ahead of the facing direction?
    fn sees_obstacle(&self) -> bool;

    /// Did the previous forward move hit something?
    fn feels_bump(&self) -> bool;
}

/// Percept snapshot for one tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VacPercept {
    /// Dirt in the current cell
    pub dirt: bool,
    /// Obstacle directly ahead
    pub obstacle: bool,
    /// Last forward move was blocked
    pub bump: bool,
}

impl VacPercept {
    /// Nothing sensed
    pub const CLEAR: VacPercept = VacPercept {
        dirt: false,
        obstacle: false,
        bump: false,
    };

    /// Bit set for dirt in the current cell
    pub const DIRT_BIT: u8 = 0b001;
    /// Bit set for an obstacle ahead
    pub const OBSTACLE_BIT: u8 = 0b010;
    /// Bit set for a felt bump
    pub const BUMP_BIT: u8 = 0b100;

    const KNOWN_BITS: u8 = Self::DIRT_BIT | Self::OBSTACLE_BIT | Self::BUMP_BIT;

    /// Create a percept from its three flags
    #[inline]
    pub fn new(dirt: bool, obstacle: bool, bump: bool) -> Self {
        Self {
            dirt,
            obstacle,
            bump,
        }
    }

    /// Decode a raw percept bit set.
    ///
    /// Bits outside the three known flags are rejected.
    pub fn from_bits(bits: u8) -> Result<Self> {
        if bits & !Self::KNOWN_BITS != 0 {
            return Err(AgentError::InvalidPercept(format!(
                "unknown percept bits {:#010b}",
                bits & !Self::KNOWN_BITS
            )));
        }
        Ok(Self {
            dirt: bits & Self::DIRT_BIT != 0,
            obstacle: bits & Self::OBSTACLE_BIT != 0,
            bump: bits & Self::BUMP_BIT != 0,
        })
    }

    /// Encode as a raw bit set
    pub fn to_bits(self) -> u8 {
        let mut bits = 0;
        if self.dirt {
            bits |= Self::DIRT_BIT;
        }
        if self.obstacle {
            bits |= Self::OBSTACLE_BIT;
        }
        if self.bump {
            bits |= Self::BUMP_BIT;
        }
        bits
    }

    /// Anything sensed that should invalidate a plan?
    #[inline]
    pub fn is_surprising(&self) -> bool {
        self.dirt || self.obstacle || self.bump
    }
}

impl Perception for VacPercept {
    fn sees_dirt(&self) -> bool {
        self.dirt
    }

    fn sees_obstacle(&self) -> bool {
        self.obstacle
    }

    fn feels_bump(&self) -> bool {
        self.bump
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bits() {
        assert_eq!(VacPercept::from_bits(0).unwrap(), VacPercept::CLEAR);
        let p = VacPercept::from_bits(0b101).unwrap();
        assert!(p.sees_dirt());
        assert!(!p.sees_obstacle());
        assert!(p.feels_bump());
        assert_eq!(p.to_bits(), 0b101);
    }

    #[test]
    fn test_unknown_bits_rejected() {
        let err = VacPercept::from_bits(0b1000).unwrap_err();
        assert!(matches!(err, AgentError::InvalidPercept(_)));
        assert!(VacPercept::from_bits(0xff).is_err());
    }

    #[test]
    fn test_surprising() {
        assert!(!VacPercept::CLEAR.is_surprising());
        assert!(VacPercept::new(false, true, false).is_surprising());
    }
}
