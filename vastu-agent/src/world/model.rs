//! Sparse belief map and believed agent pose.

use indexmap::IndexMap;

use crate::core::{CellKnowledge, Direction, GridVector};

/// Cell tallies over the known map, for logging.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapStats {
    /// Cells with any recorded belief
    pub known: usize,
    /// Cells the agent has stood on
    pub explored: usize,
    /// Known obstacle cells
    pub obstacles: usize,
    /// Cells believed dirty
    pub dirty: usize,
    /// Known cells still waiting to be explored
    pub frontier: usize,
}

/// The agent's internal picture of the world.
///
/// Positions are in an agent-local frame: the agent starts at the origin
/// facing north, whatever its true pose is. Cells are kept in discovery
/// order so every scan over the map is reproducible.
#[derive(Clone, Debug)]
pub struct WorldModel {
    pub(super) cells: IndexMap<GridVector, CellKnowledge>,
    pub(super) position: GridVector,
    pub(super) facing: Direction,
    pub(super) obstacle_seen: bool,
    pub(super) felt_bump: bool,
    pub(super) dirt_seen: bool,
    pub(super) shut_down: bool,
}

impl Default for WorldModel {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldModel {
    /// Fresh model with only the starting cell known
    pub fn new() -> Self {
        let mut cells = IndexMap::new();
        cells.insert(GridVector::ZERO, CellKnowledge::sighted(false));
        Self {
            cells,
            position: GridVector::ZERO,
            facing: Direction::North,
            obstacle_seen: false,
            felt_bump: false,
            dirt_seen: false,
            shut_down: false,
        }
    }

    /// Believed agent position
    #[inline]
    pub fn position(&self) -> GridVector {
        self.position
    }

    /// Believed facing
    #[inline]
    pub fn facing(&self) -> Direction {
        self.facing
    }

    /// Obstacle ahead in the latest percept
    #[inline]
    pub fn obstacle_seen(&self) -> bool {
        self.obstacle_seen
    }

    /// Bump in the latest percept
    #[inline]
    pub fn felt_bump(&self) -> bool {
        self.felt_bump
    }

    /// Dirt in the latest percept
    #[inline]
    pub fn dirt_seen(&self) -> bool {
        self.dirt_seen
    }

    /// Has the agent powered off?
    #[inline]
    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Did the latest percept contradict what a plan may have assumed?
    #[inline]
    pub fn needs_replan(&self) -> bool {
        self.obstacle_seen || self.dirt_seen || self.felt_bump
    }

    /// Belief for a cell, if it has ever been seen
    #[inline]
    pub fn cell(&self, pos: GridVector) -> Option<&CellKnowledge> {
        self.cells.get(&pos)
    }

    /// All known cells in discovery order
    pub fn cells(&self) -> impl Iterator<Item = (GridVector, &CellKnowledge)> + '_ {
        self.cells.iter().map(|(pos, cell)| (*pos, cell))
    }

    /// Number of known cells
    #[inline]
    pub fn known_count(&self) -> usize {
        self.cells.len()
    }

    /// Unseen cells count as dirty, so they look worth visiting.
    pub fn is_dirty(&self, pos: GridVector) -> bool {
        self.cells.get(&pos).map_or(true, |cell| cell.dirty)
    }

    /// Unseen cells are not assumed blocked.
    pub fn is_obstacle(&self, pos: GridVector) -> bool {
        self.cells.get(&pos).is_some_and(|cell| cell.obstacle)
    }

    /// Has the agent stood on this cell?
    pub fn is_explored(&self, pos: GridVector) -> bool {
        self.cells.get(&pos).is_some_and(|cell| cell.explored)
    }

    /// Is the cell in the known map at all?
    pub fn is_seen(&self, pos: GridVector) -> bool {
        self.cells.contains_key(&pos)
    }

    /// Known, non-obstacle orthogonal neighbors in direction order.
    ///
    /// Never-seen cells are excluded: only cells the agent has bordered
    /// can be traversed.
    pub fn passable_neighbors(&self, pos: GridVector) -> impl Iterator<Item = GridVector> + '_ {
        pos.neighbors_4()
            .into_iter()
            .filter(move |n| self.cells.get(n).is_some_and(|cell| !cell.obstacle))
    }

    /// Cell tallies over the known map
    pub fn stats(&self) -> MapStats {
        self.cells.values().fold(
            MapStats {
                known: self.cells.len(),
                ..MapStats::default()
            },
            |mut stats, cell| {
                if cell.explored {
                    stats.explored += 1;
                }
                if cell.obstacle {
                    stats.obstacles += 1;
                }
                if cell.dirty {
                    stats.dirty += 1;
                }
                if cell.is_frontier() {
                    stats.frontier += 1;
                }
                stats
            },
        )
    }

    /// Insert or overwrite a cell directly (test fixtures only)
    #[cfg(test)]
    pub(crate) fn set_cell(&mut self, pos: GridVector, cell: CellKnowledge) {
        self.cells.insert(pos, cell);
    }

    /// Drop a cell from the known map (test fixtures only)
    #[cfg(test)]
    pub(crate) fn forget_cell(&mut self, pos: GridVector) {
        self.cells.shift_remove(&pos);
    }

    /// Place the agent directly (test fixtures only)
    #[cfg(test)]
    pub(crate) fn set_pose(&mut self, position: GridVector, facing: Direction) {
        self.cells.entry(position).or_default();
        self.position = position;
        self.facing = facing;
    }
}
