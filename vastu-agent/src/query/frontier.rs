//! Frontier selection for autonomous exploration.
//!
//! A frontier cell is a known cell that is neither explored nor blocked:
//! the agent has bordered it but never stood on it. Frontiers are ranked
//! by the estimated cost of reaching them from the agent's current pose.

use log::debug;

use crate::core::{Direction, GridVector};
use crate::pathfinding::CostModel;
use crate::world::WorldModel;

/// A candidate exploration target
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frontier {
    /// Cell position
    pub cell: GridVector,
    /// Estimated cost from the agent's pose
    pub cost: u32,
}

/// Frontier selector for exploration.
pub struct FrontierSelector {
    cost: CostModel,
}

impl Default for FrontierSelector {
    fn default() -> Self {
        Self::new(CostModel::default())
    }
}

impl FrontierSelector {
    /// Create a new selector with a cost model
    pub fn new(cost: CostModel) -> Self {
        Self { cost }
    }

    /// All frontier cells, cheapest first.
    ///
    /// Equal costs keep discovery order.
    pub fn detect(&self, world: &WorldModel) -> Vec<Frontier> {
        let mut frontiers: Vec<Frontier> = self
            .candidates(world, world.position(), world.facing())
            .collect();

        // Stable: ties stay in discovery order
        frontiers.sort_by_key(|f| f.cost);
        frontiers
    }

    /// The cheapest frontier; the earliest-discovered one wins a tie.
    pub fn select(&self, world: &WorldModel) -> Option<Frontier> {
        let mut best: Option<Frontier> = None;

        for frontier in self.candidates(world, world.position(), world.facing()) {
            if best.map_or(true, |b| frontier.cost < b.cost) {
                best = Some(frontier);
            }
        }

        match best {
            Some(f) => debug!(
                "[Frontier] selected {} (cost {}) from {}",
                f.cell,
                f.cost,
                world.position()
            ),
            None => debug!("[Frontier] none left"),
        }

        best
    }

    fn candidates<'w>(
        &'w self,
        world: &'w WorldModel,
        position: GridVector,
        facing: Direction,
    ) -> impl Iterator<Item = Frontier> + 'w {
        world
            .cells()
            .filter(|(_, cell)| cell.is_frontier())
            .map(move |(cell, _)| Frontier {
                cell,
                cost: self.cost.estimate_cost(position, cell, facing),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellKnowledge;

    fn explored() -> CellKnowledge {
        CellKnowledge {
            obstacle: false,
            dirty: false,
            explored: true,
        }
    }

    #[test]
    fn test_no_frontiers_fully_explored() {
        let mut world = WorldModel::new();
        world.set_cell(GridVector::ZERO, explored());
        world.set_cell(GridVector::NORTH, CellKnowledge::sighted(true));

        let selector = FrontierSelector::default();
        assert!(selector.select(&world).is_none());
        assert!(selector.detect(&world).is_empty());
    }

    #[test]
    fn test_prefers_straight_ahead() {
        let mut world = WorldModel::new();
        world.set_cell(GridVector::ZERO, explored());
        world.set_cell(GridVector::SOUTH, CellKnowledge::sighted(false));
        world.set_cell(GridVector::EAST, CellKnowledge::sighted(false));
        world.set_cell(GridVector::NORTH, CellKnowledge::sighted(false));

        let best = FrontierSelector::default().select(&world).unwrap();
        assert_eq!(best.cell, GridVector::NORTH);
        assert_eq!(best.cost, 2);
    }

    #[test]
    fn test_tie_goes_to_first_discovered() {
        let mut world = WorldModel::new();
        world.set_cell(GridVector::ZERO, explored());
        // East and West both cost 2 + 1 when facing north
        world.set_cell(GridVector::WEST, CellKnowledge::sighted(false));
        world.set_cell(GridVector::EAST, CellKnowledge::sighted(false));

        let best = FrontierSelector::default().select(&world).unwrap();
        assert_eq!(best.cell, GridVector::WEST);
        assert_eq!(best.cost, 3);
    }

    #[test]
    fn test_obstacles_are_not_frontiers() {
        let mut world = WorldModel::new();
        world.set_cell(GridVector::ZERO, explored());
        world.set_cell(GridVector::NORTH, CellKnowledge::sighted(true));
        world.set_cell(GridVector::new(0, 3), CellKnowledge::sighted(false));

        let best = FrontierSelector::default().select(&world).unwrap();
        assert_eq!(best.cell, GridVector::new(0, 3));
        assert_eq!(best.cost, 8);
    }

    #[test]
    fn test_detect_sorted_and_consistent_with_select() {
        let mut world = WorldModel::new();
        world.set_cell(GridVector::ZERO, explored());
        for pos in [
            GridVector::new(0, 4),
            GridVector::new(1, 0),
            GridVector::new(-1, 0),
            GridVector::new(0, -2),
        ] {
            world.set_cell(pos, CellKnowledge::sighted(false));
        }

        let selector = FrontierSelector::default();
        let all = selector.detect(&world);
        assert_eq!(all.len(), 4);
        for pair in all.windows(2) {
            assert!(pair[0].cost <= pair[1].cost);
        }
        assert_eq!(selector.select(&world), all.first().copied());
        // Equal cost: discovery order kept
        assert_eq!(all[0].cell, GridVector::new(1, 0));
        assert_eq!(all[1].cell, GridVector::new(-1, 0));
        assert_eq!(all[0].cost, 3);
        assert_eq!(all[2].cell, GridVector::new(0, -2));
        assert_eq!(all[2].cost, 4);
        assert_eq!(all[3].cell, GridVector::new(0, 4));
        assert_eq!(all[3].cost, 10);
    }
}
