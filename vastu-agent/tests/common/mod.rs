//! Grid-world simulator for driving the agent in tests and benches.
//!
//! The simulator holds the true room; the agent only ever sees the
//! percepts it produces. Layouts are ASCII:
//!
//! | Char | Meaning |
//! |------|---------|
//! | `#`  | obstacle |
//! | `*`  | dirt |
//! | `.`  | clear floor |
//! | `^ > v <` | agent start, facing N / E / S / W |
//!
//! Anything outside the layout behaves as an obstacle.

#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use vastu_agent::{Action, Agent, Direction, GridVector, VacAgent, VacPercept};

/// True contents of one simulated cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Floor { dirty: bool },
    Obstacle,
}

/// Deterministic simulated room
#[derive(Clone, Debug)]
pub struct GridWorld {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
    start: GridVector,
    start_facing: Direction,
    position: GridVector,
    facing: Direction,
    bumped: bool,
    visited: HashSet<GridVector>,
    bumps: usize,
}

impl GridWorld {
    /// Parse an ASCII layout with exactly one agent marker.
    pub fn from_ascii(layout: &str) -> Self {
        let rows: Vec<&str> = layout
            .lines()
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();
        let height = rows.len() as i32;
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as i32;

        let mut tiles = vec![Tile::Obstacle; (width * height) as usize];
        let mut start = None;

        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let idx = y * width as usize + x;
                let facing = match ch {
                    '^' => Some(Direction::North),
                    '>' => Some(Direction::East),
                    'v' => Some(Direction::South),
                    '<' => Some(Direction::West),
                    _ => None,
                };
                tiles[idx] = match ch {
                    '#' => Tile::Obstacle,
                    '*' => Tile::Floor { dirty: true },
                    '.' | '^' | '>' | 'v' | '<' => Tile::Floor { dirty: false },
                    other => panic!("unknown layout char {:?}", other),
                };
                if let Some(facing) = facing {
                    assert!(start.is_none(), "layout has more than one agent");
                    start = Some((GridVector::new(x as i32, y as i32), facing));
                }
            }
        }

        let (start, start_facing) = start.expect("layout has no agent marker");
        Self::build(width, height, tiles, start, start_facing)
    }

    /// Walled room with isolated single-cell pillars and scattered dirt.
    ///
    /// Pillars never touch each other or the walls, so every floor cell is
    /// reachable.
    pub fn random_room(width: i32, height: i32, pillar_chance: f64, dirt_chance: f64, seed: u64) -> Self {
        assert!(width >= 3 && height >= 3);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut tiles = vec![Tile::Floor { dirty: false }; (width * height) as usize];

        let idx = |x: i32, y: i32| (y * width + x) as usize;
        for y in 0..height {
            for x in 0..width {
                if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                    tiles[idx(x, y)] = Tile::Obstacle;
                }
            }
        }

        for y in 2..height - 2 {
            for x in 2..width - 2 {
                let crowded = (-1..=1).any(|dy| {
                    (-1..=1).any(|dx| tiles[idx(x + dx, y + dy)] == Tile::Obstacle)
                });
                if !crowded && rng.gen_bool(pillar_chance) {
                    tiles[idx(x, y)] = Tile::Obstacle;
                }
            }
        }

        let floor: Vec<GridVector> = (0..height)
            .flat_map(|y| (0..width).map(move |x| GridVector::new(x, y)))
            .filter(|p| tiles[idx(p.x, p.y)] != Tile::Obstacle)
            .collect();

        for p in &floor {
            if rng.gen_bool(dirt_chance) {
                tiles[idx(p.x, p.y)] = Tile::Floor { dirty: true };
            }
        }

        let start = floor[rng.gen_range(0..floor.len())];
        let start_facing = Direction::ALL[rng.gen_range(0..4)];
        Self::build(width, height, tiles, start, start_facing)
    }

    fn build(
        width: i32,
        height: i32,
        tiles: Vec<Tile>,
        start: GridVector,
        start_facing: Direction,
    ) -> Self {
        Self {
            width,
            height,
            tiles,
            start,
            start_facing,
            position: start,
            facing: start_facing,
            bumped: false,
            visited: HashSet::new(),
            bumps: 0,
        }
    }

    fn tile(&self, pos: GridVector) -> Tile {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.width || pos.y >= self.height {
            return Tile::Obstacle;
        }
        self.tiles[(pos.y * self.width + pos.x) as usize]
    }

    fn tile_mut(&mut self, pos: GridVector) -> Option<&mut Tile> {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.width || pos.y >= self.height {
            return None;
        }
        self.tiles.get_mut((pos.y * self.width + pos.x) as usize)
    }

    pub fn is_obstacle(&self, pos: GridVector) -> bool {
        self.tile(pos) == Tile::Obstacle
    }

    pub fn is_dirty(&self, pos: GridVector) -> bool {
        self.tile(pos) == Tile::Floor { dirty: true }
    }

    pub fn position(&self) -> GridVector {
        self.position
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn bumps(&self) -> usize {
        self.bumps
    }

    /// Cells where the agent has received a percept
    pub fn visited(&self) -> &HashSet<GridVector> {
        &self.visited
    }

    /// What the agent senses at its current pose.
    ///
    /// Marks the current cell as visited.
    pub fn percept(&mut self) -> VacPercept {
        self.visited.insert(self.position);
        let ahead = self.position.step(self.facing);
        VacPercept::new(
            self.is_dirty(self.position),
            self.is_obstacle(ahead),
            self.bumped,
        )
    }

    /// Carry out an action in the true room
    pub fn apply(&mut self, action: Action) {
        self.bumped = false;
        match action {
            Action::Clean => {
                if let Some(tile) = self.tile_mut(self.position) {
                    *tile = Tile::Floor { dirty: false };
                }
            }
            Action::MoveForward => {
                let ahead = self.position.step(self.facing);
                if self.is_obstacle(ahead) {
                    self.bumped = true;
                    self.bumps += 1;
                } else {
                    self.position = ahead;
                }
            }
            Action::TurnLeft => self.facing = self.facing.turned_left(),
            Action::TurnRight => self.facing = self.facing.turned_right(),
            Action::PowerOff => {}
        }
    }

    /// Floor cells connected to the start cell
    pub fn reachable(&self) -> HashSet<GridVector> {
        let mut seen = HashSet::from([self.start]);
        let mut queue = VecDeque::from([self.start]);
        while let Some(cur) = queue.pop_front() {
            for next in cur.neighbors_4() {
                if !self.is_obstacle(next) && seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen
    }

    /// Dirty cells among `cells`
    pub fn dirt_in(&self, cells: &HashSet<GridVector>) -> usize {
        cells.iter().filter(|p| self.is_dirty(**p)).count()
    }

    /// Map a cell from the agent's local frame into the room frame
    pub fn to_room(&self, local: GridVector) -> GridVector {
        let mut v = local;
        for _ in 0..self.start_facing.index() {
            // Quarter turn clockwise with y pointing south
            v = GridVector::new(-v.y, v.x);
        }
        self.start + v
    }
}

/// Outcome of driving an agent through one episode
#[derive(Debug)]
pub struct Episode {
    pub actions: Vec<Action>,
    pub powered_off: bool,
}

impl Episode {
    pub fn count(&self, action: Action) -> usize {
        self.actions.iter().filter(|a| **a == action).count()
    }
}

/// Alternate percepts and actions until the agent powers off or
/// `max_steps` actions have been taken.
pub fn run_episode(room: &mut GridWorld, agent: &mut VacAgent, max_steps: usize) -> Episode {
    let mut actions = Vec::new();
    let mut powered_off = false;

    while actions.len() < max_steps {
        let percept = room.percept();
        agent.see(&percept);
        let Some(action) = agent.select_action() else {
            break;
        };
        room.apply(action);
        actions.push(action);
        if action == Action::PowerOff {
            powered_off = true;
            break;
        }
    }

    Episode {
        actions,
        powered_off,
    }
}

/// Generous action budget for a room
pub fn step_budget(room: &GridWorld) -> usize {
    let cells = room.reachable().len();
    50 * cells + 100
}
