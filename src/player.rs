//! Player controller: one side's ship grid, its attack history and its
//! guess strategy.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;
use rand::Rng;

use crate::{
    common::{BoardError, Coordinate, HitStatus},
    config::GameConfig,
    grid::Grid,
    knowledge::KnowledgeGrid,
    placement::{spawn_ships, PlacementError},
    strategy::GuessStrategy,
};

/// Owns a player's ship truth and knowledge of the opponent. The opponent
/// only ever learns hit/miss results through [`PlayerController::attack`].
pub struct PlayerController {
    name: String,
    grid: Grid,
    knowledge: KnowledgeGrid,
    strategy: Box<dyn GuessStrategy>,
}

impl PlayerController {
    /// Wrap an already populated grid.
    pub fn new(name: impl Into<String>, grid: Grid, strategy: Box<dyn GuessStrategy>) -> Self {
        let knowledge = KnowledgeGrid::new(grid.size());
        Self {
            name: name.into(),
            grid,
            knowledge,
            strategy,
        }
    }

    /// Create a controller with a freshly placed fleet.
    pub fn spawn<R: Rng + ?Sized>(
        name: impl Into<String>,
        config: &GameConfig,
        rng: &mut R,
        strategy: Box<dyn GuessStrategy>,
    ) -> Result<Self, PlacementError> {
        let grid = spawn_ships(config, rng)?;
        Ok(Self::new(name, grid, strategy))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn strategy_label(&self) -> &str {
        self.strategy.label()
    }

    pub fn grid_size(&self) -> usize {
        self.grid.size()
    }

    /// Own ship grid, as it stands after all resolved attacks.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Results of this player's attacks against the opponent.
    pub fn knowledge(&self) -> &KnowledgeGrid {
        &self.knowledge
    }

    pub fn has_ship_at(&self, coord: Coordinate) -> bool {
        self.grid.contains(coord)
    }

    /// Resolve an incoming attack. A hit destroys that single segment; off-grid
    /// coordinates change nothing and report `Unknown`.
    pub fn attack(&mut self, coord: Coordinate) -> HitStatus {
        let hit = self
            .grid
            .get(coord.row, coord.col)
            .and_then(|occupied| {
                if occupied {
                    self.grid.clear(coord.row, coord.col)?;
                }
                Ok(occupied)
            });
        match hit {
            Ok(true) => HitStatus::Hit,
            Ok(false) => HitStatus::Miss,
            Err(e) => {
                log::debug!("{}: ignoring attack at {}: {}", self.name, coord, e);
                HitStatus::Unknown
            }
        }
    }

    /// Store the result of this player's attack at `coord` and pass it on to
    /// the strategy.
    pub fn record_feedback(&mut self, coord: Coordinate, status: HitStatus) -> Result<(), BoardError> {
        self.knowledge.record(coord, status)?;
        self.strategy.observe(coord, status);
        Ok(())
    }

    /// Ask the bound strategy for the next target.
    pub fn choose_move(&mut self) -> Coordinate {
        self.strategy.choose_move(&self.knowledge)
    }

    /// Ship segments still standing.
    pub fn remaining_ship_cells(&self) -> usize {
        self.grid.count_ones()
    }

    pub fn is_eliminated(&self) -> bool {
        self.grid.is_empty()
    }
}

impl fmt::Debug for PlayerController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerController")
            .field("name", &self.name)
            .field("strategy", &self.strategy.label())
            .field("remaining", &self.remaining_ship_cells())
            .field("known", &self.knowledge.known_count())
            .finish()
    }
}
