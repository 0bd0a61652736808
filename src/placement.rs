//! Random, non-overlapping fleet placement.
//!
//! Every ship is placed by rejection sampling: pick a uniformly random anchor
//! and orientation, throw the candidate away if its span leaves the grid or
//! touches an occupied cell, and try again. Retries are capped per ship by
//! [`GameConfig::placement_attempts`] so an unlucky or overconstrained
//! manifest fails with [`PlacementError::Exhausted`] instead of spinning.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::{
    common::Coordinate,
    config::{ConfigError, GameConfig},
    grid::{Grid, GridError},
    ship::{Orientation, Ship},
};

/// Errors returned while placing a fleet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// The configuration can never be satisfied.
    Config(ConfigError),
    /// A ship could not be placed within the retry budget.
    Exhausted {
        ship_index: usize,
        length: usize,
        attempts: usize,
    },
    /// Underlying grid error.
    Grid(GridError),
}

impl From<ConfigError> for PlacementError {
    fn from(err: ConfigError) -> Self {
        PlacementError::Config(err)
    }
}

impl From<GridError> for PlacementError {
    fn from(err: GridError) -> Self {
        PlacementError::Grid(err)
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::Config(e) => write!(f, "Invalid configuration: {}", e),
            PlacementError::Exhausted {
                ship_index,
                length,
                attempts,
            } => write!(
                f,
                "Unable to place ship #{} (length {}) after {} attempts",
                ship_index, length, attempts
            ),
            PlacementError::Grid(e) => write!(f, "Grid error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}

/// A placed fleet: occupancy grid plus the ships in manifest order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    pub grid: Grid,
    pub ships: Vec<Ship>,
}

/// Returns `true` if `ship` stays on the grid and covers no occupied cell.
pub fn can_place(grid: &Grid, ship: &Ship) -> bool {
    ship.fits(grid.size()) && ship.cells().all(|c| !grid.contains(c))
}

/// Sample a placement for a ship of `length` that does not collide with
/// anything already on `grid`. The grid is left untouched.
pub fn random_placement<R: Rng + ?Sized>(
    rng: &mut R,
    grid: &Grid,
    length: usize,
    attempts: usize,
) -> Option<Ship> {
    let size = grid.size();
    if size == 0 {
        return None;
    }
    for attempt in 1..=attempts {
        let anchor = Coordinate::new(rng.random_range(0..size), rng.random_range(0..size));
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let ship = Ship::new(anchor, orientation, length);
        if can_place(grid, &ship) {
            log::trace!(
                "placed length {} at {} {:?} after {} attempt(s)",
                length,
                anchor,
                orientation,
                attempt
            );
            return Some(ship);
        }
    }
    None
}

/// Mark every cell of `ship` as occupied.
pub fn place(grid: &mut Grid, ship: &Ship) -> Result<(), GridError> {
    for c in ship.cells() {
        grid.set(c.row, c.col)?;
    }
    Ok(())
}

/// Place every ship of the manifest, in manifest order.
pub fn place_fleet<R: Rng + ?Sized>(
    config: &GameConfig,
    rng: &mut R,
) -> Result<Fleet, PlacementError> {
    config.validate()?;
    let mut grid = Grid::new(config.grid_size);
    let mut ships = Vec::with_capacity(config.ship_count());
    for (ship_index, &length) in config.manifest.iter().enumerate() {
        let ship = random_placement(rng, &grid, length, config.placement_attempts).ok_or(
            PlacementError::Exhausted {
                ship_index,
                length,
                attempts: config.placement_attempts,
            },
        )?;
        place(&mut grid, &ship)?;
        log::debug!(
            "ship #{} (length {}) at {} {:?}",
            ship_index,
            length,
            ship.anchor(),
            ship.orientation()
        );
        ships.push(ship);
    }
    Ok(Fleet { grid, ships })
}

/// Build a grid holding the whole manifest, with no overlaps and no
/// out-of-bounds segments.
pub fn spawn_ships<R: Rng + ?Sized>(
    config: &GameConfig,
    rng: &mut R,
) -> Result<Grid, PlacementError> {
    place_fleet(config, rng).map(|fleet| fleet.grid)
}
