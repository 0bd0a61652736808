//! Match configuration: grid size, ship manifest and placement retry budget.

use alloc::vec::Vec;
use core::fmt;

pub const DEFAULT_GRID_SIZE: usize = 10;
pub const DEFAULT_MANIFEST: [usize; 7] = [1, 1, 2, 2, 3, 4, 5];
/// Placement attempts allowed per ship before giving up.
pub const DEFAULT_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Fixed configuration for the lifetime of one match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub grid_size: usize,
    pub manifest: Vec<usize>,
    pub placement_attempts: usize,
}

/// Reasons a configuration can never produce a valid fleet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyGrid,
    GridTooLarge { grid_size: usize },
    EmptyManifest,
    ZeroLengthShip { index: usize },
    ShipTooLong { index: usize, length: usize, grid_size: usize },
    ShipAreaExceeded { required: usize, available: usize },
    NoPlacementAttempts,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyGrid => write!(f, "Grid size must be at least 1"),
            ConfigError::GridTooLarge { grid_size } => {
                write!(f, "Grid size {} is too large", grid_size)
            }
            ConfigError::EmptyManifest => write!(f, "Ship manifest is empty"),
            ConfigError::ZeroLengthShip { index } => {
                write!(f, "Ship #{} has length 0", index)
            }
            ConfigError::ShipTooLong {
                index,
                length,
                grid_size,
            } => write!(
                f,
                "Ship #{} of length {} does not fit on a {}x{} grid",
                index, length, grid_size, grid_size
            ),
            ConfigError::ShipAreaExceeded {
                required,
                available,
            } => write!(
                f,
                "Ships need {} cells but the grid only has {}",
                required, available
            ),
            ConfigError::NoPlacementAttempts => {
                write!(f, "Placement attempt budget must be at least 1")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            manifest: DEFAULT_MANIFEST.to_vec(),
            placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
        }
    }
}

impl GameConfig {
    pub fn new(grid_size: usize, manifest: Vec<usize>) -> Self {
        Self {
            grid_size,
            manifest,
            placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
        }
    }

    pub fn with_placement_attempts(mut self, attempts: usize) -> Self {
        self.placement_attempts = attempts;
        self
    }

    /// Total number of ship segments across the manifest, saturating at
    /// `usize::MAX`.
    pub fn total_ship_cells(&self) -> usize {
        self.manifest
            .iter()
            .fold(0usize, |acc, &len| acc.saturating_add(len))
    }

    pub fn ship_count(&self) -> usize {
        self.manifest.len()
    }

    /// Reject configurations that can never be placed. Passing this check does
    /// not guarantee a fleet fits; the placement retry budget covers the rest.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        let available = self
            .grid_size
            .checked_mul(self.grid_size)
            .ok_or(ConfigError::GridTooLarge {
                grid_size: self.grid_size,
            })?;
        if self.manifest.is_empty() {
            return Err(ConfigError::EmptyManifest);
        }
        if self.placement_attempts == 0 {
            return Err(ConfigError::NoPlacementAttempts);
        }
        for (index, &length) in self.manifest.iter().enumerate() {
            if length == 0 {
                return Err(ConfigError::ZeroLengthShip { index });
            }
            if length > self.grid_size {
                return Err(ConfigError::ShipTooLong {
                    index,
                    length,
                    grid_size: self.grid_size,
                });
            }
        }
        let required = self.total_ship_cells();
        if required > available {
            return Err(ConfigError::ShipAreaExceeded {
                required,
                available,
            });
        }
        Ok(())
    }
}
