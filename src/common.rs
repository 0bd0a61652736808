//! Common types for the simulation: coordinates, hit results and board errors.

use crate::grid::GridError;

/// Zero-based `(row, col)` position on a square grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns `true` when the coordinate lies on an `size`×`size` grid.
    pub fn in_bounds(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl core::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Result of an attack, as seen from the attacker's knowledge grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum HitStatus {
    /// Never attacked, or the attack landed off the grid.
    #[default]
    Unknown,
    /// A ship segment was destroyed here.
    Hit,
    /// Attacked, nothing here.
    Miss,
}

impl HitStatus {
    pub fn is_known(self) -> bool {
        !matches!(self, HitStatus::Unknown)
    }
}

/// Errors returned by controller and knowledge grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying grid error.
    Grid(GridError),
    /// Coordinate lies outside the grid.
    OutOfRange(Coordinate),
    /// Feedback was already recorded at this position.
    AlreadyGuessed(Coordinate),
}

impl From<GridError> for BoardError {
    fn from(err: GridError) -> Self {
        BoardError::Grid(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::Grid(e) => write!(f, "Grid error: {}", e),
            BoardError::OutOfRange(c) => write!(f, "Coordinate {} is outside the grid", c),
            BoardError::AlreadyGuessed(c) => write!(f, "Guess was already made at {}", c),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
