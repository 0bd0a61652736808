//! Per-player record of attack results against the opponent.

use alloc::vec::Vec;

use crate::{
    common::{BoardError, Coordinate, HitStatus},
    grid::Grid,
};

/// Hit/miss history of one player's attacks. Cells set in neither grid are
/// still unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeGrid {
    hits: Grid,
    misses: Grid,
}

impl KnowledgeGrid {
    /// Fresh knowledge grid, every cell unknown.
    pub fn new(size: usize) -> Self {
        Self {
            hits: Grid::new(size),
            misses: Grid::new(size),
        }
    }

    pub fn size(&self) -> usize {
        self.hits.size()
    }

    /// Status at `coord`; off-grid coordinates read as unknown.
    pub fn status(&self, coord: Coordinate) -> HitStatus {
        if self.hits.contains(coord) {
            HitStatus::Hit
        } else if self.misses.contains(coord) {
            HitStatus::Miss
        } else {
            HitStatus::Unknown
        }
    }

    pub fn is_unknown(&self, coord: Coordinate) -> bool {
        coord.in_bounds(self.size()) && self.status(coord) == HitStatus::Unknown
    }

    /// Store the outcome of an attack. A cell may only be resolved once;
    /// recording `Unknown` leaves the grid unchanged.
    pub fn record(&mut self, coord: Coordinate, status: HitStatus) -> Result<(), BoardError> {
        if !coord.in_bounds(self.size()) {
            return Err(BoardError::OutOfRange(coord));
        }
        if self.status(coord).is_known() {
            return Err(BoardError::AlreadyGuessed(coord));
        }
        match status {
            HitStatus::Hit => self.hits.set(coord.row, coord.col)?,
            HitStatus::Miss => self.misses.set(coord.row, coord.col)?,
            HitStatus::Unknown => {}
        }
        Ok(())
    }

    /// Grid of confirmed hits.
    pub fn hits(&self) -> &Grid {
        &self.hits
    }

    /// Grid of confirmed misses.
    pub fn misses(&self) -> &Grid {
        &self.misses
    }

    pub fn hit_count(&self) -> usize {
        self.hits.count_ones()
    }

    pub fn miss_count(&self) -> usize {
        self.misses.count_ones()
    }

    /// Number of resolved cells.
    pub fn known_count(&self) -> usize {
        self.hit_count() + self.miss_count()
    }

    pub fn unknown_count(&self) -> usize {
        self.size() * self.size() - self.known_count()
    }

    /// Unknown cells in row-major order.
    pub fn unknown_cells(&self) -> Vec<Coordinate> {
        let n = self.size();
        (0..n)
            .flat_map(|row| (0..n).map(move |col| Coordinate::new(row, col)))
            .filter(|&c| self.status(c) == HitStatus::Unknown)
            .collect()
    }
}
