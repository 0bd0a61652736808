//! Ship spans: an anchor, an orientation and a length.

use crate::common::Coordinate;

/// Direction a ship extends from its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends right (east) from the anchor.
    Horizontal,
    /// Extends down (south) from the anchor.
    Vertical,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    #[inline]
    fn step(self, anchor: Coordinate, k: usize) -> Coordinate {
        match self {
            Orientation::Horizontal => Coordinate::new(anchor.row, anchor.col + k),
            Orientation::Vertical => Coordinate::new(anchor.row + k, anchor.col),
        }
    }
}

/// A ship placed (or proposed) on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    anchor: Coordinate,
    orientation: Orientation,
    length: usize,
}

impl Ship {
    pub const fn new(anchor: Coordinate, orientation: Orientation, length: usize) -> Self {
        Self {
            anchor,
            orientation,
            length,
        }
    }

    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns `true` if the whole span stays on an `size`×`size` grid.
    pub fn fits(&self, size: usize) -> bool {
        if !self.anchor.in_bounds(size) {
            return false;
        }
        match self.orientation {
            Orientation::Horizontal => self.anchor.col + self.length <= size,
            Orientation::Vertical => self.anchor.row + self.length <= size,
        }
    }

    /// Cells covered by the ship, starting at the anchor.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.length).map(move |k| self.orientation.step(self.anchor, k))
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells().any(|c| c == coord)
    }
}
