//! A square occupancy grid packed into unsigned words.
//!
//! The side length is chosen at runtime, so cells are spread row-major across
//! a `Vec` of words of type `T` instead of a single integer. A set bit means a
//! ship segment occupies that cell.

use alloc::vec;
use alloc::vec::Vec;
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::common::Coordinate;

/// Grid backed by 64-bit words, used everywhere in the game.
pub type Grid = BitGrid<u64>;

/// Errors returned by grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Row or column index is out of bounds [0..size).
    IndexOutOfBounds { row: usize, col: usize, size: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::IndexOutOfBounds { row, col, size } => {
                write!(f, "IndexOutOfBounds: row={}, col={}, size={}", row, col, size)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}

/// A `size`×`size` bit grid stored in words of type `T`.
#[derive(Clone, PartialEq, Eq)]
pub struct BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    size: usize,
    words: Vec<T>,
}

impl<T> BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    const WORD_BITS: usize = mem::size_of::<T>() * 8;

    /// Create an empty grid (all cells cleared).
    pub fn new(size: usize) -> Self {
        let cells = size * size;
        let len = cells.div_ceil(Self::WORD_BITS);
        BitGrid {
            size,
            words: vec![T::zero(); len],
        }
    }

    /// Build a grid with the given cells set.
    pub fn from_cells<I>(size: usize, cells: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut grid = Self::new(size);
        for c in cells {
            grid.set(c.row, c.col)?;
        }
        Ok(grid)
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of set cells.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| w.is_zero())
    }

    /// Gets the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, GridError> {
        let (word, bit) = self.locate(row, col)?;
        Ok(((self.words[word] >> bit) & T::one()) != T::zero())
    }

    /// Sets the cell at (row, col).
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        let (word, bit) = self.locate(row, col)?;
        self.words[word] = self.words[word] | (T::one() << bit);
        Ok(())
    }

    /// Clears the cell at (row, col).
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        let (word, bit) = self.locate(row, col)?;
        self.words[word] = self.words[word] & !(T::one() << bit);
        Ok(())
    }

    /// Lenient lookup: off-grid coordinates read as empty.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.get(coord.row, coord.col).unwrap_or(false)
    }

    /// Iterator over the set cells in row-major order.
    pub fn iter_set(&self) -> SetCells<'_, T> {
        SetCells { grid: self, idx: 0 }
    }

    #[inline]
    fn locate(&self, row: usize, col: usize) -> Result<(usize, usize), GridError> {
        if row >= self.size || col >= self.size {
            return Err(GridError::IndexOutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        let idx = row * self.size + col;
        Ok((idx / Self::WORD_BITS, idx % Self::WORD_BITS))
    }

    #[inline]
    fn bit(&self, idx: usize) -> bool {
        let w = self.words[idx / Self::WORD_BITS];
        ((w >> (idx % Self::WORD_BITS)) & T::one()) != T::zero()
    }
}

impl<T> fmt::Debug for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitGrid<{}> {}x{}:", core::any::type_name::<T>(), self.size, self.size)?;
        write!(f, "{}", self)
    }
}

impl<T> fmt::Display for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.size {
            for c in 0..self.size {
                let ch = if self.bit(r * self.size + c) { '■' } else { '□' };
                write!(f, "{} ", ch)?;
            }
            if r + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the set cells of a grid.
#[derive(Clone, Copy)]
pub struct SetCells<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    grid: &'a BitGrid<T>,
    idx: usize,
}

impl<T> Iterator for SetCells<'_, T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.grid.size;
        while self.idx < n * n {
            let idx = self.idx;
            self.idx += 1;
            if self.grid.bit(idx) {
                return Some(Coordinate::new(idx / n, idx % n));
            }
        }
        None
    }
}
