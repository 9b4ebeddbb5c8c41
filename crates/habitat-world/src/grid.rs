//! Fixed-size 2D storage with at most one occupant per cell.

use habitat_core::{Coordinate, Error, Result};

/// A bounded 2D grid.
///
/// Cells are stored one column per `x`, each column holding `height` cells
/// indexed by `y`. Dimensions are read back from the live table, so a grid
/// that is empty in either direction has no valid coordinate at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<Vec<Option<T>>>,
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self { cells: Vec::new() }
    }
}

impl<T> Grid<T> {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        Ok(Self {
            cells: Self::allocate(width, height)?,
        })
    }

    /// Reallocate to `width` x `height`, discarding every occupant
    pub fn initialize(&mut self, width: i32, height: i32) -> Result<()> {
        self.cells = Self::allocate(width, height)?;
        Ok(())
    }

    fn allocate(width: i32, height: i32) -> Result<Vec<Vec<Option<T>>>> {
        if width < 0 || height < 0 {
            return Err(Error::InvalidArgument(format!(
                "grid dimensions must be non-negative, got {}x{}",
                width, height
            )));
        }

        Ok((0..width)
            .map(|_| (0..height).map(|_| None).collect())
            .collect())
    }

    pub fn width(&self) -> i32 {
        self.cells.len() as i32
    }

    pub fn height(&self) -> i32 {
        self.cells.first().map_or(0, |column| column.len() as i32)
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        let (width, height) = (self.width(), self.height());
        if width == 0 || height == 0 {
            return false;
        }
        x >= 0 && x < width && y >= 0 && y < height
    }

    fn out_of_bounds(&self, x: i32, y: i32) -> Error {
        Error::OutOfBounds {
            x,
            y,
            width: self.width(),
            height: self.height(),
        }
    }

    fn cell(&self, x: i32, y: i32) -> Result<&Option<T>> {
        if !self.in_bounds(x, y) {
            return Err(self.out_of_bounds(x, y));
        }
        Ok(&self.cells[x as usize][y as usize])
    }

    fn cell_mut(&mut self, x: i32, y: i32) -> Result<&mut Option<T>> {
        if !self.in_bounds(x, y) {
            return Err(self.out_of_bounds(x, y));
        }
        Ok(&mut self.cells[x as usize][y as usize])
    }

    /// Write `value` into (x, y), dropping whatever was there
    pub fn put(&mut self, x: i32, y: i32, value: Option<T>) -> Result<()> {
        *self.cell_mut(x, y)? = value;
        Ok(())
    }

    /// Write `value` into (x, y) and hand back the previous occupant
    pub fn replace(&mut self, x: i32, y: i32, value: Option<T>) -> Result<Option<T>> {
        Ok(std::mem::replace(self.cell_mut(x, y)?, value))
    }

    pub fn get(&self, x: i32, y: i32) -> Result<Option<&T>> {
        Ok(self.cell(x, y)?.as_ref())
    }

    pub fn free(&mut self, x: i32, y: i32) -> Result<()> {
        self.put(x, y, None)
    }

    /// Live view of the table, one column per `x`
    pub fn rows(&self) -> &[Vec<Option<T>>] {
        &self.cells
    }

    /// Mutable access to every column.
    ///
    /// Writes through these slices land in the grid itself. Column length
    /// and identity cannot change through them.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [Option<T>]> + '_ {
        self.cells.iter_mut().map(Vec::as_mut_slice)
    }

    /// Fresh column containers holding clones of each cell.
    ///
    /// With `T` a shared handle such as `Arc`, the occupants themselves are
    /// not duplicated.
    pub fn rows_copied(&self) -> Vec<Vec<Option<T>>>
    where
        T: Clone,
    {
        self.cells.iter().map(|column| column.to_vec()).collect()
    }

    /// Every occupant in table order (outer `x`, inner `y`), empty cells skipped
    pub fn flatten(&self) -> impl Iterator<Item = &T> + '_ {
        self.cells
            .iter()
            .flat_map(|column| column.iter().filter_map(Option::as_ref))
    }

    /// Iterator over occupied cells with their coordinates
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, &T)> + '_ {
        self.cells.iter().enumerate().flat_map(|(x, column)| {
            column.iter().enumerate().filter_map(move |(y, cell)| {
                cell.as_ref()
                    .map(|item| (Coordinate::new(x as i32, y as i32), item))
            })
        })
    }

    /// Coordinates of every occupied cell
    pub fn positions(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.iter().map(|(pos, _)| pos)
    }

    /// Number of occupied cells
    pub fn len(&self) -> usize {
        self.flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.flatten().next().is_none()
    }
}
