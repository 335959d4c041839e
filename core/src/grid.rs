use crate::error::{HeightmapError, Result};

// Square buffer addressed on a torus: every (x, y), negative or past the
// edge, lands on a real cell through `coord & (size - 1)`.
// Row-major: cell (x, y) lives at `x + y * size`.
#[derive(Debug, Clone, PartialEq)]
pub struct ToroidalGrid<T> {
    size: usize,
    mask: isize,
    cells: Vec<T>,
}

// Height values as produced by the generator and post-processing stages
pub type HeightGrid = ToroidalGrid<f64>;

// Ladder marks, parallel to a HeightGrid
pub type LadderOverlay = ToroidalGrid<bool>;

// Bitmask wraparound only works on power-of-two sizes
pub fn check_size(size: usize) -> Result<()> {
    if size == 0 || !size.is_power_of_two() {
        return Err(HeightmapError::InvalidDimension { size });
    }
    Ok(())
}

impl<T: Copy> ToroidalGrid<T> {
    // Allocate a size×size grid with every cell set to `value`
    pub fn new(size: usize, value: T) -> Result<Self> {
        check_size(size)?;
        Ok(Self {
            size,
            mask: size as isize - 1,
            cells: vec![value; size * size],
        })
    }

    // Wrap an existing row-major buffer
    pub fn from_cells(size: usize, cells: Vec<T>) -> Result<Self> {
        check_size(size)?;
        let expected = size * size;
        if cells.len() != expected {
            return Err(HeightmapError::CellCountMismatch {
                size,
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            size,
            mask: size as isize - 1,
            cells,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    // Flat index of the wrapped coordinate
    #[inline]
    pub fn index(&self, x: isize, y: isize) -> usize {
        ((x & self.mask) + (y & self.mask) * self.size as isize) as usize
    }

    #[inline]
    pub fn get(&self, x: isize, y: isize) -> T {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: isize, y: isize, value: T) {
        let i = self.index(x, y);
        self.cells[i] = value;
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    // Overwrite every cell in row-major order
    pub fn fill_with(&mut self, mut f: impl FnMut() -> T) {
        for cell in self.cells.iter_mut() {
            *cell = f();
        }
    }

    // Rows top to bottom, each `size` cells long
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.size)
    }
}
