use crate::error::Result;
use crate::grid::{HeightGrid, LadderOverlay};
use crate::normalize::BACKGROUND;
use crate::params::check_block_step;

// Marks band changes ("ladders") on a quantized grid, at most
// `per_block` marks in each block_step × block_step block.
//
// Each cell is compared with its block-scan predecessor: the cell just
// before it in the row-major grid buffer. For a block's first column that
// is the last cell of the block to the left, and for the leftmost block it
// is the end of the previous grid row.
pub struct LadderDetector {
    block_step: usize,
    per_block: usize,
}

impl LadderDetector {
    pub fn new(block_step: usize, per_block: usize) -> Self {
        Self {
            block_step,
            per_block,
        }
    }

    pub fn detect(&self, grid: &HeightGrid) -> Result<LadderOverlay> {
        let size = grid.size();
        check_block_step(size, self.block_step)?;

        let mut overlay = LadderOverlay::new(size, false)?;
        if self.per_block == 0 {
            return Ok(overlay);
        }

        let blocks = size / self.block_step;
        for bx in 0..blocks {
            for by in 0..blocks {
                self.scan_block(grid, &mut overlay, bx, by);
            }
        }
        Ok(overlay)
    }

    fn scan_block(&self, grid: &HeightGrid, overlay: &mut LadderOverlay, bx: usize, by: usize) {
        let size = grid.size();
        let step = self.block_step;
        let points = grid.cells();
        let marks = overlay.cells_mut();
        let mut placed = 0;

        for p in 0..step * step {
            let x = bx * step + p % step;
            let y = by * step + p / step;
            let index = x + y * size;

            // first cell has no predecessor; end of the top row is skipped too
            if index == 0 || index == size - 1 {
                continue;
            }

            let cur = points[index];
            let prev = points[index - 1];
            if cur != prev && cur != BACKGROUND && prev != BACKGROUND {
                marks[index] = true;
                placed += 1;
                if placed >= self.per_block {
                    break;
                }
            }
        }
    }
}
