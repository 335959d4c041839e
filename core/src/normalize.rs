use crate::grid::HeightGrid;

// The lowest band. Ladders never start or end on it.
pub const BACKGROUND: f64 = 0.0;

// What normalization found in the grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalization {
    // Heights spanned [min, max] and were rescaled to [0, 1]
    Scaled { min: f64, max: f64 },
    // Every cell held `value`; all cells were set to the background band
    Uniform { value: f64 },
}

impl Normalization {
    pub fn is_uniform(&self) -> bool {
        matches!(self, Normalization::Uniform { .. })
    }
}

// Rescale to [0, 1] then snap to the nearest multiple of 1/levels.
// Ties round away from zero (f64::round).
pub struct Normalizer {
    levels: f64,
}

impl Normalizer {
    // `levels` must be at least 1; GenerationParameters::validate checks it
    pub fn new(levels: u32) -> Self {
        Self {
            levels: levels as f64,
        }
    }

    pub fn apply(&self, grid: &mut HeightGrid) -> Normalization {
        let (min, max) = bounds(grid.cells());

        if max == min {
            grid.cells_mut().fill(BACKGROUND);
            return Normalization::Uniform { value: min };
        }

        let range = max - min;
        for v in grid.cells_mut() {
            *v = self.quantize((*v - min) / range);
        }
        Normalization::Scaled { min, max }
    }

    #[inline]
    pub fn quantize(&self, t: f64) -> f64 {
        (t * self.levels).round() / self.levels
    }
}

fn bounds(cells: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in cells {
        min = min.min(v);
        max = max.max(v);
    }
    (min, max)
}
