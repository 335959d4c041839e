use serde::{Deserialize, Serialize};

use crate::error::{HeightmapError, Result};
use crate::grid::check_size;

// Everything one run needs. Fixed for the lifetime of a Heightmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParameters {
    pub size: usize,              // grid edge, power of two
    pub samples: usize,           // initial lattice step, power of two; lower is rougher
    pub scale: f64,               // initial displacement magnitude
    pub blur_radius: usize,       // box blur half-width, 0 disables
    pub quantization_levels: u32, // number of bands above the background band
    pub block_step: usize,        // ladder scan block edge
    pub ladders_per_block: usize, // cap on ladder marks per block
    pub seed: u64,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            size: 32,
            samples: 16,
            scale: 1.0,
            blur_radius: 1,
            quantization_levels: 4,
            block_step: 8,
            ladders_per_block: 2,
            seed: 0,
        }
    }
}

impl GenerationParameters {
    pub fn new(size: usize, samples: usize, scale: f64, seed: u64) -> Self {
        Self {
            size,
            samples,
            scale,
            seed,
            ..Self::default()
        }
    }

    pub fn with_blur_radius(mut self, radius: usize) -> Self {
        self.blur_radius = radius;
        self
    }

    pub fn with_quantization_levels(mut self, levels: u32) -> Self {
        self.quantization_levels = levels;
        self
    }

    pub fn with_block_step(mut self, block_step: usize) -> Self {
        self.block_step = block_step;
        self
    }

    pub fn with_ladders_per_block(mut self, ladders: usize) -> Self {
        self.ladders_per_block = ladders;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    // Reject anything that would corrupt addressing or divide by zero later.
    // Size goes first so a bad size is always reported as InvalidDimension.
    pub fn validate(&self) -> Result<()> {
        check_size(self.size)?;
        check_block_step(self.size, self.block_step)?;
        if !self.samples.is_power_of_two() {
            return Err(HeightmapError::InvalidSamples {
                samples: self.samples,
            });
        }
        if self.quantization_levels == 0 {
            return Err(HeightmapError::InvalidQuantization);
        }
        if !self.scale.is_finite() {
            return Err(HeightmapError::InvalidScale { scale: self.scale });
        }
        Ok(())
    }
}

// Blocks must tile the grid exactly
pub fn check_block_step(size: usize, block_step: usize) -> Result<()> {
    if block_step == 0 || block_step > size || size % block_step != 0 {
        return Err(HeightmapError::InvalidBlockConfiguration { size, block_step });
    }
    Ok(())
}
