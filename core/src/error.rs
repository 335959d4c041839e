use thiserror::Error;

pub type Result<T> = std::result::Result<T, HeightmapError>;

// Configuration errors, all caught before a grid is allocated
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HeightmapError {
    #[error("invalid dimension {size}: size must be a non-zero power of two")]
    InvalidDimension { size: usize },

    #[error("grid of size {size} holds {expected} cells, got {actual}")]
    CellCountMismatch {
        size: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid block configuration: block step {block_step} does not tile a {size}x{size} grid")]
    InvalidBlockConfiguration { size: usize, block_step: usize },

    #[error("invalid samples {samples}: must be a power of two")]
    InvalidSamples { samples: usize },

    #[error("quantization levels must be at least 1")]
    InvalidQuantization,

    #[error("scale must be finite, got {scale}")]
    InvalidScale { scale: f64 },
}
