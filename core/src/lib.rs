// heightmap: square-diamond terrain on a torus, smoothed, quantized into
// bands and marked with ladders where bands meet
pub mod blur;
pub mod error;
pub mod grid;
pub mod heightmap;
pub mod ladders;
pub mod normalize;
pub mod params;
pub mod random;
pub mod square_diamond;

pub use blur::BoxBlur;
pub use error::{HeightmapError, Result};
pub use grid::{HeightGrid, LadderOverlay, ToroidalGrid};
pub use heightmap::{Heightmap, HeightmapOutput};
pub use ladders::LadderDetector;
pub use normalize::{BACKGROUND, Normalization, Normalizer};
pub use params::GenerationParameters;
pub use random::{RandomSource, SeededSource};
pub use square_diamond::SquareDiamond;
