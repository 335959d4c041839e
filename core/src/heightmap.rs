use crate::blur::BoxBlur;
use crate::error::Result;
use crate::grid::{HeightGrid, LadderOverlay};
use crate::ladders::LadderDetector;
use crate::normalize::{Normalization, Normalizer};
use crate::params::GenerationParameters;
use crate::random::{RandomSource, SeededSource};
use crate::square_diamond::{SquareDiamond, seed_noise};

// What a finished run hands to a renderer
#[derive(Debug, Clone, PartialEq)]
pub struct HeightmapOutput {
    pub grid: HeightGrid,       // quantized heights in [0, 1]
    pub ladders: LadderOverlay, // true where a ladder was placed
    pub normalization: Normalization,
}

// One run: owns the grid, the overlay and its random source.
// Phases are meant to run in order: generate, blur, normalize, ladder_generate.
pub struct Heightmap<R: RandomSource = SeededSource> {
    params: GenerationParameters,
    source: R,
    points: HeightGrid,
    ladders: LadderOverlay,
    normalization: Option<Normalization>,
}

impl Heightmap<SeededSource> {
    // Build with a ChaCha source seeded from `params.seed`
    pub fn new(params: GenerationParameters) -> Result<Self> {
        let source = SeededSource::new(params.seed);
        Self::with_source(params, source)
    }

    // Construct and run every phase with the parameter values
    pub fn run(params: GenerationParameters) -> Result<HeightmapOutput> {
        let mut map = Self::new(params)?;
        map.generate();
        map.blur(map.params.blur_radius);
        map.normalize();
        map.ladder_generate()?;
        Ok(map.into_output())
    }
}

impl<R: RandomSource> Heightmap<R> {
    // Validates everything up front; nothing is allocated or drawn on error.
    // The grid starts as full-grid noise from `source`.
    pub fn with_source(params: GenerationParameters, mut source: R) -> Result<Self> {
        params.validate()?;

        let mut points = HeightGrid::new(params.size, 0.0)?;
        seed_noise(&mut points, &mut source);
        let ladders = LadderOverlay::new(params.size, false)?;

        Ok(Self {
            params,
            source,
            points,
            ladders,
            normalization: None,
        })
    }

    pub fn params(&self) -> &GenerationParameters {
        &self.params
    }

    pub fn points(&self) -> &HeightGrid {
        &self.points
    }

    pub fn ladders(&self) -> &LadderOverlay {
        &self.ladders
    }

    // None until normalize has run
    pub fn normalization(&self) -> Option<Normalization> {
        self.normalization
    }

    pub fn generate(&mut self) {
        SquareDiamond::new(self.params.samples, self.params.scale)
            .apply(&mut self.points, &mut self.source);
    }

    pub fn blur(&mut self, radius: usize) {
        BoxBlur::new(radius).apply(&mut self.points);
    }

    pub fn normalize(&mut self) -> Normalization {
        let n = Normalizer::new(self.params.quantization_levels).apply(&mut self.points);
        self.normalization = Some(n);
        n
    }

    pub fn ladder_generate(&mut self) -> Result<()> {
        let detector = LadderDetector::new(self.params.block_step, self.params.ladders_per_block);
        self.ladders = detector.detect(&self.points)?;
        Ok(())
    }

    // Hand the grids over. Normalizes first if that phase was skipped so the
    // output always holds quantized heights.
    pub fn into_output(mut self) -> HeightmapOutput {
        let normalization = match self.normalization {
            Some(n) => n,
            None => self.normalize(),
        };
        HeightmapOutput {
            grid: self.points,
            ladders: self.ladders,
            normalization,
        }
    }
}
