use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use heightmap::{GenerationParameters, Heightmap, HeightmapOutput, Normalization};
use image::{ImageBuffer, Rgba};

// Ladder cells are painted over the grayscale terrain in this color
const LADDER_COLOR: Rgba<u16> = Rgba([u16::MAX, 0, 0, u16::MAX]);

#[derive(Parser, Debug)]
#[command(name = "heightmap")]
#[command(about = "Render a square-diamond heightmap with ladder marks to PNG")]
struct Args {
    /// Output PNG filename
    #[arg(short, long)]
    out: PathBuf,

    /// JSON file with generation parameters; flags below override it
    #[arg(long)]
    params: Option<PathBuf>,

    /// Image size, must be a power of two
    #[arg(long)]
    size: Option<usize>,

    /// Number of samples, must be a power of two. Lower is rougher terrain
    #[arg(long)]
    samples: Option<usize>,

    /// Blur radius, somewhere between 1 and 5
    #[arg(long)]
    blur: Option<usize>,

    /// Initial displacement scale, most likely 1.0
    #[arg(long)]
    scale: Option<f64>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Number of height bands
    #[arg(long)]
    levels: Option<u32>,

    /// Ladder scan block size
    #[arg(long)]
    block_step: Option<usize>,

    /// Maximum ladders per block
    #[arg(long)]
    ladders_per_block: Option<usize>,
}

impl Args {
    fn parameters(&self) -> Result<GenerationParameters> {
        let mut p = match &self.params {
            Some(path) => load_params(path)?,
            None => GenerationParameters::default(),
        };
        if let Some(v) = self.size {
            p.size = v;
        }
        if let Some(v) = self.samples {
            p.samples = v;
        }
        if let Some(v) = self.blur {
            p.blur_radius = v;
        }
        if let Some(v) = self.scale {
            p.scale = v;
        }
        if let Some(v) = self.seed {
            p.seed = v;
        }
        if let Some(v) = self.levels {
            p.quantization_levels = v;
        }
        if let Some(v) = self.block_step {
            p.block_step = v;
        }
        if let Some(v) = self.ladders_per_block {
            p.ladders_per_block = v;
        }
        Ok(p)
    }
}

fn load_params(path: &Path) -> Result<GenerationParameters> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read parameters from {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse parameters in {}", path.display()))
}

// Grayscale channel is round(value * 65535); ladders are painted on top
fn render(output: &HeightmapOutput) -> ImageBuffer<Rgba<u16>, Vec<u16>> {
    let size = output.grid.size() as u32;
    ImageBuffer::from_fn(size, size, |x, y| {
        let (x, y) = (x as isize, y as isize);
        if output.ladders.get(x, y) {
            return LADDER_COLOR;
        }
        let gray = (output.grid.get(x, y) * u16::MAX as f64).round() as u16;
        Rgba([gray, gray, gray, u16::MAX])
    })
}

fn main() -> Result<()> {
    let args = Args::parse();
    let params = args.parameters()?;

    let output = Heightmap::run(params.clone()).context("heightmap generation failed")?;

    let ladders = output.ladders.cells().iter().filter(|&&m| m).count();
    match output.normalization {
        Normalization::Scaled { min, max } => {
            println!("Heights {:.4}..{:.4}, {} ladders placed", min, max, ladders)
        }
        Normalization::Uniform { value } => {
            println!("Uniform terrain at {:.4}, all cells in the background band", value)
        }
    }

    render(&output)
        .save(&args.out)
        .with_context(|| format!("failed to write {}", args.out.display()))?;

    println!(
        "Generated image to {} ({}x{}, seed {})",
        args.out.display(),
        params.size,
        params.size,
        params.seed
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_flags_override_defaults() {
        let args = Args::parse_from(["heightmap", "-o", "out.png", "--size", "64", "--seed", "3"]);
        let p = args.parameters().unwrap();
        assert_eq!(p.size, 64);
        assert_eq!(p.seed, 3);
        assert_eq!(p.samples, 16);
        assert_eq!(p.blur_radius, 1);
    }

    #[test]
    fn app_render_paints_ladders() {
        let params = GenerationParameters::new(16, 8, 1.0, 9);
        let output = Heightmap::run(params).unwrap();
        let img = render(&output);
        assert_eq!(img.dimensions(), (16, 16));

        for (i, (&h, &m)) in output
            .grid
            .cells()
            .iter()
            .zip(output.ladders.cells())
            .enumerate()
        {
            let px = img.get_pixel((i % 16) as u32, (i / 16) as u32);
            if m {
                assert_eq!(*px, LADDER_COLOR);
            } else {
                let gray = (h * 65535.0).round() as u16;
                assert_eq!(*px, Rgba([gray, gray, gray, u16::MAX]));
            }
        }
    }
}
