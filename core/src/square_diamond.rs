use crate::grid::HeightGrid;
use crate::random::RandomSource;

// Fill every cell with independent noise, row-major draw order.
// This is the floor the displacement passes refine.
pub fn seed_noise<R: RandomSource>(grid: &mut HeightGrid, source: &mut R) {
    grid.fill_with(|| source.sample());
}

// Square-diamond midpoint displacement over a toroidal grid
pub struct SquareDiamond {
    samples: usize, // starting lattice step; halved every pass
    scale: f64,     // starting displacement magnitude; halved every pass
}

impl SquareDiamond {
    pub fn new(samples: usize, scale: f64) -> Self {
        Self { samples, scale }
    }

    // Refine the grid in place, one square+diamond pass per halving of
    // `samples`. The last pass (step 1) has half 0 and only adds noise.
    pub fn apply<R: RandomSource>(&self, grid: &mut HeightGrid, source: &mut R) {
        let mut samples = self.samples;
        let mut scale = self.scale;

        while samples > 0 {
            pass(grid, source, samples, scale);
            samples /= 2;
            scale /= 2.0;
        }
    }
}

fn pass<R: RandomSource>(grid: &mut HeightGrid, source: &mut R, step: usize, scale: f64) {
    let size = grid.size();
    let half = step / 2;

    // Square step: lattice centers from the four diagonal corners
    for y in (half..size + half).step_by(step) {
        for x in (half..size + half).step_by(step) {
            let offset = source.sample() * scale;
            square(grid, x as isize, y as isize, half as isize, offset);
        }
    }

    // Diamond step: edge midpoints from their four axis neighbours
    for y in (0..size).step_by(step) {
        for x in (0..size).step_by(step) {
            let (x, y, h) = (x as isize, y as isize, half as isize);
            let offset = source.sample() * scale;
            diamond(grid, x + h, y, h, offset);
            let offset = source.sample() * scale;
            diamond(grid, x, y + h, h, offset);
        }
    }
}

#[inline]
fn square(grid: &mut HeightGrid, x: isize, y: isize, half: isize, offset: f64) {
    let a = grid.get(x - half, y - half);
    let b = grid.get(x + half, y - half);
    let c = grid.get(x - half, y + half);
    let d = grid.get(x + half, y + half);
    grid.set(x, y, (a + b + c + d) / 4.0 + offset);
}

#[inline]
fn diamond(grid: &mut HeightGrid, x: isize, y: isize, half: isize, offset: f64) {
    let a = grid.get(x - half, y);
    let b = grid.get(x + half, y);
    let c = grid.get(x, y - half);
    let d = grid.get(x, y + half);
    grid.set(x, y, (a + b + c + d) / 4.0 + offset);
}
