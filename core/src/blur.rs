use crate::grid::HeightGrid;

// Box blur with toroidal sampling, so edge cells see a full window.
// Reads from a snapshot; no cell ever sees an already-blurred neighbour.
pub struct BoxBlur {
    radius: usize,
}

impl BoxBlur {
    pub fn new(radius: usize) -> Self {
        Self { radius }
    }

    pub fn apply(&self, grid: &mut HeightGrid) {
        if self.radius == 0 {
            return;
        }

        let snapshot = grid.clone();
        let size = grid.size() as isize;
        let r = self.radius as isize;
        let count = ((2 * r + 1) * (2 * r + 1)) as f64;

        for y in 0..size {
            for x in 0..size {
                let mut total = 0.0;
                for dy in -r..=r {
                    for dx in -r..=r {
                        total += snapshot.get(x + dx, y + dy);
                    }
                }
                grid.set(x, y, total / count);
            }
        }
    }
}
