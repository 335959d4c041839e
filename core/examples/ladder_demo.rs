use heightmap::{GenerationParameters, Heightmap};

fn main() {
    // 16×16 terrain, seed 2025, 4×4 ladder blocks
    let params = GenerationParameters::new(16, 8, 1.0, 2025)
        .with_blur_radius(1)
        .with_block_step(4);

    let output = match Heightmap::run(params) {
        Ok(output) => output,
        Err(err) => {
            eprintln!("generation failed: {}", err);
            std::process::exit(1);
        }
    };

    println!("{:?}", output.normalization);

    // Bands as digits 0..=4, ladders as '#'
    for (row, marks) in output.grid.rows().zip(output.ladders.rows()) {
        for (&h, &m) in row.iter().zip(marks) {
            if m {
                print!(" #");
            } else {
                print!("{:>2}", (h * 4.0).round() as u8);
            }
        }
        println!();
    }
}
